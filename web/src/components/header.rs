//! Header component

use arno_shared::HEADER;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::{Button, Text};

/// site header: brand on one side, sign in / sign up on the other
#[component]
pub fn Header() -> impl IntoView {
    let title = HEADER.title_style();
    let cta = HEADER.cta_style();

    view! {
        <header class="header">
            <div class="content-desktop">
                <div class="brand">
                    <Text size=title.size_px weight=title.weight variant=title.variant>
                        {HEADER.brand}
                    </Text>
                </div>
                <div class="actions">
                    <A href=HEADER.cta_href()>
                        <Button variant=cta.variant>{HEADER.cta_label}</Button>
                    </A>
                </div>
            </div>
        </header>
    }
}
