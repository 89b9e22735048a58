//! Text widget

use arno_shared::{FontWeight, TextStyle, Variant};
use leptos::prelude::*;

/// block of styled text
#[component]
pub fn Text(
    /// font size in px, inherited when unset
    #[prop(optional_no_strip)]
    size: Option<u16>,
    #[prop(optional)] weight: FontWeight,
    #[prop(optional)] variant: Variant,
    children: Children,
) -> impl IntoView {
    let style = TextStyle {
        size_px: size,
        weight,
        variant,
    }
    .css();

    view! {
        <div class="arno-text" style=style>
            {children()}
        </div>
    }
}
