//! Button widget

use arno_shared::{ButtonStyle, Variant};
use leptos::prelude::*;

#[component]
pub fn Button(#[prop(optional)] variant: Variant, children: Children) -> impl IntoView {
    let style = ButtonStyle { variant }.css();

    view! {
        <button type="button" class="arno-button" style=style>
            {children()}
        </button>
    }
}
