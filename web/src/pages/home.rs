use leptos::prelude::*;

/// landing page; the header carries everything for now
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <section class="home"></section> }
}
