//! Register page

use arno_shared::header::CTA_LABEL;
use arno_shared::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

/// destination of the header's call to action. the form lives elsewhere.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <section class="register">
            <h2>{CTA_LABEL}</h2>
            <A href=AppRoute::Home.path()>"←"</A>
        </section>
    }
}
