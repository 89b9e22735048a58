use arno_shared::AppRoute;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();

    if let Err(err) = path.parse::<AppRoute>() {
        warn!("{err}");
    }

    view! {
        <section class="not-found">
            <h2>"404"</h2>
            <A href=AppRoute::Home.path()>"←"</A>
        </section>
    }
}
