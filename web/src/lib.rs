//! ==============================================================================
//! lib.rs - Arno web front
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front-end for arno. renders the site header (brand plus a
//!     sign in / sign up call to action) above a client-side routed body.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - leptos_router resolves "/" and "/register" without a page reload
//!     - static content and styles come from arno-shared
//!
//! ==============================================================================

use arno_shared::{AppRoute, HEADER};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;
use wasm_bindgen::prelude::*;

mod components;
mod pages;
mod ui;

pub use components::Header;
use pages::{HomePage, NotFound, RegisterPage};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    log!("mounting {}", HEADER.brand);
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=HEADER.brand />
        <Router>
            <Header />
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage />
                    <Route path=StaticSegment(AppRoute::Register.segment()) view=RegisterPage />
                </Routes>
            </main>
        </Router>
    }
}
