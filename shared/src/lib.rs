//! ==============================================================================
//! lib.rs - shared types for the arno web front
//! ==============================================================================
//!
//! purpose:
//!     pure data behind the site header: brand literals, the route table,
//!     palette colours and the gradient treatment used by the styled widgets.
//!     nothing in here touches the dom, so all of it is testable natively.
//!
//! relationships:
//!     - used by: web (Header view, Text/Button widgets, router shell)
//!
//! ==============================================================================

pub mod header;
pub mod routes;
pub mod theme;

pub use header::{HeaderContent, HEADER};
pub use routes::{AppRoute, RouteError};
pub use theme::{ButtonStyle, FontWeight, Gradient, PaletteColor, TextStyle, Variant};
