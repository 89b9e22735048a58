//! ==============================================================================
//! ui/mod.rs - styled widgets
//! ==============================================================================
//!
//! thin leptos wrappers that turn `arno_shared::theme` styles into markup.
//! the header composes these; nothing here knows about routes.
//!
//! ==============================================================================

mod button;
mod text;

pub use button::Button;
pub use text::Text;
