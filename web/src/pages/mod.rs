//! routed views

mod home;
mod not_found;
mod register;

pub use home::HomePage;
pub use not_found::NotFound;
pub use register::RegisterPage;
