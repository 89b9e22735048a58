//! client-side route table

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// every view the front-end router knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRoute {
    /// landing page, hosts the header only
    Home,
    /// sign in / sign up
    Register,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),
}

impl AppRoute {
    pub const ALL: [AppRoute; 2] = [AppRoute::Home, AppRoute::Register];

    /// absolute path the router matches on
    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Register => "/register",
        }
    }

    /// path without the leading slash, as the router's static segments want it
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for AppRoute {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // one trailing slash is tolerated; "/" itself is never trimmed
        let trimmed = match s.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => s,
        };

        AppRoute::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .ok_or_else(|| RouteError::Unknown(s.to_string()))
    }
}

// ==============================================================================
// tests
// ==============================================================================
