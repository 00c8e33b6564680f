//! Process-environment input for resource resolution.
//!
//! The only environment variable this crate reads is the properties-path
//! override ([`constants::ENV_PROPERTIES_PATH`]). Production code uses
//! [`Env::real()`]; tests inject [`Env::overridden()`] or [`Env::empty()`]
//! instead of mutating the real process environment with `unsafe`
//! `set_var` calls.

use std::path::PathBuf;

use crate::constants;

/// Where the properties-path override comes from.
#[derive(Clone, Debug)]
pub enum Env {
    /// Read the override from the real process environment.
    Real,
    /// A fixed override path, regardless of the process environment.
    Overridden(PathBuf),
    /// No override, regardless of the process environment.
    Empty,
}

impl Env {
    /// An `Env` backed by the real process environment.
    pub fn real() -> Self {
        Env::Real
    }

    /// An `Env` with a fixed properties-path override.
    pub fn overridden(path: impl Into<PathBuf>) -> Self {
        Env::Overridden(path.into())
    }

    /// An `Env` with no override; resolution falls through to the
    /// filesystem search path.
    pub fn empty() -> Self {
        Env::Empty
    }

    /// The properties-path override, if one is set.
    pub fn properties_override(&self) -> Option<PathBuf> {
        match self {
            Env::Real => std::env::var_os(constants::ENV_PROPERTIES_PATH).map(PathBuf::from),
            Env::Overridden(path) => Some(path.clone()),
            Env::Empty => None,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
