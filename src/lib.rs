//! confreg — process-wide properties configuration registry (library crate).
//!
//! Loads key-value pairs from a Java-style properties file once at startup
//! and serves typed lookups (string, boolean, integer) with default-value
//! fallback for the rest of the process lifetime. Consumed as a library by
//! a hosting framework; there is no CLI or network surface.

pub mod constants;
pub mod env;
pub mod properties;
pub mod registry;
pub mod resource;

pub use registry::{ConfigError, ConfigRegistry};
