//! The configuration registry.
//!
//! One mapping from key to value, populated by an explicit init and
//! read-only afterwards. Initialization runs under an exclusive guard and
//! swaps the whole mapping in one step, so concurrent readers never observe
//! a partially loaded mapping; a failed load leaves the previous mapping
//! (possibly empty) in place. Re-running an init replaces all prior values
//! (last init wins, no merge).

use std::collections::HashMap;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, PoisonError, RwLock, RwLockReadGuard};

use thiserror::Error;
use tracing::{debug, error};

use crate::constants;
use crate::env::Env;
use crate::properties::{self, PropertiesError};
use crate::resource;

/// Errors during registry initialization and integer lookup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The fixed resource name resolved to no readable file.
    #[error("properties resource {name:?} not found in any search location")]
    NotFound { name: String },

    /// The properties file exists but could not be read.
    #[error("failed to read properties file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// The byte stream is not valid properties text.
    #[error("failed to parse properties file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: PropertiesError,
    },

    /// A stored value could not be parsed as a base-10 integer.
    #[error("value {value:?} for key {key:?} is not a valid integer")]
    InvalidInt {
        key: String,
        value: String,
        source: ParseIntError,
    },
}

/// Process-wide key-value configuration registry.
///
/// Created empty (all accessors return their defaults), populated by
/// [`init`](Self::init) or [`init_from_path`](Self::init_from_path), then
/// treated as read-only. Prefer passing `&ConfigRegistry` to consumers;
/// [`ConfigRegistry::global()`] exists for call sites that need a
/// process-wide default instance.
pub struct ConfigRegistry {
    values: RwLock<HashMap<String, String>>,
    init_lock: Mutex<()>,
    initialized: AtomicBool,
}

impl ConfigRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            init_lock: Mutex::new(()),
            initialized: AtomicBool::new(false),
        }
    }

    /// The process-wide default instance.
    pub fn global() -> &'static ConfigRegistry {
        static GLOBAL: LazyLock<ConfigRegistry> = LazyLock::new(ConfigRegistry::new);
        &GLOBAL
    }

    /// Load the fixed resource name (`efw.properties`) from the standard
    /// search locations and replace the mapping with its contents.
    ///
    /// At most one initialization runs at a time; a failure leaves the
    /// prior mapping untouched and is retried by calling again.
    pub fn init(&self, env: &Env) -> Result<(), ConfigError> {
        let _guard = self.init_guard();
        let result = resource::locate(constants::PROPERTIES_FILE_NAME, env)
            .ok_or_else(|| ConfigError::NotFound {
                name: constants::PROPERTIES_FILE_NAME.to_string(),
            })
            .and_then(|path| self.load(&path));
        if let Err(ref err) = result {
            error!(error = %err, "configuration init failed");
        }
        result
    }

    /// Same as [`init`](Self::init), but from an explicit file-system path.
    ///
    /// Entry point for batch processes that run outside the deployed
    /// application layout.
    pub fn init_from_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let _guard = self.init_guard();
        let result = self.load(path.as_ref());
        if let Err(ref err) = result {
            error!(error = %err, "configuration init failed");
        }
        result
    }

    /// Read, parse, and atomically store the mapping. Caller holds the
    /// init guard.
    fn load(&self, path: &Path) -> Result<(), ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let parsed = properties::parse_str(&text).map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), entries = parsed.len(), "configuration loaded");

        *self.values.write().unwrap_or_else(PoisonError::into_inner) = parsed;
        self.initialized.store(true, Ordering::Release);
        Ok(())
    }

    /// Stored value for `key`, or `default` if absent. Total.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.read()
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Stored value for `key` parsed leniently as a boolean, or `default`
    /// if absent. Total.
    ///
    /// Only a case-insensitive `"true"` parses to `true`; any other stored
    /// value, malformed input included, parses to `false`. This mirrors the
    /// lenient parsing deployed properties files already depend on.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.read().get(key) {
            Some(value) => value.eq_ignore_ascii_case("true"),
            None => default,
        }
    }

    /// Stored value for `key` parsed as a base-10 integer; `default` if the
    /// key is absent or its value is empty.
    ///
    /// A present, non-empty, non-numeric value is an error propagated to
    /// the caller, not a fallback to `default`. The asymmetry with
    /// [`get_bool`](Self::get_bool) is part of the contract.
    pub fn get_int(&self, key: &str, default: i64) -> Result<i64, ConfigError> {
        let Some(value) = self.read().get(key).cloned() else {
            return Ok(default);
        };
        if value.is_empty() {
            return Ok(default);
        }
        value.parse::<i64>().map_err(|e| ConfigError::InvalidInt {
            key: key.to_string(),
            value,
            source: e,
        })
    }

    /// Stored value for `key`, if present. For call sites that distinguish
    /// "absent" from "empty" (e.g. optional exemption patterns).
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    /// Whether an initialization has completed successfully. Diagnostics
    /// only; pre-init reads are well-defined (all defaults).
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    fn init_guard(&self) -> std::sync::MutexGuard<'_, ()> {
        // A poisoned guard only means a past init panicked mid-load; the
        // stored mapping is still whole because the swap is a single step.
        self.init_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}
