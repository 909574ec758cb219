//! # Process-wide Settings
//!
//! Two boolean feature flags, available two ways:
//!
//! - [`Settings::shared`] — one process-wide instance, initialized exactly once on
//!   first access and read-only afterwards. Safe to call from any thread.
//! - [`Settings::new`] / [`Settings::from_env`] — independent instances that have
//!   nothing to do with the shared one.
//!
//! The shared instance always carries the default (all-false) flags. Hosts that
//! want environment-driven flags build their own instance with
//! [`Settings::from_env`] and pass it around explicitly.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Feature flags for the order pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether automatic handling is enabled for the user.
    pub user_auto_setting: bool,
    /// Whether ABS is enabled for the user.
    pub user_abs: bool,
}

impl Settings {
    /// Creates an independent Settings instance with explicit flag values.
    pub const fn new(user_auto_setting: bool, user_abs: bool) -> Self {
        Self {
            user_auto_setting,
            user_abs,
        }
    }

    /// Returns the process-wide shared instance.
    ///
    /// Initialized with default flags on first call; every call returns the same
    /// reference. The instance is never mutated after initialization, so it can
    /// be read concurrently without synchronization.
    pub fn shared() -> &'static Self {
        INSTANCE.get_or_init(|| {
            debug!("Initializing shared settings");
            Self::default()
        })
    }

    /// Builds an independent instance from the environment.
    ///
    /// Reads `ORDER_AUTO_SETTING` and `ORDER_ABS`; a value of `1` or `true`
    /// (case-insensitive) enables the flag, anything else or unset leaves it
    /// disabled. Never fails and never touches the shared instance.
    pub fn from_env() -> Self {
        Self {
            user_auto_setting: env_flag("ORDER_AUTO_SETTING"),
            user_abs: env_flag("ORDER_ABS"),
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| {
            let v = v.trim().to_ascii_lowercase();
            v == "1" || v == "true"
        })
        .unwrap_or(false)
}
