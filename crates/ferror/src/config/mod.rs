//! Registry configuration.
//!
//! Provides compile-time defaults with runtime environment overrides.
//!
//! # Configuration Priority (highest wins)
//!
//! 1. Environment variables (runtime)
//! 2. Cargo feature `local-codes` (compile-time)
//! 3. Library defaults
//!
//! # Example
//!
//! ```rust
//! use ferror::{CodeMode, RegistryConfig};
//!
//! let config = RegistryConfig::builtin()
//!     .mode(CodeMode::Local)
//!     .first_code(100);
//! assert_eq!(config.mode, CodeMode::Local);
//! ```

pub mod defaults;

use crate::env::{env_get, env_get_bool};

/// How a registry numbers its families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMode {
    /// One program-wide counter: ranges never overlap.
    Unique,
    /// Every family restarts at the base code. Ranges may overlap, and a
    /// group over overlapping families resolves to the first match.
    Local,
}

/// Registry configuration with builder pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Code assignment discipline
    pub mode: CodeMode,
    /// First code handed out (the first family's `begin` sentinel)
    pub first_code: i32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl RegistryConfig {
    /// Compiled-in defaults, ignoring the environment.
    pub fn builtin() -> Self {
        Self {
            mode: if defaults::UNIQUE_CODES { CodeMode::Unique } else { CodeMode::Local },
            first_code: defaults::FIRST_CODE,
        }
    }

    /// Compiled-in defaults with environment overrides.
    ///
    /// Environment variables (all optional):
    /// - `FERROR_UNIQUE_CODES` - Program-wide unique codes (0/1)
    /// - `FERROR_FIRST_CODE` - First code handed out
    pub fn from_env() -> Self {
        let builtin = Self::builtin();
        let unique = env_get_bool("FERROR_UNIQUE_CODES", builtin.mode == CodeMode::Unique);
        Self {
            mode: if unique { CodeMode::Unique } else { CodeMode::Local },
            first_code: env_get("FERROR_FIRST_CODE", builtin.first_code),
        }
    }

    pub fn mode(mut self, mode: CodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn first_code(mut self, first_code: i32) -> Self {
        self.first_code = first_code;
        self
    }
}
