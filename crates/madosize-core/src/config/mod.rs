//! # Configuration System
//!
//! Hierarchical TOML configuration for MadoSize.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.madosize/config.toml` (global user preferences)
//! 3. **Project config** - `./.madosize/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.madosize/config.toml
//! [accessibility]
//! messaging_timeout_secs = 0.5
//!
//! [display]
//! fallback = "nearest"
//!
//! [output]
//! json = true
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use madosize_core::config::MadoConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MadoConfig::load_hierarchy()?;
//!     let timeout = config.messaging_timeout_secs();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{AccessibilityConfig, DisplayConfig, MadoConfig, OutputConfig};
pub use validation::validate_config;

impl MadoConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
