//! Session configuration module.
//!
//! Presentation settings for the interactive menu.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Interactive session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Whether to print the banner above the menu
    pub show_banner: bool,

    /// Prompt printed before reading a menu choice
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            prompt: "Enter your choice: ".to_string(),
        }
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "prompt cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
