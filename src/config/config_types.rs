// src/config/config_types.rs
//
// Config types for the stage. Animation constants are fixed in crate::constants.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 500,
            title: "linerot".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rx_port: 9000,
        }
    }
}
