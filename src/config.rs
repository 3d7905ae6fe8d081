#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::inquiry::dispatch::DispatchPolicy;
use crate::inquiry::format::MessageTemplate;
use crate::ui::scroll_spy::ScrollAxis;

const PRESETS: &[(&str, &str)] = &[
    ("horizontal", include_str!("../config/horizontal.json")),
    ("modal", include_str!("../config/modal.json")),
];

const DEFAULT_PRESET: &str = "horizontal";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Preset picked at build time with `SITE_PRESET=<name> trunk build`.
pub fn preset_name() -> &'static str {
    option_env!("SITE_PRESET").unwrap_or(DEFAULT_PRESET)
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub min_message: usize,
    pub max_message: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_message: 10,
            max_message: 500,
        }
    }
}

/// Delays, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub reset_delay_ms: u32,
    pub reenable_delay_ms: u32,
    pub scroll_lock_ms: u32,
    pub notice_ms: u32,
    pub initial_hash_delay_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reset_delay_ms: 1_000,
            reenable_delay_ms: 2_000,
            scroll_lock_ms: 800,
            notice_ms: 5_000,
            initial_hash_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionInfo {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub site_name: String,
    pub messaging_host: String,
    pub recipient_id: String,
    pub fallback_contact: String,
    #[serde(default)]
    pub limits: Limits,
    pub template: MessageTemplate,
    pub dispatch: DispatchPolicy,
    pub scroll_axis: ScrollAxis,
    #[serde(default)]
    pub header_offset: f64,
    #[serde(default)]
    pub modals: bool,
    pub sections: Vec<SectionInfo>,
    #[serde(default)]
    pub timings: Timings,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        if config.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        Ok(config)
    }

    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        let (_, raw) = PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
        Self::from_json(raw)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::preset(preset_name())
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }
}
