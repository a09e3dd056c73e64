//! Module configuration
//!
//! The config file is a JSON array of module descriptors. Each descriptor
//! carries a `type` tag plus the keys its module consumes. The tag set is
//! closed: an unknown type fails deserialization, and therefore startup.
//! A half-configured bar is worse than no bar.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal configuration errors reported at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One module descriptor from the config file.
///
/// Every variant maps to exactly one module kind; the registry match over
/// this enum is exhaustive by construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModuleDescriptor {
    Clock {
        name: String,
    },
    Battery {
        name: String,
        /// Power-supply sysfs directory, e.g. `/sys/class/power_supply/BAT0`.
        path: PathBuf,
    },
    Cpu {
        name: String,
        #[serde(default = "default_bar_width")]
        width: usize,
    },
    FreeDiskSpace {
        name: String,
        /// Mount point (or any path below it) of the watched filesystem.
        path: PathBuf,
    },
    Memory {
        name: String,
        #[serde(default = "default_bar_width")]
        width: usize,
    },
    Network {
        name: String,
        iface: String,
        /// Minimum seconds between two ESSID probes; the probe shells out.
        #[serde(default = "default_network_cache_seconds")]
        cache_seconds: u64,
    },
    NetworkTraffic {
        name: String,
        iface: String,
        when_up: String,
        when_down: String,
        /// Bandwidth ceiling in packets per tick; scales the traffic bar.
        max_bw: u64,
        when_down_color: Option<String>,
        #[serde(default = "default_bar_width")]
        width: usize,
    },
    Swap {
        name: String,
    },
    Temperature {
        name: String,
        /// Thermal-zone temperature file, e.g.
        /// `/sys/class/thermal/thermal_zone0/temp`.
        path: PathBuf,
    },
    PlayerControl {
        name: String,
        #[serde(default = "default_volume_step")]
        step_percent: u32,
    },
    Pomodoro {
        name: String,
        #[serde(default = "default_pomodoro_minutes")]
        minutes: u64,
        #[serde(default = "default_bar_width")]
        segments: usize,
        end_sound_fname: String,
        start_sound_fname: Option<String>,
        start_msg: Option<String>,
        end_msg: Option<String>,
    },
    RedShift {
        name: String,
        #[serde(default = "default_red_shift_step")]
        step: f64,
    },
}

fn default_bar_width() -> usize {
    10
}

fn default_network_cache_seconds() -> u64 {
    30
}

fn default_volume_step() -> u32 {
    5
}

fn default_pomodoro_minutes() -> u64 {
    25
}

fn default_red_shift_step() -> f64 {
    0.1
}

impl ModuleDescriptor {
    /// The configured block name, shared by every variant.
    pub fn name(&self) -> &str {
        match self {
            ModuleDescriptor::Clock { name }
            | ModuleDescriptor::Battery { name, .. }
            | ModuleDescriptor::Cpu { name, .. }
            | ModuleDescriptor::FreeDiskSpace { name, .. }
            | ModuleDescriptor::Memory { name, .. }
            | ModuleDescriptor::Network { name, .. }
            | ModuleDescriptor::NetworkTraffic { name, .. }
            | ModuleDescriptor::Swap { name }
            | ModuleDescriptor::Temperature { name, .. }
            | ModuleDescriptor::PlayerControl { name, .. }
            | ModuleDescriptor::Pomodoro { name, .. }
            | ModuleDescriptor::RedShift { name, .. } => name,
        }
    }
}

/// Parse a config document (a JSON array of descriptors).
pub fn parse(content: &str) -> Result<Vec<ModuleDescriptor>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load the module descriptors from a config file.
pub fn load(path: &Path) -> Result<Vec<ModuleDescriptor>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
