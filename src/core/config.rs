/// Effect tuning parameters and visual constants.

use serde::{Deserialize, Serialize};

// --- Visual colors (hex) ---
pub const LINK_HIGHLIGHT: u32 = 0x33EE66;
pub const DEFAULT_NODE_COLOR: u32 = 0x4A90D9;
pub const DEFAULT_EDGE_COLOR: u32 = 0x8E8EA0;

// --- Defaults ---
pub const UPDATE_INTERVAL_MS: u64 = 25;
pub const DEFAULT_NODE_SIZE: f64 = 1.0;
pub const DEFAULT_EDGE_WIDTH: f64 = 1.0;

/// Full parameter bundle for one scheduler. Immutable once the scheduler
/// is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Milliseconds between scheduler ticks.
    pub update_interval_ms: u64,
    pub glow: GlowConfig,
    pub vibrate: VibrateConfig,
    pub show_link: ShowLinkConfig,
    pub color: SmoothColorConfig,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: UPDATE_INTERVAL_MS,
            glow: GlowConfig::default(),
            vibrate: VibrateConfig::default(),
            show_link: ShowLinkConfig::default(),
            color: SmoothColorConfig::default(),
        }
    }
}

/// Pulsing size effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    /// Degrees the pulse phase advances per tick; one cycle spans 180.
    pub speed: f64,
    /// Peak size as a multiple of the base size.
    pub grow_factor: f64,
    /// Number of pulse cycles before the effect retires.
    pub repeat: u32,
    /// Base size the node is restored to.
    pub size: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            grow_factor: 2.0,
            repeat: 2,
            size: 10.0,
        }
    }
}

/// Horizontal jitter effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct VibrateConfig {
    /// Ticks between direction flips; position holds in between.
    pub slow_by: u32,
    /// Displacement per size unit, signed magnitude.
    pub intensity: f64,
    /// Jitter cycles before the node settles; runtime is `slow_by * repeat` ticks.
    pub repeat: u32,
}

impl Default for VibrateConfig {
    fn default() -> Self {
        Self {
            slow_by: 2,
            intensity: 0.01,
            repeat: 15,
        }
    }
}

/// Edge reveal effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowLinkConfig {
    /// Total fade time in milliseconds.
    pub duration_ms: f64,
    pub start_width: f64,
    pub end_width: f64,
}

impl Default for ShowLinkConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2500.0,
            start_width: 30.0,
            end_width: 1.0,
        }
    }
}

/// Cyclic hue ramp effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothColorConfig {
    /// Hue advance per update, on a 0-100 scale.
    pub step: f64,
    /// Ticks between hue updates.
    pub speed: u32,
}

impl Default for SmoothColorConfig {
    fn default() -> Self {
        Self {
            step: 3.0,
            speed: 1,
        }
    }
}
