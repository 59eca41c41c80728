// init_config.rs
// Handles loading and parsing the startup configuration from visualizer.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use ultraviolet::DVec2;

use crate::charge::ChargeSet;
use crate::config;
use crate::expr::{self, ExprError};
use crate::renderer::canvas::PlayArea;
use crate::renderer::{FieldMode, RenderConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("charge {index} ({name}): {source}")]
    Charge {
        index: usize,
        name: String,
        #[source]
        source: ExprError,
    },

    #[error("play area must be positive and finite, got {width}x{height}")]
    PlayArea { width: f64, height: f64 },
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VisualizerConfig {
    pub play_area: Option<PlayAreaConfig>,
    pub render: Option<RenderSection>,
    #[serde(default)]
    pub charges: Vec<ChargeConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PlayAreaConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RenderSection {
    /// Optional lattice stride in pixels. Falls back to the default when omitted.
    pub lattice_stride: Option<u32>,
    /// Optional lattice margin in pixels.
    pub lattice_offset: Option<u32>,
    /// Optional cap on segments per traced field line.
    pub max_trace_steps: Option<usize>,
    /// `"discrete"` or `"continuous"`.
    pub mode: Option<ModeConfig>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModeConfig {
    Discrete,
    Continuous,
}

impl From<ModeConfig> for FieldMode {
    fn from(mode: ModeConfig) -> Self {
        match mode {
            ModeConfig::Discrete => FieldMode::Discrete,
            ModeConfig::Continuous => FieldMode::Continuous,
        }
    }
}

/// Magnitude given either as a plain number or as an arithmetic expression.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MagnitudeConfig {
    Number(f64),
    Expression(String),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChargeConfig {
    pub name: Option<String>,
    pub magnitude: MagnitudeConfig,
    pub x: f64,
    pub y: f64,
}

impl ChargeConfig {
    pub fn magnitude(&self) -> Result<f64, ExprError> {
        match &self.magnitude {
            MagnitudeConfig::Number(q) if q.is_finite() => Ok(*q),
            MagnitudeConfig::Number(_) => Err(ExprError::NotFinite),
            MagnitudeConfig::Expression(text) => expr::parse_magnitude(text),
        }
    }

    pub fn position(&self) -> Result<DVec2, ExprError> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(DVec2::new(self.x, self.y))
        } else {
            Err(ExprError::NotFinite)
        }
    }
}

fn positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl VisualizerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `visualizer.toml`, or fall back to built-in defaults when it does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        if !Path::new(config::DEFAULT_CONFIG_FILE).exists() {
            println!(
                "No {} found, using built-in defaults",
                config::DEFAULT_CONFIG_FILE
            );
            return Ok(Self::default());
        }
        Self::load_from_file(config::DEFAULT_CONFIG_FILE)
    }

    pub fn play_area(&self) -> Result<PlayArea, ConfigError> {
        match &self.play_area {
            None => Ok(PlayArea::default()),
            Some(area) if positive_finite(area.width) && positive_finite(area.height) => {
                Ok(PlayArea::new(area.width, area.height))
            }
            Some(area) => Err(ConfigError::PlayArea {
                width: area.width,
                height: area.height,
            }),
        }
    }

    pub fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        let defaults = RenderConfig::default();
        let section = self.render.as_ref();
        Ok(RenderConfig {
            play_area: self.play_area()?,
            lattice_stride: section
                .and_then(|r| r.lattice_stride)
                .unwrap_or(defaults.lattice_stride),
            lattice_offset: section
                .and_then(|r| r.lattice_offset)
                .unwrap_or(defaults.lattice_offset),
            max_trace_steps: section
                .and_then(|r| r.max_trace_steps)
                .unwrap_or(defaults.max_trace_steps),
        })
    }

    pub fn mode(&self) -> FieldMode {
        self.render
            .as_ref()
            .and_then(|r| r.mode)
            .map(FieldMode::from)
            .unwrap_or_default()
    }

    /// Build the initial charge set. Unnamed charges get the quick-add naming scheme.
    pub fn charge_set(&self) -> Result<ChargeSet, ConfigError> {
        let mut set = ChargeSet::new();
        for (index, charge) in self.charges.iter().enumerate() {
            let name = charge.name.clone().unwrap_or_else(|| set.default_name());
            let parsed = charge.magnitude().and_then(|q| Ok((q, charge.position()?)));
            let (magnitude, pos) = parsed.map_err(|source| ConfigError::Charge {
                index,
                name: name.clone(),
                source,
            })?;
            set.push(magnitude, pos, name);
        }
        Ok(set)
    }
}
