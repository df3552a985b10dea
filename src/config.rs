// config.rs - Application settings loaded from JSON with CLI overrides
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::scene::AUX_LIGHT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "FirstApp".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Movement, look and reporting parameters of the frame controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Units per second
    pub base_speed: f32,
    /// Speed factor while the modifier is held
    pub boost_multiplier: f32,
    /// Degrees per pixel of mouse motion
    pub sensitivity: f32,
    /// Seconds between frame statistics reports
    pub report_interval: f64,
    /// Scene node flipped by the light toggle key
    pub aux_light: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_speed: 10.0,
            boost_multiplier: 10.0,
            sensitivity: 0.1,
            report_interval: 1.0,
            aux_light: AUX_LIGHT.to_string(),
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("base_speed", self.base_speed),
            ("boost_multiplier", self.boost_multiplier),
            ("sensitivity", self.sensitivity),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a non-negative number, got {}", name, value);
            }
        }
        if !self.report_interval.is_finite() || self.report_interval <= 0.0 {
            bail!(
                "report_interval must be a positive number of seconds, got {}",
                self.report_interval
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    #[serde(flatten)]
    pub controller: ControllerConfig,
    pub start_captured: bool,
    pub show_overlay: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            controller: ControllerConfig::default(),
            start_captured: true,
            show_overlay: true,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Invalid config JSON")?;
        config.controller.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Defaults, then the config file if given, then command-line flags
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.controller.validate()?;
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if cli.no_ui {
            self.show_overlay = false;
        }
        if cli.no_capture {
            self.start_captured = false;
        }
        if let Some(speed) = cli.speed {
            self.controller.base_speed = speed;
        }
        if let Some(sensitivity) = cli.sensitivity {
            self.controller.sensitivity = sensitivity;
        }
    }
}
