/*
 * Simulation Parameters Module
 *
 * This module defines the live configuration edited through the control
 * panel: which steering behaviors are enabled, their detection radii, and
 * what a click on the canvas places.
 *
 * The panel mutates `SimulationParams` between frames. The physics only ever
 * sees a `Features` snapshot taken once per frame, so a setting can never
 * change halfway through a compute phase.
 */

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Behavior switches and radii read by the steering rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Features {
    pub alignment: bool,
    pub alignment_radius: u32,
    pub cohesion: bool,
    pub cohesion_radius: u32,
    pub repel: bool,
    pub repel_radius: u32,
    pub noise: bool,
    pub wall_detection_range: u32,
    pub evade_wall: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            alignment: true,
            alignment_radius: 40,
            cohesion: true,
            cohesion_radius: 400,
            repel: true,
            repel_radius: 30,
            noise: true,
            wall_detection_range: 50,
            evade_wall: true,
        }
    }
}

impl Features {
    // Every behavior off; a starting point for building focused setups
    pub fn none() -> Self {
        Self {
            alignment: false,
            cohesion: false,
            repel: false,
            noise: false,
            evade_wall: false,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// What a click on the canvas creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    #[default]
    Boid,
    Wall,
}

impl PlacementMode {
    pub const ALL: [PlacementMode; 2] = [PlacementMode::Boid, PlacementMode::Wall];

    pub fn label(self) -> &'static str {
        match self {
            PlacementMode::Boid => "boid",
            PlacementMode::Wall => "wall",
        }
    }
}

// Everything the control panel edits
pub struct SimulationParams {
    pub features: Features,
    pub placement: PlacementMode,
    pub show_debug: bool,

    // Internal state for tracking changes
    previous_features: Option<Features>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::new(Features::default(), PlacementMode::default())
    }
}

impl SimulationParams {
    pub fn new(features: Features, placement: PlacementMode) -> Self {
        Self {
            features,
            placement,
            show_debug: false,
            previous_features: None,
        }
    }

    // The immutable per-frame view handed to the physics
    pub fn snapshot(&self) -> Features {
        self.features
    }

    // Remember the current features so the next `detect_changes` can compare
    pub fn take_snapshot(&mut self) {
        self.previous_features = Some(self.features);
    }

    // True when the features differ from the last snapshot
    pub fn detect_changes(&self) -> bool {
        match &self.previous_features {
            Some(previous) => *previous != self.features,
            None => false,
        }
    }

    // Parameter ranges for the UI sliders
    pub fn get_radius_range() -> RangeInclusive<u32> {
        0..=1000
    }

    pub fn get_wall_range_range() -> RangeInclusive<u32> {
        0..=500
    }
}
