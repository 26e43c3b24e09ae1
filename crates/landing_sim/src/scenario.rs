use crate::error::{Result, SimError};
use rocket_landing::{DEFAULT_SEPARATION_UNITS, LandingChecker, LandingSettings, Point, Rectangle};
use serde::Deserialize;
use std::{collections::HashSet, path::Path};

/// Landing scenario loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub area: Option<RectConfig>,
    pub platform: RectConfig,
    #[serde(default = "default_separation_units")]
    pub separation_units: i32,
    pub rockets: Vec<RocketConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RectConfig {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RocketConfig {
    pub name: String,
    /// Landing points requested in order, as `[x, y]`
    pub targets: Vec<[i32; 2]>,
}

fn default_separation_units() -> i32 {
    DEFAULT_SEPARATION_UNITS
}

impl From<RectConfig> for Rectangle {
    fn from(r: RectConfig) -> Self {
        Rectangle::new(r.x, r.y, r.width, r.height)
    }
}

impl RocketConfig {
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.targets.iter().map(|&[x, y]| Point::new(x, y))
    }
}

impl Default for Scenario {
    /// Two rockets: the second one first hits the footprint of the first,
    /// then moves to a free spot.
    fn default() -> Self {
        Self {
            area: None,
            platform: RectConfig {
                x: 5,
                y: 5,
                width: 10,
                height: 10,
            },
            separation_units: DEFAULT_SEPARATION_UNITS,
            rockets: vec![
                RocketConfig {
                    name: "falcon".to_string(),
                    targets: vec![[6, 6], [5, 5]],
                },
                RocketConfig {
                    name: "electron".to_string(),
                    targets: vec![[6, 6], [5, 6], [12, 13]],
                },
            ],
        }
    }
}

impl Scenario {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SimError::ReadScenario {
            path: path.to_path_buf(),
            source: e,
        })?;

        let scenario: Scenario = toml::from_str(&content).map_err(|e| SimError::ParseScenario {
            path: path.to_path_buf(),
            source: e,
        })?;

        scenario.validate()?;
        Ok(scenario)
    }

    /// Checks the rocket list; geometry is validated by `LandingChecker`.
    pub fn validate(&self) -> Result<()> {
        if self.rockets.is_empty() {
            return Err(SimError::InvalidScenario(
                "at least one rocket is required".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.rockets.len());
        for rocket in &self.rockets {
            let name = rocket.name.trim();
            if name.is_empty() {
                return Err(SimError::InvalidScenario(
                    "rocket name cannot be blank".to_string(),
                ));
            }
            if !seen.insert(name) {
                return Err(SimError::InvalidScenario(format!(
                    "duplicate rocket name: {name}"
                )));
            }
            if rocket.targets.is_empty() {
                return Err(SimError::InvalidScenario(format!(
                    "rocket {name} has no landing targets"
                )));
            }
        }

        Ok(())
    }

    pub fn settings(&self) -> LandingSettings {
        LandingSettings {
            landing_area: self
                .area
                .map(Rectangle::from)
                .unwrap_or_else(Rectangle::default_landing_area),
            landing_platform: self.platform.into(),
            separation_units: self.separation_units,
        }
    }

    /// Builds the checker for this scenario's geometry.
    pub fn build_checker(&self) -> Result<LandingChecker> {
        Ok(LandingChecker::from_settings(&self.settings())?)
    }

    pub fn total_targets(&self) -> usize {
        self.rockets.iter().map(|r| r.targets.len()).sum()
    }
}
