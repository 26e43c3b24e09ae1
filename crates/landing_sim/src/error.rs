use rocket_landing::LandingError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Failed to read scenario file {path}")]
    ReadScenario {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse scenario file {path}")]
    ParseScenario {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Rocket thread panicked: {0}")]
    RocketPanicked(String),

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Landing(#[from] LandingError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
