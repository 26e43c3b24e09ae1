use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LandingError>;

/// Constructor argument rejected during validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentField {
    LandingArea,
    LandingPlatform,
    SeparationUnits,
}

impl ArgumentField {
    pub fn as_str(self) -> &'static str {
        match self {
            ArgumentField::LandingArea => "landing_area",
            ArgumentField::LandingPlatform => "landing_platform",
            ArgumentField::SeparationUnits => "separation_units",
        }
    }
}

impl fmt::Display for ArgumentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LandingError {
    #[error("Invalid argument `{field}`: {message}")]
    InvalidArgument {
        field: ArgumentField,
        message: &'static str,
    },
}

impl LandingError {
    pub(crate) fn invalid(field: ArgumentField, message: &'static str) -> Self {
        LandingError::InvalidArgument { field, message }
    }

    pub fn field(&self) -> ArgumentField {
        match self {
            LandingError::InvalidArgument { field, .. } => *field,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            LandingError::InvalidArgument { message, .. } => message,
        }
    }
}
