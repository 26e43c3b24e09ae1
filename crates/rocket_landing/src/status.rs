use std::fmt;

/// Outcome of a single landing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandingStatus {
    OkForLanding,
    Clash,
    OutOfPlatform,
}

impl LandingStatus {
    pub const ALL: [LandingStatus; 3] = [
        LandingStatus::OkForLanding,
        LandingStatus::Clash,
        LandingStatus::OutOfPlatform,
    ];

    /// Human-readable text reported back to the rocket
    pub const fn description(self) -> &'static str {
        match self {
            LandingStatus::OkForLanding => "ok for landing",
            LandingStatus::Clash => "clash",
            LandingStatus::OutOfPlatform => "out of platform",
        }
    }

    #[inline]
    pub fn is_ok(self) -> bool {
        matches!(self, LandingStatus::OkForLanding)
    }
}

impl fmt::Display for LandingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
