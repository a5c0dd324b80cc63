use serde::{Deserialize, Serialize};

/// Integer visibility tier. Lower values are more privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessLevel(i32);

impl AccessLevel {
    /// Officers.
    pub const INTERNAL: Self = Self(0);
    /// Candidates working towards membership.
    pub const CANDIDATE: Self = Self(1);
    /// Everyone else, including anonymous viewers.
    pub const EXTERNAL: Self = Self(2);

    #[must_use]
    pub const fn new(level: i32) -> Self {
        Self(level)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// ## Summary
    /// Whether a viewer at this level may see content restricted to `tier`.
    ///
    /// A viewer is excluded only when their level is numerically greater than
    /// the tier's level.
    #[must_use]
    pub const fn can_view(self, tier: Self) -> bool {
        self.0 <= tier.0
    }
}

impl From<i32> for AccessLevel {
    fn from(level: i32) -> Self {
        Self(level)
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named access tier, one entry of the fixed tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessTier {
    pub level: AccessLevel,
    pub name: &'static str,
}

impl AccessTier {
    #[must_use]
    pub const fn new(level: AccessLevel, name: &'static str) -> Self {
        Self { level, name }
    }
}
