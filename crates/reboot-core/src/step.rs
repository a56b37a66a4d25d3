//! Toggle steps: the input records of a reboot sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cuboid::Cuboid;

/// Whether a step switches its cuboid on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    On,
    Off,
}

impl Polarity {
    /// Returns true for [`Polarity::On`]
    #[inline]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Keyword used in step files
    #[inline]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single reboot instruction: set every cell of `cuboid` to `polarity`.
///
/// Steps only mean something in sequence; a later step overrides every
/// earlier one it overlaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToggleStep {
    /// On or off
    pub polarity: Polarity,
    /// Cells affected by this step
    pub cuboid: Cuboid,
}

impl ToggleStep {
    #[inline]
    pub const fn new(polarity: Polarity, cuboid: Cuboid) -> Self {
        Self { polarity, cuboid }
    }

    /// Step switching `cuboid` on
    #[inline]
    pub const fn on(cuboid: Cuboid) -> Self {
        Self::new(Polarity::On, cuboid)
    }

    /// Step switching `cuboid` off
    #[inline]
    pub const fn off(cuboid: Cuboid) -> Self {
        Self::new(Polarity::Off, cuboid)
    }
}

impl fmt::Display for ToggleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.polarity, self.cuboid)
    }
}
