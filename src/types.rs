//! Shared types used across ICONFORGE.
//! Includes `Dimensions`, the square `IconSize` and the fixed `ICON_SIZES` table
//! every icon container is built from.
use serde::{Deserialize, Serialize};

/// A (width, height) pair, used both as resampling target and canvas size.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn long_side(&self) -> u32 {
        self.width.max(self.height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Side length of one square icon frame.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct IconSize(u32);

impl IconSize {
    pub const S16: IconSize = IconSize(16);
    pub const S32: IconSize = IconSize(32);
    pub const S48: IconSize = IconSize(48);
    pub const S64: IconSize = IconSize(64);
    pub const S128: IconSize = IconSize(128);
    pub const S256: IconSize = IconSize(256);

    /// Returns the icon size for `side` if it is one of [`ICON_SIZES`].
    pub fn from_side(side: u32) -> Option<Self> {
        ICON_SIZES.iter().copied().find(|s| s.0 == side)
    }

    pub fn side(&self) -> u32 {
        self.0
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::square(self.0)
    }

    /// Human readable label, e.g. `16×16`.
    pub fn label(&self) -> String {
        format!("{}×{}", self.0, self.0)
    }
}

impl std::fmt::Display for IconSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Frame sizes written into every icon container, smallest first.
pub const ICON_SIZES: [IconSize; 6] = [
    IconSize::S16,
    IconSize::S32,
    IconSize::S48,
    IconSize::S64,
    IconSize::S128,
    IconSize::S256,
];
