//! Closed set of body kinds
//!
//! The ordinal is meaningful: when two suns merge the result takes the type
//! with the larger ordinal (STAR < WHITE_DWARF_STAR < GIANT_STAR < SUPER_GIANT_STAR).

use std::fmt;

use crate::error::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum BodyType {
    Planet = 0,
    Star = 1,
    WhiteDwarfStar = 2,
    GiantStar = 3,
    SuperGiantStar = 4,
}

impl BodyType {
    /// Lookup table from ordinal to variant
    pub const ALL: [BodyType; 5] = [
        BodyType::Planet,
        BodyType::Star,
        BodyType::WhiteDwarfStar,
        BodyType::GiantStar,
        BodyType::SuperGiantStar,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            BodyType::Planet => "Planet",
            BodyType::Star => "Star",
            BodyType::WhiteDwarfStar => "White Dwarf",
            BodyType::GiantStar => "Giant Star",
            BodyType::SuperGiantStar => "Super Giant",
        }
    }

    pub fn is_planet(self) -> bool {
        self == BodyType::Planet
    }

    /// Any non-planet type
    pub fn is_sun(self) -> bool {
        !self.is_planet()
    }

    /// Type of the sun produced by merging `self` with `other`
    pub fn dominant(self, other: BodyType) -> BodyType {
        self.max(other)
    }
}

impl TryFrom<u8> for BodyType {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        BodyType::ALL
            .get(value as usize)
            .copied()
            .ok_or(SimError::UnknownBodyType(value))
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
