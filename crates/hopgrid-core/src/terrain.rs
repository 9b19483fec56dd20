//! Terrain types and their movement costs.

/// Cost of entering any passable cell.
pub const BASE_COST: i32 = 1;

/// Extra cost of hopping over a short wall.
pub const SHORT_WALL_PENALTY: i32 = 10;

/// What occupies a grid cell.
///
/// Text and numeric codes: `0` open, `1` blocked, `2` short wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Free floor.
    #[default]
    Open,
    /// Impassable wall.
    Blocked,
    /// A low wall that can be crossed at a penalty.
    ShortWall,
}

impl Terrain {
    /// Every terrain kind, in code order.
    pub const ALL: [Terrain; 3] = [Terrain::Open, Terrain::Blocked, Terrain::ShortWall];

    /// Decode a numeric terrain code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Open),
            1 => Some(Self::Blocked),
            2 => Some(Self::ShortWall),
            _ => None,
        }
    }

    /// Decode a single-digit terrain character (`'0'`, `'1'`, `'2'`).
    pub fn from_char(ch: char) -> Option<Self> {
        let digit = ch.to_digit(10)?;
        Self::from_code(u8::try_from(digit).ok()?)
    }

    /// Numeric terrain code.
    pub const fn code(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Blocked => 1,
            Self::ShortWall => 2,
        }
    }

    /// Digit used for this terrain in text grids.
    pub const fn as_char(self) -> char {
        match self {
            Self::Open => '0',
            Self::Blocked => '1',
            Self::ShortWall => '2',
        }
    }

    /// Whether a walker may enter this cell at all.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Blocked)
    }

    /// Cost of stepping into this cell, or `None` if it is blocked.
    #[inline]
    pub const fn step_cost(self) -> Option<i32> {
        match self {
            Self::Open => Some(BASE_COST),
            Self::ShortWall => Some(BASE_COST + SHORT_WALL_PENALTY),
            Self::Blocked => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for t in Terrain::ALL {
            assert_eq!(Terrain::from_code(t.code()), Some(t));
            assert_eq!(Terrain::from_char(t.as_char()), Some(t));
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        assert_eq!(Terrain::from_code(3), None);
        assert_eq!(Terrain::from_char('3'), None);
        assert_eq!(Terrain::from_char('#'), None);
        assert_eq!(Terrain::from_char(' '), None);
    }

    #[test]
    fn step_costs() {
        assert_eq!(Terrain::Open.step_cost(), Some(1));
        assert_eq!(Terrain::ShortWall.step_cost(), Some(11));
        assert_eq!(Terrain::Blocked.step_cost(), None);
    }

    #[test]
    fn passability() {
        assert!(Terrain::Open.is_passable());
        assert!(Terrain::ShortWall.is_passable());
        assert!(!Terrain::Blocked.is_passable());
    }
}
