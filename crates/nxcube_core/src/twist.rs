use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Axis around which a slice of the cube turns.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Axis {
    /// Left-right axis. Slices are columns of the front face, counted from
    /// the left.
    X,
    /// Up-down axis. Slices are rows of the front face, counted from the top.
    Y,
    /// Front-back axis. Slices are layers counted from the front.
    Z,
}

/// Quarter turn of one slice of the cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Axis of the slice.
    pub axis: Axis,
    /// Index of the slice along the axis, starting from 0.
    pub index: usize,
    /// Direction of the turn.
    pub clockwise: bool,
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            axis,
            index,
            clockwise,
        } = self;
        write!(f, "{axis}{index}")?;
        if !clockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl Twist {
    /// Constructs a new twist.
    pub const fn new(axis: Axis, index: usize, clockwise: bool) -> Self {
        Self {
            axis,
            index,
            clockwise,
        }
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twist_display() {
        assert_eq!(Twist::new(Axis::X, 0, true).to_string(), "x0");
        assert_eq!(Twist::new(Axis::Z, 12, false).to_string(), "z12'");
        assert_eq!("Y".parse::<Axis>(), Ok(Axis::Y));
    }

    #[test]
    fn test_twist_inverse() {
        let twist = Twist::new(Axis::Y, 1, true);
        assert_eq!(twist.inverse(), Twist::new(Axis::Y, 1, false));
        assert_eq!(twist.inverse().inverse(), twist);
    }
}
