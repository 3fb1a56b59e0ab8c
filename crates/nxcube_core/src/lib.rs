//! Rotation engine for N×N×N cube puzzles.
//!
//! [`CubeModel`] owns six [`Face`] grids and permutes them under slice
//! twists. [`HistoricalCube`] wraps it and records, after every twist, where
//! each block was before the twist so that an animation layer can
//! interpolate it.

mod cube;
mod error;
mod face;
mod history;
mod per_face;
mod scramble;
mod twist;

#[cfg(test)]
mod tests;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::cube::{BorderSpin, CubeModel};
    pub use crate::error::CubeError;
    pub use crate::face::{Block, ColorKey, Face, Slice};
    pub use crate::history::{BlockPosition, HistoricBlock, HistoricalCube};
    pub use crate::per_face::{FaceName, PerFace};
    pub use crate::scramble::{ScrambleParams, ScrambleType, ScrambledCube};
    pub use crate::twist::{Axis, Twist};
}

/// Default cube dimension.
pub const DEFAULT_DIMENSION: usize = 3;

/// Default length for a full scramble.
///
/// **Changing this will break scramble compatibility.**
pub const FULL_SCRAMBLE_LENGTH: u32 = 100;
