use thiserror::Error;

use crate::{Axis, FaceName};

/// Error produced by a cube operation.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// Slice index out of range for the cube dimension.
    #[error("invalid move: can't twist slice {index} around axis {axis} of a cube with dimension {dimension}")]
    InvalidMove {
        /// Axis of the twist.
        axis: Axis,
        /// Requested slice index.
        index: usize,
        /// Dimension of the cube.
        dimension: usize,
    },
    /// Cube dimension must be at least 1.
    #[error("invalid dimension {0}; dimension must be at least 1")]
    InvalidDimension(usize),
    /// A block present after a twist was not present before it.
    ///
    /// This indicates a bug in the rotation engine.
    #[error("block at index {index} of face {face} has no position before the last twist")]
    UntrackedBlock {
        /// Face of the untracked block.
        face: FaceName,
        /// Index of the untracked block within its face.
        index: usize,
    },
}
