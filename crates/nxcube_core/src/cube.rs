use std::fmt;

use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Axis, CubeError, Face, FaceName, PerFace, Slice, Twist};

/// Direction in which the border face spins when an outer slice turns.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BorderSpin {
    /// Border face spins in the same direction as the slice, so every twist
    /// is undone by its inverse.
    #[default]
    MatchSlice,
    /// Border face always spins clockwise, regardless of the direction of the
    /// slice. An anticlockwise twist of an outer slice is then **not** undone
    /// by the matching clockwise twist.
    AlwaysClockwise,
}

/// Slices that move together in a twist, in clockwise cycle order.
type SliceCycle = [(FaceName, Slice); 4];

/// N×N×N cube made of six faces.
///
/// Every twist permutes blocks; no block is ever created, destroyed, or
/// duplicated.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeModel {
    dimension: usize,
    border_spin: BorderSpin,
    faces: PerFace<Face>,
}

impl fmt::Display for CubeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cube :")?;
        let faces = self.faces.iter().map(|(name, face)| {
            let rows = face
                .to_string()
                .lines()
                .map(|row| format!("\t\t{row}"))
                .join("\n");
            format!("\t{name} = {{\n{rows}\n\t}}")
        });
        write!(f, "{}", faces.format(",\n"))
    }
}

impl CubeModel {
    /// Constructs a solved cube.
    pub fn new(dimension: usize) -> Result<Self, CubeError> {
        Self::with_border_spin(dimension, BorderSpin::default())
    }

    /// Constructs a solved cube with a specific border spin behavior.
    pub fn with_border_spin(dimension: usize, border_spin: BorderSpin) -> Result<Self, CubeError> {
        if dimension == 0 {
            return Err(CubeError::InvalidDimension(dimension));
        }
        Ok(Self {
            dimension,
            border_spin,
            faces: PerFace::from_fn(|face| Face::new(dimension, face.initial_color())),
        })
    }

    /// Returns the number of blocks along each edge of the cube.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
    /// Returns how border faces spin when an outer slice turns.
    pub fn border_spin(&self) -> BorderSpin {
        self.border_spin
    }
    /// Returns all six faces.
    pub fn faces(&self) -> &PerFace<Face> {
        &self.faces
    }
    /// Returns a single face.
    pub fn face(&self, face: FaceName) -> &Face {
        &self.faces[face]
    }

    /// Returns whether every face shows only its solved color.
    pub fn is_solved(&self) -> bool {
        self.faces.values().all(Face::all_blocks_initial)
    }

    /// Turns column `column_index` of the front face around the X axis.
    ///
    /// Clockwise moves the column from up to front to down to back.
    pub fn rotate_x(&mut self, column_index: usize, clockwise: bool) -> Result<(), CubeError> {
        self.twist(Twist::new(Axis::X, column_index, clockwise))
    }
    /// Turns row `row_index` of the front face around the Y axis.
    ///
    /// Clockwise moves the row from left to front to right to back.
    pub fn rotate_y(&mut self, row_index: usize, clockwise: bool) -> Result<(), CubeError> {
        self.twist(Twist::new(Axis::Y, row_index, clockwise))
    }
    /// Turns layer `layer_index` (counted from the front) around the Z axis.
    ///
    /// Clockwise moves the layer from up to right to down to left.
    pub fn rotate_z(&mut self, layer_index: usize, clockwise: bool) -> Result<(), CubeError> {
        self.twist(Twist::new(Axis::Z, layer_index, clockwise))
    }

    /// Applies a twist.
    ///
    /// Returns an error without modifying the cube if the slice index is out
    /// of range.
    pub fn twist(&mut self, twist: Twist) -> Result<(), CubeError> {
        self.check_is_correct_move(twist)?;
        log::trace!("applying twist {twist}");

        let cycle = self.slice_cycle(twist);
        self.cycle_slices(cycle, twist.clockwise);

        let [first_border, last_border] = Self::border_faces(twist.axis);
        if twist.index == 0 {
            self.spin_border(first_border, twist.clockwise);
        }
        if twist.index == self.max_index() {
            self.spin_border(last_border, twist.clockwise);
        }
        Ok(())
    }

    /// Applies a sequence of twists, stopping at the first invalid one.
    ///
    /// Twists before the invalid one remain applied.
    pub fn twist_all(&mut self, twists: impl IntoIterator<Item = Twist>) -> Result<(), CubeError> {
        twists.into_iter().try_for_each(|twist| self.twist(twist))
    }

    /// Applies `length` uniformly random twists and returns them.
    pub fn randomize(&mut self, rng: &mut impl Rng, length: u32) -> Vec<Twist> {
        let twists = (0..length)
            .map(|_| crate::scramble::random_twist(self.dimension, rng))
            .collect_vec();
        for &twist in &twists {
            if let Err(e) = self.twist(twist) {
                log::error!("random twist {twist} failed: {e}");
            }
        }
        twists
    }

    fn max_index(&self) -> usize {
        self.dimension - 1
    }

    fn check_is_correct_move(&self, twist: Twist) -> Result<(), CubeError> {
        if twist.index >= self.dimension {
            return Err(CubeError::InvalidMove {
                axis: twist.axis,
                index: twist.index,
                dimension: self.dimension,
            });
        }
        Ok(())
    }

    /// Returns the four slices that a twist moves, in clockwise order.
    fn slice_cycle(&self, twist: Twist) -> SliceCycle {
        use FaceName::*;

        let i = twist.index;
        // The back face is seen from behind and the Z slices run across the
        // up and left faces from the far side, so those use mirrored indices.
        let mirrored = self.max_index() - i;
        match twist.axis {
            Axis::X => [
                (Up, Slice::Column(i)),
                (Front, Slice::Column(i)),
                (Down, Slice::Column(i)),
                (Back, Slice::Column(mirrored)),
            ],
            Axis::Y => [
                (Left, Slice::Row(i)),
                (Front, Slice::Row(i)),
                (Right, Slice::Row(i)),
                (Back, Slice::Row(i)),
            ],
            Axis::Z => [
                (Up, Slice::Row(mirrored)),
                (Right, Slice::Column(i)),
                (Down, Slice::Row(i)),
                (Left, Slice::Column(mirrored)),
            ],
        }
    }

    /// Returns the faces perpendicular to `axis` that spin with the first and
    /// last slice.
    fn border_faces(axis: Axis) -> [FaceName; 2] {
        match axis {
            Axis::X => [FaceName::Left, FaceName::Right],
            Axis::Y => [FaceName::Up, FaceName::Down],
            Axis::Z => [FaceName::Front, FaceName::Back],
        }
    }

    /// Moves each slice in `cycle` to the position of the next one (or the
    /// previous one, if anticlockwise).
    fn cycle_slices(&mut self, cycle: SliceCycle, clockwise: bool) {
        // Read everything before writing anything.
        let snapshot = cycle.map(|(face, slice)| self.faces[face].slice(slice));
        let len = cycle.len();
        for i in 0..len {
            let next = (i + 1) % len;
            let (src, dst) = if clockwise { (i, next) } else { (next, i) };
            let (face, slice) = cycle[dst];
            self.faces[face].update_slice(slice, &snapshot[src]);
        }
    }

    fn spin_border(&mut self, face: FaceName, clockwise: bool) {
        let face = &mut self.faces[face];
        match self.border_spin {
            BorderSpin::MatchSlice if !clockwise => face.rotate_anticlockwise(),
            BorderSpin::MatchSlice | BorderSpin::AlwaysClockwise => face.rotate_clockwise(),
        }
    }
}
