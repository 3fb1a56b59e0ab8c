use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Block, BorderSpin, ColorKey, CubeError, CubeModel, Face, FaceName, PerFace, Twist,
};

/// Location of a block on the cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlockPosition {
    /// Face that the block is on.
    pub face: FaceName,
    /// Row-major index of the block within the face.
    pub index: usize,
}

/// Block on the cube after the last twist, along with where it was before
/// the twist.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HistoricBlock {
    /// Sticker color.
    pub value: ColorKey,
    /// Position before the last twist, or `None` if the block could not be
    /// found (which indicates a bug).
    pub old_position: Option<BlockPosition>,
}

/// Cube that remembers where each block was before the last twist.
///
/// Rendering code can read [`HistoricalCube::faces()`] to draw the cube at
/// rest and [`HistoricalCube::historic_faces()`] to animate the twist that
/// just happened.
#[derive(Debug, Clone)]
pub struct HistoricalCube {
    cube: CubeModel,
    historic_faces: PerFace<Vec<HistoricBlock>>,
}

impl HistoricalCube {
    /// Constructs a solved cube. Every block starts out recorded at its
    /// current position.
    pub fn new(dimension: usize) -> Result<Self, CubeError> {
        Self::with_border_spin(dimension, BorderSpin::default())
    }

    /// Constructs a solved cube with a specific border spin behavior.
    pub fn with_border_spin(dimension: usize, border_spin: BorderSpin) -> Result<Self, CubeError> {
        let cube = CubeModel::with_border_spin(dimension, border_spin)?;
        let snapshot = cube.faces().clone();
        let (historic_faces, untracked) = compute_history(&snapshot, cube.faces());
        debug_assert!(untracked.is_none(), "solved cube has untracked block");
        Ok(Self {
            cube,
            historic_faces,
        })
    }

    /// Returns the underlying cube.
    pub fn cube(&self) -> &CubeModel {
        &self.cube
    }
    /// Returns the number of blocks along each edge of the cube.
    pub fn dimension(&self) -> usize {
        self.cube.dimension()
    }
    /// Returns the current state of all six faces.
    pub fn faces(&self) -> &PerFace<Face> {
        self.cube.faces()
    }
    /// Returns whether the cube is solved.
    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// Returns, for each block on each face, its color and where it was
    /// before the last twist.
    ///
    /// Each list is parallel to [`Face::blocks()`] of the same face.
    pub fn historic_faces(&self) -> &PerFace<Vec<HistoricBlock>> {
        &self.historic_faces
    }

    /// Returns the blocks that moved during the last twist, as pairs of
    /// `(current_position, old_position)`.
    pub fn moved_blocks(&self) -> impl Iterator<Item = (BlockPosition, BlockPosition)> {
        self.historic_faces.iter().flat_map(|(face, blocks)| {
            blocks.iter().enumerate().filter_map(move |(index, block)| {
                let new_position = BlockPosition { face, index };
                let old_position = block.old_position?;
                (old_position != new_position).then_some((new_position, old_position))
            })
        })
    }

    /// Turns a column around the X axis. See [`CubeModel::rotate_x()`].
    pub fn rotate_x(&mut self, column_index: usize, clockwise: bool) -> Result<(), CubeError> {
        self.track(|cube| cube.rotate_x(column_index, clockwise))
    }
    /// Turns a row around the Y axis. See [`CubeModel::rotate_y()`].
    pub fn rotate_y(&mut self, row_index: usize, clockwise: bool) -> Result<(), CubeError> {
        self.track(|cube| cube.rotate_y(row_index, clockwise))
    }
    /// Turns a layer around the Z axis. See [`CubeModel::rotate_z()`].
    pub fn rotate_z(&mut self, layer_index: usize, clockwise: bool) -> Result<(), CubeError> {
        self.track(|cube| cube.rotate_z(layer_index, clockwise))
    }
    /// Applies a twist and records where each block came from.
    pub fn twist(&mut self, twist: Twist) -> Result<(), CubeError> {
        self.track(|cube| cube.twist(twist))
    }
    /// Applies a sequence of twists, stopping at the first error.
    ///
    /// The history afterwards describes only the last twist applied.
    pub fn twist_all(&mut self, twists: impl IntoIterator<Item = Twist>) -> Result<(), CubeError> {
        twists.into_iter().try_for_each(|twist| self.twist(twist))
    }

    /// Snapshots the faces, mutates the cube, and diffs the snapshot against
    /// the new state.
    ///
    /// If the mutation fails, the cube and history are left unchanged.
    fn track(
        &mut self,
        mutate: impl FnOnce(&mut CubeModel) -> Result<(), CubeError>,
    ) -> Result<(), CubeError> {
        let old_faces = self.cube.faces().clone();
        mutate(&mut self.cube)?;

        let (historic_faces, untracked) = compute_history(&old_faces, self.cube.faces());
        self.historic_faces = historic_faces;
        match untracked {
            Some(position) => {
                log::error!(
                    "block at index {} of face {} was not found before the last twist",
                    position.index,
                    position.face,
                );
                Err(CubeError::UntrackedBlock {
                    face: position.face,
                    index: position.index,
                })
            }
            None => Ok(()),
        }
    }
}

/// Matches every block in `new_faces` with the block in `old_faces` that has
/// the same ID and value.
///
/// Also returns the position of the first block with no match, if any.
fn compute_history(
    old_faces: &PerFace<Face>,
    new_faces: &PerFace<Face>,
) -> (PerFace<Vec<HistoricBlock>>, Option<BlockPosition>) {
    let old_positions: HashMap<Block, BlockPosition> = old_faces
        .iter()
        .flat_map(|(face, face_blocks)| {
            face_blocks
                .blocks()
                .iter()
                .enumerate()
                .map(move |(index, &block)| (block, BlockPosition { face, index }))
        })
        .collect();

    let mut first_untracked = None;
    let historic_faces = new_faces.map_ref(|face, face_blocks| {
        face_blocks
            .blocks()
            .iter()
            .enumerate()
            .map(|(index, block)| {
                let old_position = old_positions.get(block).copied();
                if old_position.is_none() && first_untracked.is_none() {
                    first_untracked = Some(BlockPosition { face, index });
                }
                HistoricBlock {
                    value: block.value,
                    old_position,
                }
            })
            .collect()
    });

    (historic_faces, first_untracked)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Slice;

    #[test]
    fn test_initial_history_is_identity() {
        let cube = HistoricalCube::new(3).unwrap();
        for (face, blocks) in cube.historic_faces().iter() {
            assert_eq!(blocks.len(), 9);
            for (index, block) in blocks.iter().enumerate() {
                assert_eq!(block.value, face.initial_color());
                assert_eq!(block.old_position, Some(BlockPosition { face, index }));
            }
        }
        assert_eq!(cube.moved_blocks().count(), 0);
    }

    #[test]
    fn test_history_after_rotate_y() {
        let mut cube = HistoricalCube::new(3).unwrap();
        cube.rotate_y(1, true).unwrap();

        // The middle row of the front face came from the middle row of the
        // left face.
        let front = &cube.historic_faces()[FaceName::Front];
        for (column, block) in front[3..6].iter().enumerate() {
            assert_eq!(block.value, ColorKey::Key2);
            assert_eq!(
                block.old_position,
                Some(BlockPosition {
                    face: FaceName::Left,
                    index: 3 + column,
                }),
            );
        }
        // Four rows of three blocks moved; no border face spun.
        assert_eq!(cube.moved_blocks().count(), 12);
    }

    #[test]
    fn test_history_after_border_spin() {
        let mut cube = HistoricalCube::new(3).unwrap();
        cube.rotate_x(0, true).unwrap();

        // Top-left of the left face came from its bottom-left.
        let left = &cube.historic_faces()[FaceName::Left];
        assert_eq!(
            left[0].old_position,
            Some(BlockPosition {
                face: FaceName::Left,
                index: 6,
            }),
        );
        // Four columns of three, plus the eight non-center blocks of the left
        // face.
        assert_eq!(cube.moved_blocks().count(), 12 + 8);
    }

    #[test]
    fn test_history_parallel_to_faces() {
        let mut cube = HistoricalCube::new(4).unwrap();
        cube.twist_all([
            Twist::new(crate::Axis::X, 1, true),
            Twist::new(crate::Axis::Z, 3, false),
        ])
        .unwrap();
        for (face, blocks) in cube.historic_faces().iter() {
            let current = cube.faces()[face].blocks();
            assert_eq!(blocks.len(), current.len());
            for (historic, block) in blocks.iter().zip(current) {
                assert_eq!(historic.value, block.value);
                assert!(historic.old_position.is_some());
            }
        }
    }

    #[test]
    fn test_failed_twist_keeps_history() {
        let mut cube = HistoricalCube::new(3).unwrap();
        cube.rotate_y(0, false).unwrap();
        let history = cube.historic_faces().clone();
        let faces = cube.faces().clone();

        assert!(cube.rotate_z(3, true).is_err());
        assert_eq!(cube.historic_faces(), &history);
        assert_eq!(cube.faces(), &faces);
    }

    #[test]
    fn test_untracked_block_is_reported() {
        let mut old_faces = CubeModel::new(2).unwrap().faces().clone();
        let new_faces = old_faces.clone();
        let stray = [Block {
            id: 99,
            value: ColorKey::Key1,
        }; 2];
        old_faces[FaceName::Down].update_slice(Slice::Row(1), &stray);

        let (history, untracked) = compute_history(&old_faces, &new_faces);
        assert_eq!(
            untracked,
            Some(BlockPosition {
                face: FaceName::Down,
                index: 2,
            }),
        );
        assert_eq!(history[FaceName::Down][2].old_position, None);
        assert_eq!(history[FaceName::Down][0].old_position.map(|p| p.index), Some(0));
    }
}
