use itertools::Itertools;
use proptest::prelude::*;

use crate::{Axis, Block, CubeModel, Twist};


/// Returns every block on the cube, sorted, so that two cubes can be compared
/// as multisets.
fn sorted_blocks(cube: &CubeModel) -> Vec<Block> {
    cube.faces()
        .values()
        .flat_map(|face| face.blocks().iter().copied())
        .sorted_by_key(|block| (block.value, block.id))
        .collect()
}

/// Strategy for a valid twist on a cube of the given dimension.
fn twist_strategy(dimension: usize) -> impl Strategy<Value = Twist> {
    (any::<Axis>(), 0..dimension, any::<bool>())
        .prop_map(|(axis, index, clockwise)| Twist::new(axis, index, clockwise))
}

/// Strategy for a cube dimension and a sequence of valid twists for it.
fn dimension_and_twists(max_len: usize) -> impl Strategy<Value = (usize, Vec<Twist>)> {
    (1..=6_usize).prop_flat_map(move |dimension| {
        (
            Just(dimension),
            prop::collection::vec(twist_strategy(dimension), 0..max_len),
        )
    })
}
