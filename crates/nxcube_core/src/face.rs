use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Sticker color of a block.
///
/// Each face of a solved cube is a uniform color; see
/// [`crate::FaceName::initial_color()`].
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
#[strum(serialize_all = "snake_case")]
#[allow(missing_docs)]
pub enum ColorKey {
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
}

impl ColorKey {
    /// Returns the human-friendly name of the color.
    pub const fn color_name(self) -> &'static str {
        match self {
            ColorKey::Key1 => "white",
            ColorKey::Key2 => "red",
            ColorKey::Key3 => "blue",
            ColorKey::Key4 => "orange",
            ColorKey::Key5 => "green",
            ColorKey::Key6 => "yellow",
        }
    }

    /// Returns the 8-bit sRGB display color.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            ColorKey::Key1 => [0xff, 0xff, 0xff],
            ColorKey::Key2 => [0xc4, 0x1e, 0x3a],
            ColorKey::Key3 => [0x00, 0x51, 0xba],
            ColorKey::Key4 => [0xff, 0x58, 0x00],
            ColorKey::Key5 => [0x00, 0x9e, 0x60],
            ColorKey::Key6 => [0xff, 0xd5, 0x00],
        }
    }

    /// Returns the display color as a hex string like `#ff5800`.
    pub fn hex_code(self) -> String {
        format!("#{}", hex::encode(self.rgb()))
    }
}

/// Unit cell of a face.
///
/// `id` is assigned when the face is created and never changes, so together
/// with `value` it identifies a block across twists even when several blocks
/// share a color.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    /// Identity, unique within the face the block started on.
    pub id: usize,
    /// Sticker color.
    pub value: ColorKey,
}

/// Row or column of a face.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Slice {
    /// Row, counted from the top.
    Row(usize),
    /// Column, counted from the left.
    Column(usize),
}

/// Square grid of blocks, stored in row-major order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Face {
    dimension: usize,
    initial_value: ColorKey,
    blocks: Vec<Block>,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .rows()
            .map(|row| row.iter().map(|block| block.value).join(" "))
            .join("\n");
        write!(f, "{rows}")
    }
}

impl Face {
    /// Constructs a face with every block set to `initial_value`. Block IDs
    /// are assigned from 0 in row-major order.
    pub fn new(dimension: usize, initial_value: ColorKey) -> Self {
        let mut ret = Self {
            dimension,
            initial_value,
            blocks: vec![],
        };
        ret.reset();
        ret
    }

    /// Changes the dimension of the face. **This resets every block.**
    pub fn set_dimension(&mut self, dimension: usize) {
        self.dimension = dimension;
        self.reset();
    }
    /// Changes the solved color of the face. **This resets every block.**
    pub fn set_initial_value(&mut self, initial_value: ColorKey) {
        self.initial_value = initial_value;
        self.reset();
    }
    fn reset(&mut self) {
        let value = self.initial_value;
        self.blocks = (0..self.dimension * self.dimension)
            .map(|id| Block { id, value })
            .collect();
    }

    /// Returns the number of blocks along each side of the face.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
    /// Returns the color of every block on the solved face.
    pub fn initial_value(&self) -> ColorKey {
        self.initial_value
    }
    /// Returns the blocks in row-major order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn row(&self, index: usize) -> &[Block] {
        let start = index * self.dimension;
        &self.blocks[start..start + self.dimension]
    }
    /// Returns the column at `index`, from top to bottom.
    pub fn column(&self, index: usize) -> Vec<Block> {
        debug_assert!(index < self.dimension, "column index out of range");
        self.blocks
            .iter()
            .skip(index)
            .step_by(self.dimension.max(1))
            .copied()
            .collect()
    }
    /// Returns an iterator over the rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Block]> {
        self.blocks.chunks(self.dimension.max(1))
    }
    /// Returns an iterator over the columns, from left to right.
    pub fn columns(&self) -> impl Iterator<Item = Vec<Block>> {
        (0..self.dimension).map(move |i| self.column(i))
    }
    /// Returns a copy of the blocks in a row or column.
    pub fn slice(&self, slice: Slice) -> Vec<Block> {
        match slice {
            Slice::Row(i) => self.row(i).to_vec(),
            Slice::Column(i) => self.column(i),
        }
    }

    /// Overwrites the row at `index`.
    ///
    /// `new_blocks` must contain exactly one block per column.
    pub fn update_row(&mut self, index: usize, new_blocks: &[Block]) {
        debug_assert_eq!(new_blocks.len(), self.dimension, "wrong row length");
        let start = index * self.dimension;
        self.blocks[start..start + self.dimension].copy_from_slice(new_blocks);
    }
    /// Overwrites the column at `index`.
    ///
    /// `new_blocks` must contain exactly one block per row.
    pub fn update_column(&mut self, index: usize, new_blocks: &[Block]) {
        debug_assert_eq!(new_blocks.len(), self.dimension, "wrong column length");
        for (row, &block) in new_blocks.iter().enumerate() {
            self.blocks[index + row * self.dimension] = block;
        }
    }
    /// Overwrites a row or column.
    pub fn update_slice(&mut self, slice: Slice, new_blocks: &[Block]) {
        match slice {
            Slice::Row(i) => self.update_row(i, new_blocks),
            Slice::Column(i) => self.update_column(i, new_blocks),
        }
    }

    /// Rotates the face 90° clockwise in place.
    pub fn rotate_clockwise(&mut self) {
        let n = self.dimension;
        // Block `(row, column)` comes from `(n - 1 - column, row)`.
        self.remap(|row, column| (n * n - n) - n * column + row);
    }
    /// Rotates the face 90° anticlockwise in place.
    pub fn rotate_anticlockwise(&mut self) {
        let n = self.dimension;
        // Block `(row, column)` comes from `(column, n - 1 - row)`.
        self.remap(|row, column| n * column + (n - 1 - row));
    }
    fn remap(&mut self, source_index: impl Fn(usize, usize) -> usize) {
        let n = self.dimension;
        self.blocks = (0..n * n)
            .map(|i| self.blocks[source_index(i / n, i % n)])
            .collect();
    }

    /// Returns whether every block has the solved color of the face.
    pub fn all_blocks_initial(&self) -> bool {
        self.blocks
            .iter()
            .all(|block| block.value == self.initial_value)
    }
}
