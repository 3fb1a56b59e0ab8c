use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::ColorKey;

/// Name of one of the six faces of a cube.
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
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[allow(missing_docs)]
pub enum FaceName {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

impl FaceName {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// Returns the index of the face in [`PerFace`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the color that the face has on a solved cube.
    pub const fn initial_color(self) -> ColorKey {
        match self {
            FaceName::Up => ColorKey::Key1,
            FaceName::Left => ColorKey::Key2,
            FaceName::Front => ColorKey::Key3,
            FaceName::Right => ColorKey::Key4,
            FaceName::Back => ColorKey::Key5,
            FaceName::Down => ColorKey::Key6,
        }
    }
}

/// Value stored for each of the six faces of a cube, indexed by
/// [`FaceName`].
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T> {
    up: T,
    left: T,
    front: T,
    right: T,
    back: T,
    down: T,
}

impl<T> Index<FaceName> for PerFace<T> {
    type Output = T;

    fn index(&self, face: FaceName) -> &T {
        match face {
            FaceName::Up => &self.up,
            FaceName::Left => &self.left,
            FaceName::Front => &self.front,
            FaceName::Right => &self.right,
            FaceName::Back => &self.back,
            FaceName::Down => &self.down,
        }
    }
}

impl<T> IndexMut<FaceName> for PerFace<T> {
    fn index_mut(&mut self, face: FaceName) -> &mut T {
        match face {
            FaceName::Up => &mut self.up,
            FaceName::Left => &mut self.left,
            FaceName::Front => &mut self.front,
            FaceName::Right => &mut self.right,
            FaceName::Back => &mut self.back,
            FaceName::Down => &mut self.down,
        }
    }
}

impl<T> PerFace<T> {
    /// Constructs a value for each face using `f`.
    pub fn from_fn(mut f: impl FnMut(FaceName) -> T) -> Self {
        Self {
            up: f(FaceName::Up),
            left: f(FaceName::Left),
            front: f(FaceName::Front),
            right: f(FaceName::Right),
            back: f(FaceName::Back),
            down: f(FaceName::Down),
        }
    }

    /// Returns an iterator over face names and their values, in the order of
    /// [`FaceName`].
    pub fn iter(&self) -> impl Iterator<Item = (FaceName, &T)> {
        FaceName::iter().map(move |face| (face, &self[face]))
    }

    /// Returns an iterator over the values, in the order of [`FaceName`].
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }

    /// Applies `f` to each value, consuming `self`.
    pub fn map<U>(self, mut f: impl FnMut(FaceName, T) -> U) -> PerFace<U> {
        let Self {
            up,
            left,
            front,
            right,
            back,
            down,
        } = self;
        PerFace {
            up: f(FaceName::Up, up),
            left: f(FaceName::Left, left),
            front: f(FaceName::Front, front),
            right: f(FaceName::Right, right),
            back: f(FaceName::Back, back),
            down: f(FaceName::Down, down),
        }
    }

    /// Applies `f` to a reference to each value.
    pub fn map_ref<U>(&self, mut f: impl FnMut(FaceName, &T) -> U) -> PerFace<U> {
        PerFace::from_fn(|face| f(face, &self[face]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_order_and_colors() {
        let names: Vec<String> = FaceName::iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["up", "left", "front", "right", "back", "down"]);
        for (i, face) in FaceName::iter().enumerate() {
            assert_eq!(face.index(), i);
        }
        assert_eq!("back".parse::<FaceName>(), Ok(FaceName::Back));
    }

    #[test]
    fn test_per_face_indexing() {
        let mut per_face = PerFace::from_fn(FaceName::index);
        per_face[FaceName::Right] += 10;
        assert_eq!(per_face[FaceName::Up], 0);
        assert_eq!(per_face[FaceName::Right], 13);
        let doubled = per_face.map_ref(|_, &i| i * 2);
        assert_eq!(doubled.values().copied().collect::<Vec<_>>(), [0, 2, 4, 26, 8, 10]);
    }
}
