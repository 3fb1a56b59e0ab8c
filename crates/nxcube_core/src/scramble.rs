use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{Axis, CubeError, HistoricalCube, Twist};

const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

/// Parameters to deterministically generate a twist sequence to scramble a
/// cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Type of scramble to generate.
    pub ty: ScrambleType,
    /// Random seed. The same seed always produces the same scramble for a
    /// given cube dimension.
    pub seed: String,
}
impl ScrambleParams {
    /// Generates new scramble parameters with a random seed.
    pub fn new(ty: ScrambleType) -> Self {
        let seed = rand::rng().random::<u64>().to_string();
        Self { ty, seed }
    }

    /// Constructs scramble parameters with a specific seed.
    pub fn with_seed(ty: ScrambleType, seed: impl Into<String>) -> Self {
        Self {
            ty,
            seed: seed.into(),
        }
    }

    /// Returns the number of twists in the scramble.
    pub fn len(&self) -> u32 {
        match self.ty {
            ScrambleType::Full => crate::FULL_SCRAMBLE_LENGTH,
            ScrambleType::Partial(n) => n,
        }
    }
    /// Returns whether the scramble has no twists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the random number generator for the scramble.
    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = Sha256::new();
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest = sha256.finalize();

        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&digest);
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }

    /// Generates the scramble twists for a cube of the given dimension.
    pub fn twists(&self, dimension: usize) -> Vec<Twist> {
        let mut rng = self.rng();
        (0..self.len())
            .map(|_| random_twist(dimension, &mut rng))
            .collect()
    }
}

/// Type of scramble to generate.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScrambleType {
    /// Full scramble.
    Full,
    /// Partial scramble of a specific number of twists.
    Partial(u32),
}

/// Output of scrambling a cube.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambledCube {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Scramble twists applied.
    pub twists: Vec<Twist>,
}

impl HistoricalCube {
    /// Applies a scramble and returns the twists that were applied.
    ///
    /// The history afterwards describes only the last scramble twist.
    pub fn scramble(&mut self, params: ScrambleParams) -> Result<ScrambledCube, CubeError> {
        let twists = params.twists(self.dimension());
        log::debug!(
            "scrambling with {} twists from seed {:?}",
            twists.len(),
            params.seed,
        );
        for &twist in &twists {
            self.twist(twist)?;
        }
        Ok(ScrambledCube { params, twists })
    }
}

/// Returns a uniformly random valid twist for a cube of the given dimension.
pub(crate) fn random_twist(dimension: usize, rng: &mut impl Rng) -> Twist {
    let axis = AXES[rng.random_range(0..AXES.len())];
    let index = rng.random_range(0..dimension.max(1));
    let clockwise = rng.random_bool(0.5);
    Twist::new(axis, index, clockwise)
}
