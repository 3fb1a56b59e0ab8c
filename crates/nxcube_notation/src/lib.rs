//! Text notation for sequences of cube twists.
//!
//! A sequence is a whitespace-separated list of twists. Each twist is an axis
//! (`x`, `y`, or `z`, case-insensitive), a slice index, an optional `'` for
//! an anticlockwise turn, and an optional repeat count such as `*3`.
//!
//! ```
//! use nxcube_core::{Axis, Twist};
//!
//! let twists = nxcube_notation::parse_twists("x0 Y2' z1*2").unwrap();
//! assert_eq!(
//!     twists,
//!     [
//!         Twist::new(Axis::X, 0, true),
//!         Twist::new(Axis::Y, 2, false),
//!         Twist::new(Axis::Z, 1, true),
//!         Twist::new(Axis::Z, 1, true),
//!     ],
//! );
//! assert_eq!(nxcube_notation::format_twists(&twists), "x0 y2' z1 z1");
//! ```

use itertools::Itertools;
use nxcube_core::Twist;

mod errors;
mod parse;

pub use errors::ParseError;

/// Maximum number of twists that a single string may expand to.
pub const MAX_TWISTS: usize = 1_000_000;

/// Parses a sequence of twists, expanding repeat counts.
///
/// Returns an error instead of expanding to more than [`MAX_TWISTS`] twists.
pub fn parse_twists(s: &str) -> Result<Vec<Twist>, ParseError> {
    let tokens = parse::twist_tokens(s)?;
    let mut twists = vec![];
    for token in tokens {
        let twist = Twist::new(token.axis, token.index.parse()?, !token.prime);
        let repeat = match token.repeat {
            Some(n) => n.parse()?,
            None => 1,
        };
        if repeat == 0 {
            return Err(ParseError::ZeroRepeat);
        }
        if twists
            .len()
            .checked_add(repeat)
            .is_none_or(|total| total > MAX_TWISTS)
        {
            return Err(ParseError::TooManyTwists);
        }
        twists.extend(std::iter::repeat_n(twist, repeat));
    }
    Ok(twists)
}

/// Formats a sequence of twists in canonical notation, one token per twist.
pub fn format_twists(twists: &[Twist]) -> String {
    twists.iter().join(" ")
}

/// Returns the sequence of twists that undoes `twists`.
pub fn invert_twists(twists: &[Twist]) -> Vec<Twist> {
    twists.iter().rev().map(|twist| twist.inverse()).collect()
}
