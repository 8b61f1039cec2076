//! Star breakdown for ratings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of star slots shown for a rating
pub const STAR_SLOTS: u8 = 5;

/// Visual breakdown of a 0.0 - 5.0 rating
///
/// `full + half + empty` is always [`STAR_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// floor(rating) full stars, a half star for any fractional part, the
    /// rest empty. Out-of-range and NaN ratings are clamped.
    pub fn from_rating(rating: f32) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, f32::from(STAR_SLOTS))
        };

        let full = rating.floor() as u8;
        let half = rating.fract() != 0.0;
        let empty = STAR_SLOTS - full - u8::from(half);

        Self { full, half, empty }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.full {
            f.write_str("★")?;
        }
        if self.half {
            f.write_str("⯪")?;
        }
        for _ in 0..self.empty {
            f.write_str("☆")?;
        }
        Ok(())
    }
}
