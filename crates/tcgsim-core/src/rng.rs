//! Random number generator abstraction for determinism.
//!
//! Every random decision in a game goes through [`DeterministicRng`]. A
//! concrete generator only supplies the draw primitive, [`next_f64`]; the
//! integer, coin and sampling operations are defined here in terms of it so
//! that every implementation, test doubles included, consumes draws in the
//! same order.
//!
//! [`next_f64`]: DeterministicRng::next_f64

use serde::{Deserialize, Serialize};

/// Outcome of a single coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinFlip {
    /// Draw was `>= 0.5`.
    Heads,
    /// Draw was `< 0.5`.
    Tails,
}

impl CoinFlip {
    /// Returns `true` for [`CoinFlip::Heads`].
    #[must_use]
    pub fn is_heads(self) -> bool {
        self == Self::Heads
    }
}

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Advances the generator by one draw and returns a value in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Generate an integer in `[min, max]` inclusive, using one draw.
    ///
    /// Computed as `floor(draw * (max - min + 1)) + min`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        assert!(
            min <= max,
            "next_int: min ({min}) must not exceed max ({max})"
        );
        let span = i128::from(max) - i128::from(min) + 1;
        let offset = (self.next_f64() * span as f64).floor() as i128;
        (i128::from(min) + offset) as i64
    }

    /// Flip one coin. Exactly `0.5` counts as heads.
    fn flip_coin(&mut self) -> CoinFlip {
        if self.next_f64() >= 0.5 {
            CoinFlip::Heads
        } else {
            CoinFlip::Tails
        }
    }

    /// Flip `count` coins, returned in draw order.
    fn flip_coins(&mut self, count: usize) -> Vec<CoinFlip> {
        (0..count).map(|_| self.flip_coin()).collect()
    }

    /// Flip until tails comes up and return the number of heads seen before it.
    fn flip_until_tails(&mut self) -> u64 {
        let mut heads = 0;
        while self.flip_coin().is_heads() {
            heads += 1;
        }
        heads
    }
}

/// Slice sampling built on [`DeterministicRng::next_int`].
///
/// Implemented for every [`DeterministicRng`], including trait objects, so
/// `&mut dyn DeterministicRng` can shuffle and pick as well.
pub trait DeterministicRngExt: DeterministicRng {
    /// Shuffle `items` in place.
    ///
    /// Backward Fisher–Yates: for `i` from the last index down to `1`, draw
    /// `j = next_int(0, i)` and swap `i` with `j`. Slices of length zero or
    /// one consume no draws.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = draw_index(self, i + 1);
            items.swap(i, j);
        }
    }

    /// Return a shuffled copy of `items`, leaving the input untouched.
    fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        self.shuffle(&mut copy);
        copy
    }

    /// Pick one element with a single draw. Returns `None` for an empty
    /// slice without advancing the generator.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = draw_index(self, items.len());
        items.get(index)
    }

    /// Pick `n` distinct elements without replacement.
    ///
    /// Each step draws a uniform index into the remaining pool and removes
    /// that element. When `n >= items.len()` this is [`shuffled`].
    ///
    /// [`shuffled`]: DeterministicRngExt::shuffled
    fn pick_n<T: Clone>(&mut self, items: &[T], n: usize) -> Vec<T> {
        if n >= items.len() {
            return self.shuffled(items);
        }
        let mut pool = items.to_vec();
        let mut picked = Vec::with_capacity(n);
        for _ in 0..n {
            let index = draw_index(self, pool.len());
            picked.push(pool.remove(index));
        }
        picked
    }
}

impl<R: DeterministicRng + ?Sized> DeterministicRngExt for R {}

/// One `next_int(0, len - 1)` draw. `len` must be non-zero.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn draw_index<R: DeterministicRng + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.next_int(0, len as i64 - 1) as usize
}
