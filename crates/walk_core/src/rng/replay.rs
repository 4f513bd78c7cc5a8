//! Scripted random source.
//!
//! [`ReplaySource`] hands out pre-recorded draws in order and wraps around
//! when a script is exhausted. It exists so the composition logic of the walk
//! generators can be checked without any randomness involved.

use super::RandomSource;

/// Deterministic [`RandomSource`] replaying fixed scripts cyclically.
///
/// Uniform draws and index draws have separate scripts and separate cursors.
/// An empty uniform script yields `0.0`; an empty index script yields `0`.
/// Index draws are reduced modulo the requested upper bound.
///
/// # Examples
///
/// ```rust
/// use walk_core::rng::{RandomSource, ReplaySource};
///
/// let mut source = ReplaySource::new(vec![0.1, 0.9], vec![3]);
///
/// assert_eq!(source.gen_uniform(), 0.1);
/// assert_eq!(source.gen_uniform(), 0.9);
/// assert_eq!(source.gen_uniform(), 0.1);
/// assert_eq!(source.gen_index(4), 3);
/// assert_eq!(source.gen_index(2), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReplaySource {
    uniforms: Vec<f64>,
    indices: Vec<usize>,
    uniform_cursor: usize,
    index_cursor: usize,
}

impl ReplaySource {
    /// Creates a source replaying the given uniform and index scripts.
    pub fn new(uniforms: Vec<f64>, indices: Vec<usize>) -> Self {
        Self {
            uniforms,
            indices,
            uniform_cursor: 0,
            index_cursor: 0,
        }
    }

    /// Creates a source that only replays uniform draws.
    pub fn uniforms(uniforms: Vec<f64>) -> Self {
        Self::new(uniforms, Vec::new())
    }

    /// Creates a source that only replays index draws.
    pub fn indices(indices: Vec<usize>) -> Self {
        Self::new(Vec::new(), indices)
    }

    /// Rewinds both cursors to the start of their scripts.
    pub fn rewind(&mut self) {
        self.uniform_cursor = 0;
        self.index_cursor = 0;
    }
}

impl RandomSource for ReplaySource {
    fn gen_uniform(&mut self) -> f64 {
        if self.uniforms.is_empty() {
            return 0.0;
        }
        let value = self.uniforms[self.uniform_cursor % self.uniforms.len()];
        self.uniform_cursor += 1;
        value
    }

    fn gen_index(&mut self, upper: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.index_cursor % self.indices.len()];
        self.index_cursor += 1;
        value % upper
    }
}
