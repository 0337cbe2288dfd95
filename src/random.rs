//! Randomness sources for password generation.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Uniform index into an alphabet.
pub trait IndexSource {
    /// Return a value in `0..len`. Callers never pass zero.
    fn index(&mut self, len: usize) -> usize;
}

/// Adapts any `rand` RNG.
pub struct RngIndex<R>(R);

impl<R: Rng> RngIndex<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngIndex<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> IndexSource for RngIndex<R> {
    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Replays a fixed index sequence, wrapping into range.
#[cfg(test)]
pub struct SequenceIndex {
    seq: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl SequenceIndex {
    pub fn new(seq: Vec<usize>) -> Self {
        assert!(!seq.is_empty(), "sequence must not be empty");
        Self { seq, pos: 0 }
    }
}

#[cfg(test)]
impl IndexSource for SequenceIndex {
    fn index(&mut self, len: usize) -> usize {
        let v = self.seq[self.pos % self.seq.len()];
        self.pos += 1;
        v % len
    }
}
