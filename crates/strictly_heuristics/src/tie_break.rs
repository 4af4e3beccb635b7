//! Tie-breaking among equally good candidate moves.
//!
//! Choosing between candidates is the only non-deterministic step in the
//! engine. It goes through [`TieBreaker`] so tests can pin it down with
//! [`FirstCandidate`] or a seeded [`RandomTieBreaker`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// Source of choices among `len` equally good candidates.
pub trait TieBreaker {
    /// Returns an index in `0..len`. Only called with `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform choice backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomTieBreaker {
    rng: StdRng,
}

impl RandomTieBreaker {
    /// Seeds from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTieBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreaker for RandomTieBreaker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always takes the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl TieBreaker for FirstCandidate {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

impl<B: TieBreaker + ?Sized> TieBreaker for Box<B> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Picks one candidate, or `None` when there are none.
#[instrument(skip_all, fields(candidates = candidates.len()))]
pub fn pick_one<T, B>(breaker: &mut B, candidates: &[T]) -> Option<T>
where
    T: Clone,
    B: TieBreaker + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let idx = breaker.pick_index(candidates.len()).min(candidates.len() - 1);
    candidates.get(idx).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidates() {
        let empty: [u8; 0] = [];
        assert_eq!(pick_one(&mut FirstCandidate, &empty), None);
        assert_eq!(pick_one(&mut RandomTieBreaker::seeded(1), &empty), None);
    }

    #[test]
    fn test_first_candidate_is_deterministic() {
        assert_eq!(pick_one(&mut FirstCandidate, &[7, 8, 9]), Some(7));
    }

    #[test]
    fn test_seeded_choices_repeat() {
        let items: Vec<u32> = (0..20).collect();
        let mut a = RandomTieBreaker::seeded(42);
        let mut b = RandomTieBreaker::seeded(42);
        for _ in 0..50 {
            assert_eq!(pick_one(&mut a, &items), pick_one(&mut b, &items));
        }
    }

    #[test]
    fn test_random_choice_stays_in_range() {
        let mut breaker = RandomTieBreaker::seeded(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let picked = pick_one(&mut breaker, &[0usize, 1, 2]).unwrap();
            seen[picked] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_out_of_range_index_is_clamped() {
        struct Overshoot;
        impl TieBreaker for Overshoot {
            fn pick_index(&mut self, len: usize) -> usize {
                len + 5
            }
        }
        assert_eq!(pick_one(&mut Overshoot, &['a', 'b']), Some('b'));
    }
}
