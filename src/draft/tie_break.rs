use rand::Rng;

use crate::domain::nomination::Nomination;

/// Strategy for arbitrating a nomination conflict
///
/// When two or more captains nominate the same participant in one round,
/// exactly one nomination wins. This seam exists so the arbitration policy
/// can be replaced (for example by a captain-priority rule) without touching
/// the round/turn advancement logic, and so tests can inject a
/// deterministic pick.
pub trait TieBreak: Send + Sync {
    /// Returns the index of the winning nomination within `contenders`
    ///
    /// `contenders` is never empty and the returned index must be in
    /// bounds.
    fn pick(&self, contenders: &[Nomination]) -> usize;
}

/// Uniform random arbitration
///
/// Fair when no captain priority ordering exists. Uses the thread-local
/// generator; uniformity matters here, cryptographic strength does not.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTieBreak;

impl TieBreak for RandomTieBreak {
    fn pick(&self, contenders: &[Nomination]) -> usize {
        if contenders.len() <= 1 {
            return 0;
        }

        rand::rng().random_range(0..contenders.len())
    }
}
