/*!
 * Legacy seeded pseudo-random generator.
 *
 * This is a deliberate reproduction of the generator the historical deck
 * exports were built with: a fixed-constant LCG whose draw is the ratio of
 * the two most recent states, not `next / m`. The distribution is not
 * uniform and must stay that way: published decks are only reproducible
 * if the same seed yields the exact same draw sequence.
 */

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS: u64 = 1 << 31;

/// Stateful deterministic draw sequence, seeded from a level identifier.
#[derive(Debug, Clone)]
pub struct LegacyRng {
    seed: u64,
}

impl LegacyRng {
    pub fn new(seed: u64) -> Self {
        LegacyRng { seed: seed % MODULUS }
    }

    /// Current internal state, exposed for determinism tests.
    pub fn state(&self) -> u64 {
        self.seed
    }

    /// Advance the generator and return the next draw.
    ///
    /// Returns `min(seed, next) / max(seed, next)`, which lies in `[0, 1)`
    /// unless the state hits a fixed point of the LCG (never the case for
    /// the level-derived seeds in use).
    pub fn next_ratio(&mut self) -> f64 {
        let last = self.seed;
        // seed < 2^31 and a < 2^31, so a * seed + c fits u64 exactly
        let next = (MULTIPLIER * last + INCREMENT) % MODULUS;
        self.seed = next;
        let low = last.min(next) as f64;
        let high = last.max(next) as f64;
        low / high
    }
}
