//! Deterministic random source for replays and tests.
//!
//! Every randomized decision in the engine is one `rng.gen::<f64>()` draw, so a
//! scripted list of unit-interval rolls fully determines an encounter.

use rand::RngCore;

/// Bits of precision `rand` uses when turning a `u64` into an `f64` in [0, 1).
const F64_PRECISION_BITS: u32 = 53;

/// Replays a fixed cycle of rolls in [0, 1).
///
/// Each `gen::<f64>()` call consumes exactly one roll. When the script runs
/// out it starts again from the first roll.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    rolls: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Creates a scripted source. Rolls are clamped into [0, 1).
    /// An empty script behaves like a script of a single `0.0`.
    pub fn new(rolls: impl Into<Vec<f64>>) -> Self {
        let rolls: Vec<f64> = rolls
            .into()
            .into_iter()
            .map(|r| r.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { rolls, cursor: 0 }
    }

    /// A source that returns the same roll forever.
    pub fn constant(roll: f64) -> Self {
        Self::new(vec![roll])
    }

    /// Number of rolls consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    fn next_roll(&mut self) -> f64 {
        if self.rolls.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        // Inverse of rand's Standard f64 sampling: value = (u64 >> 11) * 2^-53.
        // Rounding up keeps a scripted roll from landing below a threshold it equals.
        let fraction = (self.next_roll() * (1u64 << F64_PRECISION_BITS) as f64).ceil() as u64;
        fraction << (64 - F64_PRECISION_BITS)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
