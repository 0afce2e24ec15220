use rand::Rng;

use crate::domain::NumberGenerator;

/// Draws 9-digit account numbers uniformly from [100000000, 999999999).
/// Collisions with existing repository keys are not checked.
#[derive(Default, Debug)]
pub struct RandomNumberGenerator;

impl RandomNumberGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl NumberGenerator for RandomNumberGenerator {
    fn generate(&mut self) -> String {
        rand::thread_rng()
            .gen_range(100_000_000u32..999_999_999)
            .to_string()
    }
}
