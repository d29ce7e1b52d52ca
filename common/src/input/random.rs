use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::InputError;

/// Shape of a randomly generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSpec {
    pub count: usize,
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
    /// Fixed seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for RandomSpec {
    fn default() -> Self {
        Self {
            count: 10,
            min: 0,
            max: 100,
            seed: None,
        }
    }
}

/// Draws `spec.count` integers uniformly from `spec.min..=spec.max`.
pub fn generate(spec: &RandomSpec) -> Result<Vec<i64>, InputError> {
    if spec.min > spec.max {
        return Err(InputError::InvalidBounds {
            min: spec.min,
            max: spec.max,
        });
    }

    let mut rng: StdRng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok((0..spec.count)
        .map(|_| rng.random_range(spec.min..=spec.max))
        .collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
