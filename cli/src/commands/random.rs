use selsort_common::input::{RandomSpec, random};
use selsort_common::{config::Config, info};

use crate::commands::sort;

/// Generates a sequence from `spec` and sorts it.
pub fn random(spec: RandomSpec, cfg: &Config) -> anyhow::Result<()> {
    let values: Vec<i64> = random::generate(&spec)?;

    if cfg.quiet < 2 {
        if let Some(seed) = spec.seed {
            info!("Using seed {seed}");
        }
        info!("Generated {} values in [{}, {}]", values.len(), spec.min, spec.max);
    }

    sort::run(values, cfg)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
