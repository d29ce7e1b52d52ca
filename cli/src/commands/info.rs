use colored::*;

use crate::terminal::{colors, print};
use selsort_common::config::Config;

type Detail = (String, ColoredString);

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::field("Tool", format!("selsort v{}", env!("CARGO_PKG_VERSION")));
    print::field("Algorithm", "selection sort".color(colors::ACCENT));

    if cfg.quiet > 1 {
        return Ok(());
    }

    print::header("contract", cfg.quiet);
    print::pass_tree(0, "Complexity", &complexity());
    print::blank();
    print::pass_tree(1, "Behaviour", &behaviour());

    Ok(())
}

fn complexity() -> Vec<Detail> {
    vec![
        (String::from("Time"), "O(n²) comparisons".normal()),
        (String::from("Space"), "O(n) for the result".normal()),
    ]
}

fn behaviour() -> Vec<Detail> {
    vec![
        (String::from("Order"), "non-decreasing".normal()),
        (String::from("Ties"), "earliest minimum is selected first".normal()),
        (String::from("Input"), "drained into the sorted result".normal()),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
