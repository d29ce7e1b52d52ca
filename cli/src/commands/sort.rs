use std::io::{self, IsTerminal, Read};
use std::time::{Duration, Instant};

use colored::*;

use crate::terminal::progress::SortProgress;
use crate::terminal::{colors, format, print};
use selsort_common::input::{Sequence, read_sequence};
use selsort_common::{config::Config, info, success, warn};
use selsort_core::{Selection, is_sorted, selection_sort_with};

/// Sorts the given sequences, or standard input when none was passed.
pub fn sort(values: Vec<Sequence>, cfg: &Config) -> anyhow::Result<()> {
    let sequence: Sequence = if values.is_empty() {
        let stdin = io::stdin();
        let interactive: bool = stdin.is_terminal();
        read_input(stdin.lock(), interactive, cfg)?
    } else {
        Sequence::concat(values)
    };

    run(sequence.into_values(), cfg)
}

fn read_input<R: Read>(input: R, interactive: bool, cfg: &Config) -> anyhow::Result<Sequence> {
    if cfg.quiet < 2 {
        if interactive {
            warn!("No values given, reading standard input until EOF (Ctrl-D)");
        } else {
            info!("Reading integers from standard input");
        }
    }

    read_sequence(input)
}

/// Sorts `values` and prints the outcome according to `cfg`.
pub fn run(mut values: Vec<i64>, cfg: &Config) -> anyhow::Result<()> {
    let total: usize = values.len();
    let show_steps: bool = cfg.steps && cfg.quiet < 2;

    if cfg.quiet < 2 {
        print::header("input", cfg.quiet);
        print::field("Values", format::sequence_preview(&values, format::DISPLAY_LIMIT));
        print::field("Count", total.to_string());
    }

    if show_steps && total > 0 {
        print::header("selection passes", cfg.quiet);
    }

    let start_time: Instant = Instant::now();
    let mut progress: SortProgress = SortProgress::start(total, cfg.quiet);

    let sorted: Vec<i64> = if show_steps {
        selection_sort_with(&mut values, &mut |selection: &Selection<'_>| {
            progress.advance();
            print_step(selection, total);
        })
    } else {
        selection_sort_with(&mut values, &mut progress)
    };

    progress.finish();
    let total_time: Duration = start_time.elapsed();

    verify(&values, &sorted, total)?;

    sort_ends(&sorted, total_time, cfg);
    Ok(())
}

/// The source must be drained into a sorted result of the same length.
fn verify(left: &[i64], sorted: &[i64], total: usize) -> anyhow::Result<()> {
    anyhow::ensure!(
        left.is_empty() && sorted.len() == total && is_sorted(sorted),
        "selection sort left the sequence in an inconsistent state \
         ({} left behind, {} of {total} sorted)",
        left.len(),
        sorted.len()
    );
    Ok(())
}

fn print_step(selection: &Selection<'_>, total: usize) {
    print::pass_tree(
        selection.pass,
        &format::selection_title(selection),
        &format::selection_details(selection),
    );
    if selection.pass + 1 != total {
        print::blank();
    }
}

fn sort_ends(sorted: &[i64], total_time: Duration, cfg: &Config) {
    if cfg.quiet > 1 {
        print::print(&format::plain(sorted));
        return;
    }

    print::header("result", cfg.quiet);
    let preview: ColoredString =
        format::sequence_preview(sorted, format::DISPLAY_LIMIT).color(colors::SORTED);
    print::field("Sorted", preview);

    let values: ColoredString = format!("{} {}", sorted.len(), format::count_unit(sorted.len()))
        .bold()
        .green();
    let elapsed: ColoredString = format::elapsed(total_time).bold().yellow();
    let summary: String = format!("Sort Complete: {values} selected in {elapsed}");

    if cfg.quiet == 0 {
        print::separator();
        print::centered(&summary);
    } else {
        print::blank();
        success!("{summary}");
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
