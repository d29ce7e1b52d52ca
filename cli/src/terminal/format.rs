use std::time::Duration;

use crate::terminal::colors;
use colored::*;
use selsort_core::Selection;

/// Values shown before a sequence preview is cut short.
pub const DISPLAY_LIMIT: usize = 24;

type Detail = (String, ColoredString);

/// Renders `values` as `[a, b, c]`, eliding everything past `limit`.
pub fn sequence_preview(values: &[i64], limit: usize) -> String {
    let shown: Vec<String> = values.iter().take(limit).map(i64::to_string).collect();
    let hidden: usize = values.len().saturating_sub(limit);

    match hidden {
        0 => format!("[{}]", shown.join(", ")),
        _ if shown.is_empty() => format!("[… {hidden} more]"),
        _ => format!("[{}, … {hidden} more]", shown.join(", ")),
    }
}

/// Space separated values, suitable for piping into other tools.
pub fn plain(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn selection_title(selection: &Selection<'_>) -> String {
    format!(
        "picked {} from index {}",
        selection.value, selection.index
    )
}

pub fn selection_details(selection: &Selection<'_>) -> Vec<Detail> {
    let sorted: ColoredString =
        sequence_preview(selection.sorted, DISPLAY_LIMIT).color(colors::SORTED);
    let remaining: ColoredString =
        sequence_preview(selection.remaining, DISPLAY_LIMIT).color(colors::REMAINING);

    vec![
        (String::from("Sorted"), sorted),
        (String::from("Remaining"), remaining),
    ]
}

pub fn elapsed(duration: Duration) -> String {
    let secs: f64 = duration.as_secs_f64();
    if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{:.2}s", secs)
    }
}

pub fn count_unit(count: usize) -> &'static str {
    if count == 1 { "value" } else { "values" }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
