//! Terminal output of the sorter.
//!
//! Every line goes through `tracing` under the print target, so output and
//! log lines share one writer and one ordering.

use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use selsort_common::log::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

/// Column the `:` of a [`field`] line is aligned to.
pub const KEY_WIDTH: usize = 10;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    print("");
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title: String = format!(" SELSORT v{} ", env!("CARGO_PKG_VERSION"));
    print(&ruled(&title, "═", |s| s.bright_green().bold()));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!(" {} ", msg.to_uppercase());
    print(&ruled(&title, "─", |s| s.bright_green()));
}

/// Full-width closing rule.
pub fn separator() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

/// `> Key.....: value`, value painted in the default text colour unless it
/// already carries one.
pub fn field<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.width()));
    let line: String = format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.with_default(colors::TEXT_DEFAULT)
    );
    print(&line);
}

/// One selection pass: a numbered title followed by its partitions.
pub fn pass_tree(pass: usize, title: &str, branches: &[(String, ColoredString)]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        pass.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        title.color(colors::PRIMARY)
    ));

    for (i, (name, value)) in branches.iter().enumerate() {
        let branch: &str = if i + 1 == branches.len() { "└─" } else { "├─" };
        let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(name.width()));
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            name.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centered(msg: &str) {
    let width: usize = console::measure_text_width(msg);
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    print(&format!("{space}{msg}"));
}

/// Centres `label` in a rule of `fill` spanning [`TOTAL_WIDTH`] columns.
fn ruled(label: &str, fill: &str, paint: fn(&str) -> ColoredString) -> String {
    let pad: usize = TOTAL_WIDTH.saturating_sub(label.width());
    let left: usize = pad / 2;
    let right: usize = pad - left;

    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        paint(label),
        fill.repeat(right).color(colors::SEPARATOR)
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
