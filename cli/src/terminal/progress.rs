use indicatif::ProgressStyle;
use selsort_core::{Observer, Selection};
use tracing::info_span;
use tracing::span::EnteredSpan;
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Inputs at least this long get a progress bar while sorting.
pub const PROGRESS_THRESHOLD: usize = 2_000;

/// Progress bar counting selection passes, backed by a `tracing` span.
pub struct SortProgress {
    span: Option<EnteredSpan>,
}

impl SortProgress {
    pub fn start(total: usize, q_level: u8) -> Self {
        if total < PROGRESS_THRESHOLD || q_level > 1 {
            return Self { span: None };
        }

        let span = info_span!("sorting", indicatif.pb_show = true);
        span.pb_set_style(&style());
        span.pb_set_length(total as u64);

        Self {
            span: Some(span.entered()),
        }
    }

    pub fn advance(&self) {
        if let Some(span) = &self.span {
            span.pb_inc(1);
        }
    }

    pub fn finish(self) {
        drop(self.span);
    }
}

impl Observer for SortProgress {
    fn on_select(&mut self, _selection: &Selection<'_>) {
        self.advance();
    }
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.blue} Selecting {bar:32.green/bright_black} {pos}/{len} ({eta})",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▓░")
    .tick_strings(&[
        "▁▁▁▁▁",
        "▁▂▂▂▁",
        "▁▄▂▄▁",
        "▂▄▆▄▂",
        "▄▆█▆▄",
        "▂▄▆▄▂",
        "▁▄▂▄▁",
        "▁▂▂▂▁",
    ])
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_has_no_bar() {
        let progress = SortProgress::start(PROGRESS_THRESHOLD - 1, 0);
        assert!(progress.span.is_none());
        progress.advance();
        progress.finish();
    }

    #[test]
    fn test_quiet_output_has_no_bar() {
        let progress = SortProgress::start(PROGRESS_THRESHOLD * 2, 2);
        assert!(progress.span.is_none());
    }

    #[test]
    fn test_long_input_has_bar() {
        let mut progress = SortProgress::start(PROGRESS_THRESHOLD, 0);
        assert!(progress.span.is_some());

        let selection = Selection {
            pass: 0,
            index: 0,
            value: 1,
            sorted: &[1],
            remaining: &[],
        };
        progress.on_select(&selection);
        progress.finish();
    }
}
