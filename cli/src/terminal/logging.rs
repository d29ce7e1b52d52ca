use std::fmt;

use colored::*;
use selsort_common::log::{PRINT_TARGET, SUCCESS_TARGET};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::filter::IndicatifFilter;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Overrides the verbosity flags with an `EnvFilter` directive when set.
pub const LOG_ENV: &str = "SELSORT_LOG";

/// Field carrying unformatted terminal output.
pub const RAW_FIELD: &str = "raw_msg";

pub struct SelsortFormatter;

impl<S, N> FormatEvent<S, N> for SelsortFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        if meta.target() == SUCCESS_TARGET {
            let mut message = String::new();
            ctx.field_format()
                .format_fields(Writer::new(&mut message), event)?;
            return writeln!(writer, "{} {}", "[+]".green().bold(), message.green());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == RAW_FIELD {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == RAW_FIELD {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

/// Maps the `-v` count to a default filter directive.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Builds the event filter from `directives`.
///
/// Program output and success reports stay enabled at info whatever the
/// directives say, so a stricter log level never swallows the result.
pub fn build_filter(directives: &str) -> EnvFilter {
    let print_directive: String = format!("{PRINT_TARGET}=info");
    let success_directive: String = format!("{SUCCESS_TARGET}=info");

    let combined: String = [directives, &print_directive, &success_directive]
        .iter()
        .filter(|directive| !directive.trim().is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(",");

    EnvFilter::builder().parse_lossy(combined)
}

/// Installs the global subscriber.
///
/// Log lines are routed through the progress bar layer so an active bar is
/// redrawn below them instead of being torn apart.
pub fn init_logging(verbose: u8) {
    let directives: String = std::env::var(LOG_ENV)
        .unwrap_or_else(|_| default_directive(verbose).to_string());

    let indicatif_layer = IndicatifLayer::new();
    let writer = indicatif_layer.get_stdout_writer();

    tracing_subscriber::registry()
        .with(build_filter(&directives))
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(SelsortFormatter)
                .with_writer(writer),
        )
        .with(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        .init();
}

/// Runs `f` under a scoped subscriber filtered by `directives` and returns
/// everything it printed, without colours.
#[cfg(test)]
pub fn capture<F: FnOnce()>(directives: &str, f: F) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    colored::control::set_override(false);

    let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let shared = buffer.clone();

    let subscriber = tracing_subscriber::registry().with(build_filter(directives)).with(
        tracing_subscriber::fmt::layer()
            .event_format(SelsortFormatter)
            .with_writer(move || Sink(shared.clone())),
    );

    tracing::subscriber::with_default(subscriber, f);

    let bytes: Vec<u8> = buffer.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
