use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Emoji-prefixed, timestamped log lines: `🐛 DEBUG [12:00:01]: message`.
///
/// With `show_target` the event target follows the timestamp, as in
/// `🐛 DEBUG [12:00:01] assertify::config: message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomFormatter {
    show_target: bool,
}

impl CustomFormatter {
    pub fn new(show_target: bool) -> Self {
        Self { show_target }
    }
}

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let (emoji, level) = level_marker(metadata.level());
        write!(writer, "{} {} [{}]", emoji, level, Local::now().format("%H:%M:%S"))?;

        if self.show_target {
            write!(writer, " {}", metadata.target())?;
        }

        writer.write_str(": ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_marker(level: &tracing::Level) -> (&'static str, &'static str) {
    match *level {
        tracing::Level::TRACE => ("🔬", "TRACE"),
        tracing::Level::DEBUG => ("🐛", "DEBUG"),
        tracing::Level::INFO => ("ℹ️ ", "INFO"),
        tracing::Level::WARN => ("⚠️ ", "WARN"),
        tracing::Level::ERROR => ("❌", "ERROR"),
    }
}

/// Default filter directive for the given verbosity
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "assertify=debug,warn"
    } else {
        "assertify=warn,error"
    }
}

/// Install the global subscriber. Logs go to stderr so reports on stdout
/// stay byte-exact. `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .event_format(CustomFormatter::new(verbose))
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
