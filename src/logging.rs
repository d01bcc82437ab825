use std::{fmt::Result as FmtResult, io, path::Path};

use time::{format_description::FormatItem, macros::format_description};
use tracing::{metadata::LevelFilter, Event, Subscriber};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling,
};
use tracing_subscriber::{
    fmt::{
        format::Writer,
        time::{FormatTime, UtcTime},
        FmtContext, FormatEvent, FormatFields, Layer,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer as _,
};

/// Logs are written to stderr so that stdout only carries the JSON document.
///
/// If `log_dir` is given, a daily rolling log file is written there as well.
pub fn init(quiet: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let formatter = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    let stderr_layer = Layer::default()
        .event_format(EventFormat::new(formatter, false))
        .with_writer(io::stderr);

    let stderr_filter = if quiet {
        EnvFilter::default().add_directive(LevelFilter::ERROR.into())
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let file_appender = rolling::daily(dir, "steam-dump.log");
            let (file_writer, guard) = NonBlocking::new(file_appender);

            let file_filter = EnvFilter::builder()
                .with_default_directive(LevelFilter::DEBUG.into())
                .from_env_lossy();

            let file_layer = Layer::default()
                .event_format(EventFormat::new(formatter, true))
                .with_writer(file_writer)
                .with_filter(file_filter);

            (Some(file_layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(stderr_filter))
        .with(file_layer)
        .init();

    guard
}

/// Timestamp and level, followed by the source location if enabled.
struct EventFormat<'f> {
    timer: UtcTime<&'f [FormatItem<'f>]>,
    with_location: bool,
}

impl<'f> EventFormat<'f> {
    fn new(formatter: &'f [FormatItem<'f>], with_location: bool) -> Self {
        Self {
            timer: UtcTime::new(formatter),
            with_location,
        }
    }
}

impl<S, N> FormatEvent<S, N> for EventFormat<'_>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> FmtResult {
        self.timer.format_time(&mut writer)?;
        let metadata = event.metadata();

        write!(writer, " {:>5} ", metadata.level())?;

        if self.with_location {
            write!(
                writer,
                "[{}:{}] ",
                metadata.file().unwrap_or_else(|| metadata.target()),
                metadata.line().unwrap_or(0),
            )?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
