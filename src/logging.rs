use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Route `tracing` events to the browser console.
///
/// `directive` is an `EnvFilter` string such as `info` or
/// `markbook_app=debug`; an unparsable one falls back to `info`.
pub(crate) fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    // Already installed (e.g. a second mount in tests): keep the first one.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
