use std::{str::FromStr, sync::atomic::AtomicBool};

use tracing::Level;
use tracing_subscriber::{
    filter::{ParseError, Targets},
    fmt::format::FmtSpan,
    EnvFilter, Layer,
};

static IS_TRACING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Targets enabled when `TRACE` is a plain level such as `debug`.
const TARGETS: &[&str] =
    &["have_it_bookkeeper", "have_it_cli", "have_it_fs", "have_it_package_manifest"];

/// Install a tracing subscriber if the `TRACE` environment variable is set.
///
/// `TRACE` is either a level, which applies to every crate of this workspace, or an
/// [`EnvFilter`] directive. An unparsable directive only enables warnings and is reported
/// as one.
pub fn enable_tracing_by_env() {
    let Ok(trace_var) = std::env::var("TRACE") else {
        return
    };

    if !IS_TRACING_ENABLED.swap(true, std::sync::atomic::Ordering::SeqCst) {
        use tracing_subscriber::{fmt, prelude::*};
        let (layer, parse_error) = match common_layer(&trace_var) {
            Ok(layer) => (layer, None),
            Err(error) => (targets_layer(Level::WARN), Some(error)),
        };

        tracing_subscriber::registry()
            .with(layer)
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(true)
                    .with_writer(std::io::stderr)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        if let Some(error) = parse_error {
            tracing::warn!(target: "have_it_cli", %error, %trace_var, "invalid TRACE directive");
        }
        tracing::trace!("enable_tracing_by_env");
    }
}

fn default_level(trace_var: &str) -> Option<Level> {
    Level::from_str(trace_var).ok()
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

fn targets_layer(level: Level) -> BoxedLayer {
    Targets::new().with_targets(TARGETS.iter().map(|target| (*target, level))).boxed()
}

fn common_layer(trace_var: &str) -> Result<BoxedLayer, ParseError> {
    if let Some(default_level) = default_level(trace_var) {
        return Ok(targets_layer(default_level));
    }
    // directive syntax: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives
    EnvFilter::builder().with_regex(true).parse(trace_var).map(|filter| filter.boxed())
}
