//! Logging setup
//!
//! `RUST_LOG` picks the filter (default `info`). The web build has no system
//! clock and no terminal, so its lines carry neither timestamps nor colors:
//! asking `SystemTime` for the time traps on wasm32-unknown-unknown.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Output options that depend on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Format {
    timestamps: bool,
    ansi: bool,
}

impl Format {
    fn for_target() -> Self {
        let native = !cfg!(target_arch = "wasm32");
        Self { timestamps: native, ansi: native }
    }
}

/// Install the global subscriber. Call once, before the first log line.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = build(filter, Format::for_target(), std::io::stdout);
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging already initialized: {}", e);
    }
}

fn build<W>(filter: EnvFilter, format: Format, writer: W) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(format.ansi)
        .with_writer(writer)
        .compact();

    if format.timestamps {
        Box::new(builder.finish())
    } else {
        Box::new(builder.without_time().finish())
    }
}
