//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export.
//!
//! # Usage
//!
//! ```no_run
//! use supportchat_observe::tracing_setup::{init_tracing, LogOptions};
//!
//! // Human-readable logs at `info`, overridable with RUST_LOG
//! init_tracing(LogOptions::new("info")).unwrap();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use std::sync::OnceLock;

/// Stores the OTel tracer provider so it can be shut down cleanly on exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Environment variable selecting the log format (`json` or anything else).
pub const LOG_FORMAT_ENV: &str = "SUPPORTCHAT_LOG_FORMAT";

/// Environment variable enabling OpenTelemetry stdout export (`1`/`true`).
pub const OTEL_ENV: &str = "SUPPORTCHAT_OTEL";

/// Subscriber options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Filter used when `RUST_LOG` is unset, e.g. `"warn"` or `"info,supportchat=debug"`.
    pub default_filter: String,
    /// Emit one JSON object per event instead of human-readable lines.
    pub json: bool,
    /// Bridge spans to OpenTelemetry with a stdout exporter.
    pub otel: bool,
}

impl LogOptions {
    /// Human-readable output, no OTel.
    pub fn new(default_filter: impl Into<String>) -> Self {
        Self {
            default_filter: default_filter.into(),
            json: false,
            otel: false,
        }
    }

    /// Like [`LogOptions::new`], with `json` and `otel` read from
    /// `SUPPORTCHAT_LOG_FORMAT` and `SUPPORTCHAT_OTEL`.
    pub fn from_env(default_filter: impl Into<String>) -> Self {
        Self::from_lookup(default_filter, |key| std::env::var(key).ok())
    }

    fn from_lookup<F>(default_filter: impl Into<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let json = lookup(LOG_FORMAT_ENV)
            .map(|v| v.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let otel = lookup(OTEL_ENV)
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            default_filter: default_filter.into(),
            json,
            otel,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// - Installs a structured `fmt` layer on stderr (JSON when `options.json`)
///   with span close timing, so stdout stays clean for command output.
/// - When `options.otel` is true, additionally bridges tracing spans to
///   OpenTelemetry using a stdout exporter.
/// - Respects `RUST_LOG`, falling back to `options.default_filter`.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(options: LogOptions) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&options.default_filter));

    let fmt_layer = if options.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let otel_layer = if options.otel {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer("supportchat");

        // Store the provider for shutdown and register it globally.
        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);

        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Flush pending traces and shut down the OpenTelemetry tracer provider.
///
/// Safe to call even when OTel was not enabled (no-op in that case).
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: OTel tracer provider shutdown error: {e}");
        }
    }
}
