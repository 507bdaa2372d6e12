//! Logging and tracing setup.
//!
//! Console logging is always on. If `OTEL_EXPORTER_OTLP_ENDPOINT` is set and
//! the collector answers, traces and logs are also exported over OTLP.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use std::env;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_SERVICE_NAME: &str = "pantry-server";

/// Flushes exporters when dropped. Keep it alive for the life of the process.
pub struct TelemetryGuard {
    otel: Option<OtelProviders>,
}

struct OtelProviders {
    traces: SdkTracerProvider,
    logs: SdkLoggerProvider,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(otel) = self.otel.take() {
            if let Err(e) = otel.traces.shutdown() {
                eprintln!("failed to flush traces: {e}");
            }
            if let Err(e) = otel.logs.shutdown() {
                eprintln!("failed to flush logs: {e}");
            }
        }
    }
}

/// Quick TCP check so an absent collector does not stall every export.
fn collector_reachable(endpoint: &str) -> bool {
    let host_port = endpoint
        .trim_start_matches("http://")
        .trim_start_matches("https://")
        .trim_end_matches('/');

    host_port
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| TcpStream::connect_timeout(&addr, Duration::from_millis(100)).is_ok())
        .unwrap_or(false)
}

fn build_providers(endpoint: &str, service_name: &str) -> anyhow::Result<OtelProviders> {
    let resource = Resource::builder()
        .with_service_name(service_name.to_string())
        .build();

    let trace_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;
    let traces = SdkTracerProvider::builder()
        .with_batch_exporter(trace_exporter)
        .with_resource(resource.clone())
        .build();

    let log_exporter = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;
    let logs = SdkLoggerProvider::builder()
        .with_batch_exporter(log_exporter)
        .with_resource(resource)
        .build();

    Ok(OtelProviders { traces, logs })
}

/// Install the global subscriber. `RUST_LOG` filters; the default is `info`.
pub fn init() -> TelemetryGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let service_name =
        env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());
    let endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

    let mut status = None;
    let otel = match &endpoint {
        Some(endpoint) if collector_reachable(endpoint) => {
            match build_providers(endpoint, &service_name) {
                Ok(providers) => Some(providers),
                Err(e) => {
                    status = Some(format!("OTLP exporter setup failed: {e}"));
                    None
                }
            }
        }
        Some(endpoint) => {
            status = Some(format!(
                "OpenTelemetry endpoint {endpoint} not reachable, using console logging only"
            ));
            None
        }
        None => None,
    };

    let otel_trace_layer = otel.as_ref().map(|p| {
        opentelemetry::global::set_tracer_provider(p.traces.clone());
        tracing_opentelemetry::layer().with_tracer(p.traces.tracer(DEFAULT_SERVICE_NAME))
    });
    let otel_log_layer = otel
        .as_ref()
        .map(|p| OpenTelemetryTracingBridge::new(&p.logs));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(otel_trace_layer)
        .with(otel_log_layer)
        .init();

    match (&otel, &endpoint, status) {
        (Some(_), Some(endpoint), _) => tracing::info!(
            "OpenTelemetry enabled, exporting traces and logs to {} as {}",
            endpoint,
            service_name
        ),
        (_, _, Some(status)) => tracing::warn!("{}", status),
        _ => tracing::debug!("OTEL_EXPORTER_OTLP_ENDPOINT not set, using console logging only"),
    }

    TelemetryGuard { otel }
}
