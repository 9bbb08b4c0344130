//! OpenTelemetry metrics initialization.

#[cfg(feature = "metrics")]
use opentelemetry::{KeyValue, global};
#[cfg(feature = "metrics")]
use opentelemetry_otlp::{MetricExporter as OtlpExporter, WithExportConfig};
#[cfg(feature = "metrics")]
use opentelemetry_sdk::{
    Resource,
    metrics::{PeriodicReader, SdkMeterProvider},
};
#[cfg(feature = "metrics")]
use opentelemetry_stdout::MetricExporter as StdoutExporter;
#[cfg(feature = "metrics")]
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Initialize OpenTelemetry metrics export.
///
/// `OTEL_EXPORTER` selects the exporter:
/// - `"otlp"` -> OTLP over HTTP to `OTEL_EXPORTER_OTLP_ENDPOINT`
///   (default `http://localhost:4318`)
/// - `"stdout"` or unset -> stdout exporter
///
/// When the `metrics` feature is disabled this is a no-op.
#[instrument(skip_all, fields(service_name))]
pub fn init_observability(
    service_name: &'static str,
    export_interval_secs: u64,
) -> Result<(), String> {
    #[cfg(not(feature = "metrics"))]
    {
        let _ = export_interval_secs;
        info!(
            service_name = service_name,
            "Metrics feature disabled - skipping metrics initialization"
        );
        Ok(())
    }

    #[cfg(feature = "metrics")]
    {
        info!(
            service_name = service_name,
            export_interval_secs = export_interval_secs,
            "Initializing OpenTelemetry metrics"
        );

        let resource = Resource::builder_empty()
            .with_attributes([KeyValue::new("service.name", service_name)])
            .build();

        let exporter_type = std::env::var("OTEL_EXPORTER").unwrap_or_else(|_| "stdout".to_string());

        let meter_provider = match exporter_type.as_str() {
            "otlp" => {
                let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                    .unwrap_or_else(|_| "http://localhost:4318".to_string());
                info!(endpoint = %endpoint, "Using OTLP metrics exporter");

                let exporter = OtlpExporter::builder()
                    .with_http()
                    .with_endpoint(&endpoint)
                    .with_timeout(Duration::from_secs(10))
                    .build()
                    .map_err(|e| {
                        let msg = format!("Failed to create OTLP exporter: {}", e);
                        warn!(%msg, "OTLP exporter creation failed");
                        msg
                    })?;

                let reader = PeriodicReader::builder(exporter)
                    .with_interval(Duration::from_secs(export_interval_secs))
                    .build();

                SdkMeterProvider::builder()
                    .with_resource(resource)
                    .with_reader(reader)
                    .build()
            }
            _ => {
                info!("Using stdout metrics exporter");
                let reader = PeriodicReader::builder(StdoutExporter::default())
                    .with_interval(Duration::from_secs(export_interval_secs))
                    .build();

                SdkMeterProvider::builder()
                    .with_resource(resource)
                    .with_reader(reader)
                    .build()
            }
        };

        global::set_meter_provider(meter_provider);
        info!(
            service_name = service_name,
            "Meter provider registered globally"
        );

        Ok(())
    }
}

/// Shutdown metrics provider gracefully.
#[instrument]
pub fn shutdown_observability() {
    // Meter provider shutdown happens automatically on drop
    info!("Shutting down OpenTelemetry metrics provider");
}
