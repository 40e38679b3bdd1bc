use crate::{
    abstract_trait::{ExportedReport, ReportExportServiceTrait},
    domain::requests::export::ExportReportRequest,
    export::{REPORT_MIME_TYPE, build_report_filename, create_workbook, write_workbook_to_buffer},
};
use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info};

pub struct ReportExportServiceDeps {
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

#[derive(Clone)]
pub struct ReportExportService {
    metrics: Arc<Mutex<Metrics>>,
}

impl ReportExportService {
    pub async fn new(deps: ReportExportServiceDeps) -> Self {
        let ReportExportServiceDeps { metrics, registry } = deps;

        metrics.lock().await.register(
            &mut *registry.lock().await,
            "report_export_service",
            "ReportExportService",
        );

        Self { metrics }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("report-export-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    async fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.lock().await.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[async_trait]
impl ReportExportServiceTrait for ReportExportService {
    async fn export(&self, request: &ExportReportRequest) -> Result<ExportedReport, ServiceError> {
        info!(
            "📊 Exporting {} report | Period: {} to {}",
            request.report.kind(),
            request.period.start,
            request.period.end
        );

        let method = Method::Post;
        let tracing_ctx = self.start_tracing(
            "ExportReport",
            vec![
                KeyValue::new("component", "report"),
                KeyValue::new("report.kind", request.report.kind()),
            ],
        );

        let workbook = create_workbook(&request.report, &request.period);

        let bytes = match write_workbook_to_buffer(&workbook) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.complete_tracing(&tracing_ctx, method, false, &e.to_string())
                    .await;
                return Err(e);
            }
        };

        let filename = build_report_filename(&request.kind, &request.period);

        self.complete_tracing(
            &tracing_ctx,
            method,
            true,
            &format!("Exported {filename} ({} bytes)", bytes.len()),
        )
        .await;

        Ok(ExportedReport {
            filename,
            mime_type: REPORT_MIME_TYPE,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{
        AlertSeverityTotals, AlertStatusTotals, AlertTotals, AlertsReport, ReportData,
        ReportPeriod,
    };
    use prometheus_client::encoding::text::encode;

    async fn service_with_registry() -> (ReportExportService, Arc<Mutex<Registry>>) {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let service = ReportExportService::new(ReportExportServiceDeps {
            metrics: Arc::new(Mutex::new(Metrics::new())),
            registry: registry.clone(),
        })
        .await;
        (service, registry)
    }

    fn request() -> ExportReportRequest {
        ExportReportRequest {
            kind: "Alerts".into(),
            period: ReportPeriod {
                start: "2026-02-01".into(),
                end: "2026-02-28".into(),
            },
            report: ReportData::Alerts(AlertsReport {
                totals: AlertTotals {
                    status: AlertStatusTotals {
                        open: 1,
                        acknowledged: 0,
                        closed: 0,
                    },
                    severity: AlertSeverityTotals {
                        low: 1,
                        medium: 0,
                        high: 0,
                    },
                },
                recent: vec![],
            }),
        }
    }

    #[tokio::test]
    async fn export_returns_named_xlsx() {
        let (service, _) = service_with_registry().await;

        let exported = service.export(&request()).await.unwrap();

        assert_eq!(
            exported.filename,
            "relatorio_alerts_2026-02-01_2026-02-28.xlsx"
        );
        assert_eq!(exported.mime_type, REPORT_MIME_TYPE);
        assert!(exported.bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn export_is_counted() {
        let (service, registry) = service_with_registry().await;

        service.export(&request()).await.unwrap();

        let mut buffer = String::new();
        encode(&mut buffer, &*registry.lock().await).unwrap();
        assert!(buffer.contains("report_export_service_request_counter_total"));
        assert!(buffer.contains("status=\"Success\""));
    }
}
