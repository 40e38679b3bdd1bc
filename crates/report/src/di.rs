use crate::{
    abstract_trait::DynReportExportService,
    service::{ReportExportService, ReportExportServiceDeps},
};
use prometheus_client::registry::Registry;
use shared::utils::Metrics;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub report_export_service: DynReportExportService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("report_export_service", &"ReportExportService")
            .finish()
    }
}

impl DependenciesInject {
    pub async fn new(metrics: Arc<Mutex<Metrics>>, registry: Arc<Mutex<Registry>>) -> Self {
        let report_export_service = Arc::new(
            ReportExportService::new(ReportExportServiceDeps { metrics, registry }).await,
        ) as DynReportExportService;

        Self {
            report_export_service,
        }
    }
}
