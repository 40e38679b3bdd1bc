use crate::domain::requests::export::ExportReportRequest;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynReportExportService = Arc<dyn ReportExportServiceTrait + Send + Sync>;

#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait ReportExportServiceTrait {
    async fn export(&self, request: &ExportReportRequest) -> Result<ExportedReport, ServiceError>;
}
