mod export;

pub use self::export::{DynReportExportService, ExportedReport, ReportExportServiceTrait};
