mod export;

pub use self::export::{ReportExportService, ReportExportServiceDeps};
