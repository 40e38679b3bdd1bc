//! Turns pre-aggregated reports into labeled spreadsheets.

mod builders;
mod filename;
mod format;
mod labels;
mod workbook;
mod writer;

pub use self::builders::{
    create_adherence_workbook, create_alerts_workbook, create_attendance_workbook,
    create_wait_times_workbook, create_workbook,
};
pub use self::filename::{REPORT_MIME_TYPE, build_report_filename};
pub use self::format::{format_decimal, format_percent};
pub use self::labels::{alert_severity_label, alert_status_label, appointment_status_label};
pub use self::workbook::{Cell, RECENT_SHEET, Row, SUMMARY_SHEET, Sheet, Workbook};
pub use self::writer::write_workbook_to_buffer;
