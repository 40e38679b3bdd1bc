use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inclusive reporting window as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportPeriod {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceTotals {
    pub scheduled: i64,
    pub confirmed: i64,
    pub completed: i64,
    pub no_show: i64,
    pub cancellation_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceReport {
    pub totals: AttendanceTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitTimesReport {
    pub average_days_to_triage: f64,
    pub average_days_to_treatment: f64,
    pub median_queue_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdherenceTotals {
    pub completed_appointments: i64,
    pub symptom_report_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdherencePatients {
    pub with_completed_appointments: i64,
    pub reporting_symptoms: i64,
    pub engaged: i64,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdherenceReport {
    pub totals: AdherenceTotals,
    pub patients: AdherencePatients,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Open,
    Acknowledged,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlertStatusTotals {
    pub open: i64,
    pub acknowledged: i64,
    pub closed: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlertSeverityTotals {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlertTotals {
    pub status: AlertStatusTotals,
    pub severity: AlertSeverityTotals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentAlert {
    pub id: i64,
    pub patient_id: i64,
    pub kind: String,
    pub severity: AlertSeverity,
    pub status: AlertStatus,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlertsReport {
    pub totals: AlertTotals,
    #[serde(default)]
    pub recent: Vec<RecentAlert>,
}

/// A pre-aggregated report, tagged by `kind` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReportData {
    Attendance(AttendanceReport),
    WaitTimes(WaitTimesReport),
    Adherence(AdherenceReport),
    Alerts(AlertsReport),
}

impl ReportData {
    pub fn kind(&self) -> &'static str {
        match self {
            ReportData::Attendance(_) => "attendance",
            ReportData::WaitTimes(_) => "wait-times",
            ReportData::Adherence(_) => "adherence",
            ReportData::Alerts(_) => "alerts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wait_times_kind_is_kebab_case() {
        let report: ReportData = serde_json::from_value(json!({
            "kind": "wait-times",
            "averageDaysToTriage": 1.5,
            "averageDaysToTreatment": 10.0,
            "medianQueueTime": 4.25
        }))
        .unwrap();

        assert_eq!(report.kind(), "wait-times");
        assert!(matches!(report, ReportData::WaitTimes(ref r) if r.median_queue_time == 4.25));
    }

    #[test]
    fn alerts_recent_defaults_to_empty() {
        let report: ReportData = serde_json::from_value(json!({
            "kind": "alerts",
            "totals": {
                "status": { "open": 1, "acknowledged": 2, "closed": 3 },
                "severity": { "low": 1, "medium": 4, "high": 1 }
            }
        }))
        .unwrap();

        let ReportData::Alerts(alerts) = report else {
            panic!("expected alerts report");
        };
        assert!(alerts.recent.is_empty());
    }

    #[test]
    fn recent_alert_reads_snake_case_enums() {
        let item: RecentAlert = serde_json::from_value(json!({
            "id": 7,
            "patientId": 42,
            "kind": "fever",
            "severity": "medium",
            "status": "acknowledged",
            "createdAt": "2026-03-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(item.severity, AlertSeverity::Medium);
        assert_eq!(item.status, AlertStatus::Acknowledged);
    }
}
