use crate::{
    domain::report::{
        AdherenceReport, AlertSeverity, AlertStatus, AlertsReport, AttendanceReport,
        ReportData, ReportPeriod, WaitTimesReport,
    },
    export::{
        format::{format_decimal, format_percent},
        labels::{alert_severity_label, alert_status_label, appointment_status_label},
        workbook::{Cell, RECENT_SHEET, Row, SUMMARY_SHEET, Sheet, Workbook},
    },
};

macro_rules! row {
    () => { Vec::<Cell>::new() };
    ($($cell:expr),+ $(,)?) => { vec![$(Cell::from($cell)),+] };
}

const RECENT_HEADER: [&str; 6] = ["ID", "Paciente", "Tipo", "Severidade", "Status", "Criado em"];

fn book_with_summary(title: &str, period: &ReportPeriod, rows: Vec<Row>) -> Workbook {
    let mut sheet_rows = vec![
        row![title],
        row!["Período inicial", period.start.as_str()],
        row!["Período final", period.end.as_str()],
        row![],
    ];
    sheet_rows.extend(rows);

    let mut workbook = Workbook::default();
    workbook.append_sheet(Sheet::new(SUMMARY_SHEET, sheet_rows));
    workbook
}

pub fn create_attendance_workbook(report: &AttendanceReport, period: &ReportPeriod) -> Workbook {
    let totals = &report.totals;
    let rows = vec![
        row!["Status", "Quantidade"],
        row![appointment_status_label("scheduled"), totals.scheduled],
        row![appointment_status_label("confirmed"), totals.confirmed],
        row![appointment_status_label("completed"), totals.completed],
        row![appointment_status_label("no_show"), totals.no_show],
        row!["Taxa de cancelamento", format_percent(totals.cancellation_rate)],
    ];

    book_with_summary("Relatório de presença", period, rows)
}

pub fn create_wait_times_workbook(report: &WaitTimesReport, period: &ReportPeriod) -> Workbook {
    let rows = vec![
        row!["Métrica", "Dias"],
        row!["Tempo médio até triagem", format_decimal(report.average_days_to_triage)],
        row!["Tempo médio até tratamento", format_decimal(report.average_days_to_treatment)],
        row!["Tempo mediano na fila", format_decimal(report.median_queue_time)],
    ];

    book_with_summary("Relatório de tempo", period, rows)
}

pub fn create_adherence_workbook(report: &AdherenceReport, period: &ReportPeriod) -> Workbook {
    let totals = &report.totals;
    let patients = &report.patients;
    let rows = vec![
        row!["Resumo", "Quantidade"],
        row!["Consultas concluídas", totals.completed_appointments],
        row!["Relatos de sintomas", totals.symptom_report_count],
        row![],
        row!["Pacientes", "Quantidade"],
        row!["Com consultas concluídas", patients.with_completed_appointments],
        row!["Relatando sintomas", patients.reporting_symptoms],
        row!["Engajados (ambos)", patients.engaged],
        row!["Taxa de engajamento", format_percent(patients.engagement_rate)],
    ];

    book_with_summary("Relatório de adesão", period, rows)
}

pub fn create_alerts_workbook(report: &AlertsReport, period: &ReportPeriod) -> Workbook {
    let status = &report.totals.status;
    let severity = &report.totals.severity;
    let rows = vec![
        row!["Status", "Quantidade"],
        row![alert_status_label(AlertStatus::Open), status.open],
        row![alert_status_label(AlertStatus::Acknowledged), status.acknowledged],
        row![alert_status_label(AlertStatus::Closed), status.closed],
        row![],
        row!["Severidade", "Quantidade"],
        row![alert_severity_label(AlertSeverity::Low), severity.low],
        row![alert_severity_label(AlertSeverity::Medium), severity.medium],
        row![alert_severity_label(AlertSeverity::High), severity.high],
    ];

    let mut workbook = book_with_summary("Relatório de alertas", period, rows);

    if !report.recent.is_empty() {
        let mut recent_rows: Vec<Row> = vec![RECENT_HEADER.iter().map(|h| Cell::from(*h)).collect()];
        recent_rows.extend(report.recent.iter().map(|item| {
            row![
                item.id,
                item.patient_id,
                item.kind.as_str(),
                alert_severity_label(item.severity),
                alert_status_label(item.status),
                item.created_at.as_str(),
            ]
        }));
        workbook.append_sheet(Sheet::new(RECENT_SHEET, recent_rows));
    }

    workbook
}

pub fn create_workbook(report: &ReportData, period: &ReportPeriod) -> Workbook {
    match report {
        ReportData::Attendance(r) => create_attendance_workbook(r, period),
        ReportData::WaitTimes(r) => create_wait_times_workbook(r, period),
        ReportData::Adherence(r) => create_adherence_workbook(r, period),
        ReportData::Alerts(r) => create_alerts_workbook(r, period),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{
        AdherencePatients, AdherenceTotals, AlertSeverityTotals, AlertStatusTotals, AlertTotals,
        AttendanceTotals, RecentAlert,
    };

    fn period() -> ReportPeriod {
        ReportPeriod {
            start: "2026-01-01".into(),
            end: "2026-01-31".into(),
        }
    }

    fn text(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }

    fn alerts(recent: Vec<RecentAlert>) -> AlertsReport {
        AlertsReport {
            totals: AlertTotals {
                status: AlertStatusTotals {
                    open: 3,
                    acknowledged: 2,
                    closed: 5,
                },
                severity: AlertSeverityTotals {
                    low: 4,
                    medium: 5,
                    high: 1,
                },
            },
            recent,
        }
    }

    #[test]
    fn summary_sheet_has_title_and_period_header() {
        let report = AttendanceReport {
            totals: AttendanceTotals {
                scheduled: 10,
                confirmed: 8,
                completed: 6,
                no_show: 2,
                cancellation_rate: 0.125,
            },
        };

        let workbook = create_attendance_workbook(&report, &period());

        assert_eq!(workbook.sheets.len(), 1);
        let sheet = &workbook.sheets[0];
        assert_eq!(sheet.name, "Resumo");
        assert_eq!(sheet.rows[0], vec![text("Relatório de presença")]);
        assert_eq!(sheet.rows[1], vec![text("Período inicial"), text("2026-01-01")]);
        assert_eq!(sheet.rows[2], vec![text("Período final"), text("2026-01-31")]);
        assert!(sheet.rows[3].is_empty());
        assert_eq!(sheet.rows[4], vec![text("Status"), text("Quantidade")]);
        assert_eq!(sheet.rows[8], vec![text("Não compareceu"), Cell::Number(2.0)]);
        assert_eq!(sheet.rows[9], vec![text("Taxa de cancelamento"), text("12.50%")]);
    }

    #[test]
    fn wait_times_are_rounded() {
        let report = WaitTimesReport {
            average_days_to_triage: 2.456,
            average_days_to_treatment: f64::NAN,
            median_queue_time: 7.0,
        };

        let workbook = create_wait_times_workbook(&report, &period());
        let rows = &workbook.sheets[0].rows;

        assert_eq!(rows[0], vec![text("Relatório de tempo")]);
        assert_eq!(rows[5], vec![text("Tempo médio até triagem"), Cell::Number(2.46)]);
        assert_eq!(rows[6], vec![text("Tempo médio até tratamento"), Cell::Number(0.0)]);
    }

    #[test]
    fn adherence_has_two_tables() {
        let report = AdherenceReport {
            totals: AdherenceTotals {
                completed_appointments: 40,
                symptom_report_count: 12,
            },
            patients: AdherencePatients {
                with_completed_appointments: 20,
                reporting_symptoms: 9,
                engaged: 7,
                engagement_rate: 0.35,
            },
        };

        let rows = &create_adherence_workbook(&report, &period()).sheets[0].rows;

        assert_eq!(rows[0], vec![text("Relatório de adesão")]);
        assert_eq!(rows[4], vec![text("Resumo"), text("Quantidade")]);
        assert!(rows[7].is_empty());
        assert_eq!(rows[8], vec![text("Pacientes"), text("Quantidade")]);
        assert_eq!(rows[12], vec![text("Taxa de engajamento"), text("35.00%")]);
    }

    #[test]
    fn alerts_without_recent_have_only_summary() {
        let workbook = create_alerts_workbook(&alerts(vec![]), &period());

        assert_eq!(workbook.sheets.len(), 1);
        let rows = &workbook.sheets[0].rows;
        assert_eq!(rows[6], vec![text("Reconhecido"), Cell::Number(2.0)]);
        assert_eq!(rows[11], vec![text("Média"), Cell::Number(5.0)]);
    }

    #[test]
    fn alerts_with_recent_get_second_sheet() {
        let recent = vec![RecentAlert {
            id: 9,
            patient_id: 42,
            kind: "fever".into(),
            severity: AlertSeverity::High,
            status: AlertStatus::Open,
            created_at: "2026-01-15T08:30:00Z".into(),
        }];

        let workbook = create_alerts_workbook(&alerts(recent), &period());

        assert_eq!(workbook.sheets.len(), 2);
        let sheet = workbook.sheet("Recentes").unwrap();
        assert_eq!(
            sheet.rows[0],
            RECENT_HEADER.iter().map(|h| text(h)).collect::<Vec<_>>()
        );
        assert_eq!(
            sheet.rows[1],
            vec![
                Cell::Number(9.0),
                Cell::Number(42.0),
                text("fever"),
                text("Alta"),
                text("Aberto"),
                text("2026-01-15T08:30:00Z"),
            ]
        );
    }

    #[test]
    fn dispatch_matches_kind() {
        let report = ReportData::Alerts(alerts(vec![]));

        let workbook = create_workbook(&report, &period());

        assert_eq!(workbook.sheets[0].rows[0], vec![text("Relatório de alertas")]);
    }
}
