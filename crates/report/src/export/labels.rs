use crate::domain::report::{AlertSeverity, AlertStatus};

/// Portuguese label for an appointment status key. Unknown keys are
/// returned unchanged.
pub fn appointment_status_label(status: &str) -> &str {
    match status {
        "scheduled" => "Agendadas",
        "confirmed" => "Confirmadas",
        "completed" => "Concluídas",
        "no_show" => "Não compareceu",
        "canceled" => "Canceladas",
        other => other,
    }
}

pub fn alert_severity_label(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Low => "Baixa",
        AlertSeverity::Medium => "Média",
        AlertSeverity::High => "Alta",
    }
}

pub fn alert_status_label(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Open => "Aberto",
        AlertStatus::Acknowledged => "Reconhecido",
        AlertStatus::Closed => "Fechado",
    }
}
