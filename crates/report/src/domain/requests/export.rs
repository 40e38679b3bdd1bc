use crate::domain::report::{ReportData, ReportPeriod};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const ISO_DATE: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExportReportRequest {
    #[validate(length(min = 1, max = 64, message = "Informe o tipo de relatório"))]
    pub kind: String,

    #[validate(custom(function = "validate_period"))]
    pub period: ReportPeriod,

    pub report: ReportData,
}

fn validate_period(period: &ReportPeriod) -> Result<(), ValidationError> {
    // Only the canonical spelling is accepted; the raw strings end up in the download filename.
    let parse = |value: &str| {
        NaiveDate::parse_from_str(value, ISO_DATE)
            .ok()
            .filter(|date| date.format(ISO_DATE).to_string() == value)
    };

    let (Some(start), Some(end)) = (parse(&period.start), parse(&period.end)) else {
        return Err(ValidationError::new("period")
            .with_message("As datas devem estar no formato AAAA-MM-DD".into()));
    };

    if start > end {
        return Err(ValidationError::new("period")
            .with_message("A data inicial deve ser anterior à data final".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn period(start: &str, end: &str) -> ReportPeriod {
        ReportPeriod {
            start: start.into(),
            end: end.into(),
        }
    }

    #[rstest]
    #[case("2026-01-01", "2026-01-31", true)]
    #[case("2026-01-31", "2026-01-31", true)]
    #[case("2026-02-01", "2026-01-31", false)]
    #[case("2026-02-30", "2026-03-01", false)]
    #[case("01/02/2026", "2026-03-01", false)]
    #[case("\n2026-01-01", "2026-01-31", false)]
    #[case("2026-01-01", "2026-01-31 ", false)]
    #[case("2026-1-5", "2026-01-31", false)]
    fn period_rules(#[case] start: &str, #[case] end: &str, #[case] ok: bool) {
        assert_eq!(validate_period(&period(start, end)).is_ok(), ok);
    }
}
