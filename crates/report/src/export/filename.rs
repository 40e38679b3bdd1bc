use crate::domain::report::ReportPeriod;

pub const REPORT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn normalize_kind(kind: &str) -> String {
    let mut normalized = String::with_capacity(kind.len());

    for c in kind.trim().to_lowercase().chars() {
        let keep = c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_';
        let next = if keep { c } else { '_' };
        if next == '_' && normalized.ends_with('_') {
            continue;
        }
        normalized.push(next);
    }

    normalized.trim_matches('_').to_string()
}

/// `relatorio_{kind}_{start}_{end}.xlsx` with `kind` reduced to
/// `[a-z0-9-_]`.
pub fn build_report_filename(kind: &str, period: &ReportPeriod) -> String {
    format!(
        "relatorio_{}_{}_{}.xlsx",
        normalize_kind(kind),
        period.start,
        period.end
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("attendance", "attendance")]
    #[case("  Wait-Times ", "wait-times")]
    #[case("Relatório Mensal!!", "relat_rio_mensal")]
    #[case("__alerts__", "alerts")]
    #[case("a  /  b", "a_b")]
    #[case("***", "")]
    fn kind_normalization(#[case] kind: &str, #[case] expected: &str) {
        assert_eq!(normalize_kind(kind), expected);
    }

    #[test]
    fn filename_includes_period() {
        let period = ReportPeriod {
            start: "2026-01-01".into(),
            end: "2026-01-31".into(),
        };

        assert_eq!(
            build_report_filename("Adherence", &period),
            "relatorio_adherence_2026-01-01_2026-01-31.xlsx"
        );
    }
}
