use chrono::{Datelike, Days, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Six Sunday-first weeks covering the anchor's month, padded with days
/// from the neighbouring months.
pub fn month_matrix(anchor: NaiveDate) -> [[NaiveDate; 7]; 6] {
    let first_of_month = anchor.with_day(1).unwrap_or(anchor);
    let lead = u64::from(first_of_month.weekday().num_days_from_sunday());
    let start = first_of_month - Days::new(lead);

    std::array::from_fn(|week| {
        std::array::from_fn(|day| start + Days::new((week * 7 + day) as u64))
    })
}

pub fn to_iso_date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses `YYYY-MM-DD`. Anything missing, out of range or not a real
/// calendar date yields `fallback`.
pub fn parse_iso_date(value: Option<&str>, fallback: NaiveDate) -> NaiveDate {
    let Some(value) = value else {
        return fallback;
    };

    let mut parts = value.split('-').map(|p| p.trim().parse::<i64>());

    let (Some(Ok(year)), Some(Ok(month)), Some(Ok(day))) = (parts.next(), parts.next(), parts.next())
    else {
        return fallback;
    };

    if year < 1970 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return fallback;
    }

    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month as u32, day as u32))
        .unwrap_or(fallback)
}
