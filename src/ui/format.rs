//! Display formatting for the fixed Russian locale.

use chrono::{Datelike, NaiveDate};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Long date, e.g. "14 января 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Weight without a trailing ".0".
pub fn format_weight(weight: f32) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{:.1}", weight)
    }
}
