use chrono::{Datelike, Utc};

const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Название месяца по-испански для 1..=12
pub fn month_name_es(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)? as usize;
    MONTHS_ES.get(index).copied()
}

/// Название текущего месяца (UTC)
pub fn current_month_name_es() -> &'static str {
    let now = Utc::now().date_naive();
    month_name_es(now.month()).unwrap_or(MONTHS_ES[0])
}
