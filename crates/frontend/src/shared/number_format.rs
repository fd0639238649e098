//! Форматирование чисел для виджетов дашборда
//!
//! Округление как у `Number.prototype.toFixed`: точная середина уходит от нуля
//! (0.125 -> "0.13"), остальное по точному двоичному значению (1.005 -> "1.00").

use rust_decimal::{Decimal, RoundingStrategy};

/// Значение, которое показывается вместо отсутствующего или нечислового поля
pub const NOT_AVAILABLE: &str = "—";

/// Форматирует число с фиксированным количеством знаков после точки, без разделителя тысяч
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_fixed;
///
/// let formatted = format_fixed(12.5, 2);
/// assert_eq!(formatted, "12.50");
/// ```
pub fn format_fixed(value: f64, decimals: u8) -> String {
    // -0.0 печатается как "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    let prec = decimals as usize;

    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.prec$}", rounded, prec = prec)
        }
        // Вне диапазона Decimal (|x| > 7.9e28)
        None => format!("{:.prec$}", value, prec = prec),
    }
}

/// Два знака после точки; `None` и не конечные значения дают [`NOT_AVAILABLE`]
pub fn format_optional_2(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_fixed(v, 2),
        _ => NOT_AVAILABLE.to_string(),
    }
}
