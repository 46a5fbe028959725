//! Форматирование чисел в pt-BR для дашборда целей.
//!
//! Display helpers render values the way the browser's `pt-BR` locale does
//! (`R$ 69.634,24`, `3.000`, `19,88%`). The `parse_*` helpers are the lenient
//! inverse used by the edit form: they never fail and fall back to `0`.

/// Символ валюты BRL
pub const CURRENCY_SYMBOL: &str = "R$";

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_MARK: char = ',';
const NBSP: char = '\u{00a0}';

/// Вставляет разделитель тысяч в строку из ASCII-цифр
///
/// ```
/// use contracts::shared::number_format::group_thousands;
/// assert_eq!(group_thousands("1234567"), "1.234.567");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(THOUSANDS_SEPARATOR);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Only the ASCII digits of `input`, in order.
fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric value of every ASCII digit in `input`, read left to right.
///
/// Saturates at `f64::MAX` so very long inputs stay finite.
fn digits_value(input: &str) -> f64 {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0.0, |acc, d| (acc * 10.0 + f64::from(d)).min(f64::MAX))
}

/// Returns true if `input` contains at least one ASCII digit.
pub fn has_digits(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_digit())
}

/// Formats a non-negative amount given as its digits in cents.
///
/// Works on the digit string itself, so no length is too long:
/// `"6963424"` becomes `R$ 69.634,24`.
pub fn format_currency_digits(cent_digits: &str) -> String {
    let digits = digits_only(cent_digits);
    let padded = format!("{:0>3}", digits.trim_start_matches('0'));
    let (int_part, cents) = padded.split_at(padded.len() - 2);
    format!(
        "{}{}{}{}{}",
        CURRENCY_SYMBOL,
        NBSP,
        group_thousands(int_part),
        DECIMAL_MARK,
        cents
    )
}

/// Formats a non-negative whole count given as its digits.
pub fn format_count_digits(digits: &str) -> String {
    let digits = digits_only(digits);
    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        trimmed => group_thousands(trimmed),
    }
}

/// Форматирует сумму в BRL: `R$` + NBSP, целая часть с разделителями, два знака
///
/// Non-finite input counts as zero.
///
/// ```
/// use contracts::shared::number_format::format_currency;
/// assert_eq!(format_currency(69634.24), "R$\u{a0}69.634,24");
/// ```
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cent_digits = format!("{:.2}", value.abs()).replace('.', "");
    let formatted = format_currency_digits(&cent_digits);
    if value < 0.0 && has_nonzero_digit(&cent_digits) {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Форматирует целое количество с разделителями тысяч
pub fn format_count(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let digits = format!("{:.0}", value.abs());
    let formatted = format_count_digits(&digits);
    if value < 0.0 && has_nonzero_digit(&digits) {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

fn has_nonzero_digit(digits: &str) -> bool {
    digits.chars().any(|c| matches!(c, '1'..='9'))
}

/// Plain decimal with a comma as decimal mark, shortest representation.
pub fn format_share(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    value.to_string().replace('.', ",")
}

/// Fixed number of decimals with a comma as decimal mark.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals).replace('.', ",")
}

/// Percentage for display, e.g. `19,88%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_fixed(value, 2))
}

/// Inverse of [`format_currency`]: the digits are an amount in cents.
///
/// Where the decimal mark sits is irrelevant, only the digits count.
pub fn parse_currency(input: &str) -> f64 {
    digits_value(input) / 100.0
}

/// Inverse of [`format_count`]: every digit, separators ignored.
pub fn parse_count(input: &str) -> f64 {
    digits_value(input)
}

/// Reads a comma-decimal number the way a browser's `parseFloat` would.
///
/// The first comma becomes a decimal point and the longest numeric prefix
/// is parsed, so mid-typing states like `"19,"` still read as `19`.
/// Anything non-numeric yields `0`.
pub fn parse_share(input: &str) -> f64 {
    let normalized = input.trim_start().replacen(',', ".", 1);
    let prefix_len = numeric_prefix_len(&normalized);
    normalized[..prefix_len]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Length in bytes of the `[+-]?digits[.digits][e[+-]?digits]` prefix.
///
/// The exponent only counts when at least one digit follows it, as in
/// `parseFloat("1e")`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_dot = false;
    let mut mantissa_digits = 0;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {
                mantissa_digits += 1;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if mantissa_digits == 0 || !matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        return end;
    }
    let mut exp_end = end + 1;
    if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
        exp_end += 1;
    }
    let exp_digits_start = exp_end;
    while matches!(bytes.get(exp_end), Some(b'0'..=b'9')) {
        exp_end += 1;
    }
    if exp_end > exp_digits_start {
        exp_end
    } else {
        end
    }
}
