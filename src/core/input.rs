use crate::utils::error::{AppError, Result};
use std::io::BufRead;

/// Parses a number typed by the user.
///
/// Accepts `.` or `,` as the decimal separator, a leading sign and exponent
/// notation. Empty input and non-finite values are rejected.
pub fn parse_number(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let separators = trimmed.chars().filter(|c| *c == '.' || *c == ',').count();
    if trimmed.is_empty() || separators > 1 {
        return Err(AppError::invalid_number(Some(input)));
    }

    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::invalid_number(Some(input))),
    }
}

/// Reads one line and parses it. End of input counts as invalid input.
///
/// Bytes that are not UTF-8 are decoded lossily and then fail to parse like
/// any other garbage.
pub fn read_number<R: BufRead>(reader: &mut R) -> Result<f64> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        tracing::debug!("Input closed before a number was entered");
        return Err(AppError::invalid_number(None));
    }
    let line = String::from_utf8_lossy(&bytes);
    tracing::debug!(input = line.trim_end(), "Read number input");
    parse_number(&line)
}

/// Shortest round-trip form with the given decimal separator (`5`, `2,5`).
///
/// Exponents of 15 and above or below -4 switch to `1E+20` / `1E-05` notation;
/// infinities print as `∞`.
pub fn format_number(value: f64, decimal_separator: char) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let text = match scientific.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) if value != 0.0 && (exp >= 15 || exp < -4) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}E{}{:02}", mantissa, sign, exp.abs())
            }
            _ => value.to_string(),
        },
        None => value.to_string(),
    };

    if decimal_separator == '.' {
        text
    } else {
        text.replace('.', decimal_separator.encode_utf8(&mut [0; 4]))
    }
}
