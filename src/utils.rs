use crate::errors::ChiSquareError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(", ");
    }
    s
}

/// Format a number to three decimals, the way result tables display it.
pub fn fmt_num(v: f64) -> String {
    if v.is_nan() {
        "N/A".to_string()
    } else {
        format!("{:.3}", v)
    }
}

pub fn fmt_vec_output(v: &[f64]) -> String {
    v.iter().map(|n| fmt_num(*n)).collect::<Vec<_>>().join(", ")
}

/// Parse a count typed into a number field.
///
/// Empty, negative or otherwise invalid input is coerced to 0 rather than
/// rejected. An optional `+` sign and leading digits are accepted, so
/// `"+5"` reads as 5 and `"12abc"` as 12.
pub fn coerce_count(input: &str) -> u64 {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = match trimmed.find(|c: char| !c.is_ascii_digit()) {
        Some(0) => return 0,
        Some(end) => &trimmed[..end],
        None => trimmed,
    };
    digits.parse().unwrap_or(0)
}

/// Parse an optional whole number. Empty input means "not entered yet".
pub fn parse_optional_int(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

// Validation
pub fn validate_positive_float_parameter(value: f64, parameter: &str) -> Result<(), ChiSquareError> {
    if value.is_nan() || value <= 0.0 {
        Err(ChiSquareError::InvalidParameter(
            parameter.to_string(),
            "positive real value".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

pub fn validate_float_parameter(value: f64, min: f64, max: f64, parameter: &str) -> Result<(), ChiSquareError> {
    if value.is_nan() || value < min || max < value {
        let ex_msg = format!("real value within range {} and {}", min, max);
        Err(ChiSquareError::InvalidParameter(
            parameter.to_string(),
            ex_msg,
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

pub fn validate_usize_parameter(value: usize, min: usize, max: usize, parameter: &str) -> Result<(), ChiSquareError> {
    if value < min || max < value {
        let ex_msg = format!("integer within range {} and {}", min, max);
        Err(ChiSquareError::InvalidParameter(
            parameter.to_string(),
            ex_msg,
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}
