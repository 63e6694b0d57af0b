use std::fmt;

/// Loyalty points are whole numbers; one point per currency unit spent.
pub type Points = i64;

/// Convert a purchase amount into points by rounding half away from zero.
/// Example: 13.95 -> 14, 2.20 -> 2, 2.5 -> 3
pub fn points_for_amount(amount: f64) -> Result<Points, AmountError> {
    if !amount.is_finite() {
        return Err(AmountError::NotFinite);
    }
    if amount < 0.0 {
        return Err(AmountError::Negative);
    }

    let rounded = amount.round();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if rounded >= i64::MAX as f64 {
        return Err(AmountError::TooLarge);
    }
    Ok(rounded as Points)
}

/// Parse a purchase amount typed by a user, e.g. "13.95" or "20".
pub fn parse_amount(input: &str) -> Result<f64, AmountError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| AmountError::InvalidFormat)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    InvalidFormat,
    NotFinite,
    Negative,
    TooLarge,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidFormat => write!(f, "not a valid number"),
            AmountError::NotFinite => write!(f, "amount must be a finite number"),
            AmountError::Negative => write!(f, "amount must not be negative"),
            AmountError::TooLarge => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for AmountError {}
