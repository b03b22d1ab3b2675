//! Rupee amounts
//!
//! Prices are whole rupees (`u64`). Display strings use Indian digit
//! grouping: the last three digits, then groups of two (`₹2,35,000`).

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

pub const RUPEE: char = '₹';

/// Largest accepted price (one lakh crore rupees)
pub const MAX_PRICE: u64 = 1_000_000_000_000;

/// Format whole rupees with Indian digit grouping, e.g. `₹10,000`.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + 8);
    out.push(RUPEE);

    if digits.len() <= 3 {
        out.push_str(&digits);
        return out;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    // Leading group may be one or two digits
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        // ASCII digits only
        out.push_str(std::str::from_utf8(pair).unwrap_or_default());
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Parse a display price such as `"₹10,000"`, `"10000"`, `"₹20K"`, `"1.5L"`
/// or `"Free"` into whole rupees.
///
/// The number part is plain decimal digits with at most one `.`; exponents,
/// signs and amounts above [`MAX_PRICE`] are rejected.
pub fn parse_inr(text: &str) -> Option<u64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != RUPEE && *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }
    if cleaned.eq_ignore_ascii_case("free") {
        return Some(0);
    }

    let (number, multiplier) = match cleaned.chars().last() {
        Some('k' | 'K') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('l' | 'L') => (&cleaned[..cleaned.len() - 1], 100_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    if !is_plain_decimal(number) {
        return None;
    }
    let value: f64 = number.parse().ok()?;
    to_whole_rupees(value * multiplier)
}

fn is_plain_decimal(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_digit() || c == '.')
        && s.matches('.').count() <= 1
}

/// Round to whole rupees; `None` for negative, non-finite or oversized amounts
fn to_whole_rupees(value: f64) -> Option<u64> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded < 0.0 || rounded > MAX_PRICE as f64 {
        return None;
    }
    Some(rounded as u64)
}

/// A price as it arrives on the wire: either a JSON number or a display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Amount(f64),
    Text(String),
}

impl PriceInput {
    /// Convert to whole rupees, rejecting negative, oversized or unparseable input.
    pub fn to_rupees(&self) -> AppResult<u64> {
        let parsed = match self {
            PriceInput::Amount(v) => to_whole_rupees(*v),
            PriceInput::Text(s) => parse_inr(s),
        };
        parsed.ok_or_else(|| {
            AppError::new(ErrorCode::InvalidPrice).with_detail("price", self.to_string())
        })
    }
}

impl std::fmt::Display for PriceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceInput::Amount(v) => write!(f, "{v}"),
            PriceInput::Text(s) => f.write_str(s),
        }
    }
}

/// Serde helper for stored tiers whose price may be a number or a display string.
pub fn deserialize_price<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let input = PriceInput::deserialize(deserializer)?;
    input
        .to_rupees()
        .map_err(|e| serde::de::Error::custom(e.message))
}
