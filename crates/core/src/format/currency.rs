//! Indian-locale currency formatting.
//!
//! Grouping follows the Indian numbering convention: the last three digits
//! form one group, every group above that has two digits (₹1,00,00,000).

/// Currency symbol used throughout the dashboard.
pub const RUPEE: &str = "₹";

/// Format a rupee amount with symbol, Indian grouping, and exactly two
/// fraction digits (half-up at the second decimal).
///
/// Total over all finite inputs; `NaN`/`±∞` produce placeholder text
/// instead of panicking.
#[must_use]
pub fn format_inr(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{RUPEE}NaN");
    }
    if amount.is_infinite() {
        return if amount > 0.0 {
            format!("{RUPEE}∞")
        } else {
            format!("-{RUPEE}∞")
        };
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u128;
    let rupees = cents / 100;
    let paise = cents % 100;
    format!("{sign}{RUPEE}{}.{paise:02}", group_digits(rupees))
}

/// Indian-grouped digits without symbol or forced decimals, matching
/// `toLocaleString('en-IN')`: up to two fraction digits, trailing zeros
/// trimmed. Used for pie labels and saved-portfolio lines.
#[must_use]
pub fn group_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return if amount.is_nan() {
            "NaN".to_string()
        } else if amount > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u128;
    let rupees = cents / 100;
    let paise = cents % 100;
    if paise == 0 {
        format!("{sign}{}", group_digits(rupees))
    } else if paise % 10 == 0 {
        format!("{sign}{}.{}", group_digits(rupees), paise / 10)
    } else {
        format!("{sign}{}.{paise:02}", group_digits(rupees))
    }
}

/// Group an unsigned integer Indian-style: last three digits, then twos.
fn group_digits(n: u128) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}
