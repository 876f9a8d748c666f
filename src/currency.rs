// ---------------------------------------------------------------------------
// Local (INR) → EUR conversion and display formatting
// ---------------------------------------------------------------------------

/// Fixed INR → EUR rate applied to every price.
pub const EUR_RATE: f64 = 0.0095;

/// Convert a local-currency amount, rounded to the nearest whole euro.
pub fn convert(local: u64) -> u64 {
    (local as f64 * EUR_RATE).round() as u64
}

/// Group digits by thousands with `,` separators (`1234567` → `1,234,567`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dual-currency label, e.g. `₹10,000 (€95)`.
pub fn format_dual(local: u64) -> String {
    format!(
        "₹{} (€{})",
        group_thousands(local),
        group_thousands(convert(local))
    )
}

/// Round a mean (or any non-negative amount) to whole currency units.
pub fn round_amount(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
