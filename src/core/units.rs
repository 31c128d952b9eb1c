/// Threshold at which volumes switch from the base unit to liters.
pub const LITER_THRESHOLD: f64 = 1000.0;

/// Formats a volume for legends, switching to liters at 1000 base units.
///
/// `1500.0, "mL"` becomes `"1.5L"`; `300.0, "mL"` becomes `"300mL"`. Values
/// below the threshold are truncated toward zero.
#[must_use]
pub fn format_volume(magnitude: f64, base_unit: &str) -> String {
    if magnitude >= LITER_THRESHOLD {
        format!("{}L", magnitude / LITER_THRESHOLD)
    } else {
        format!("{}{base_unit}", magnitude.trunc() as i64)
    }
}
