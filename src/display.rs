use crate::design::{ComponentKind, ComponentValue};

// ---------------------------------------------------------------------------
// Engineering notation
// ---------------------------------------------------------------------------

/// Smallest value (F or H) considered buildable with discrete parts.
pub const PLAUSIBLE_MIN: f64 = 1e-12;
/// Largest value (F or H) considered buildable with discrete parts.
pub const PLAUSIBLE_MAX: f64 = 1e-3;

/// Scale `value` into the p/n/u/m range and return the matching prefix.
/// Values of 1 or more (and zero or non-finite values) are returned as-is.
pub fn engineering(value: f64) -> (f64, &'static str) {
    let magnitude = value.abs();
    if magnitude == 0.0 || magnitude >= 1.0 || !magnitude.is_finite() {
        (value, "")
    } else if magnitude < 1e-9 {
        (value * 1e12, "p")
    } else if magnitude < 1e-6 {
        (value * 1e9, "n")
    } else if magnitude < 1e-3 {
        (value * 1e6, "u")
    } else {
        (value * 1e3, "m")
    }
}

/// Unit symbol for a designator, from its first letter (`C` → F, `L` → H).
pub fn unit_for(designator: &str) -> Option<&'static str> {
    ComponentKind::from_designator(designator).map(ComponentKind::unit)
}

/// Whether a value falls inside [1 pF, 1 mF] or [1 pH, 1 mH].
pub fn is_plausible(component: &ComponentValue) -> bool {
    (PLAUSIBLE_MIN..=PLAUSIBLE_MAX).contains(&component.value)
}

/// Value with prefix and unit, e.g. `6.366 nF`.
pub fn format_value(component: &ComponentValue) -> String {
    let (scaled, prefix) = engineering(component.value);
    format!("{scaled:.3} {prefix}{}", component.kind().unit())
}

/// One output line, e.g. `C1 = 6.366 nF`, flagged when implausible.
pub fn format_component(component: &ComponentValue) -> String {
    let mut line = format!("{} = {}", component.designator, format_value(component));
    if !is_plausible(component) {
        line.push_str(" (implausible)");
    }
    line
}
