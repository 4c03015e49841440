//! Output-boundary rounding. Intermediate math stays unrounded.

/// Round a float to n decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Money: 2 decimal places.
#[inline]
pub fn money(value: f64) -> f64 {
    round_to(value, 2)
}

/// Feeding amounts (cups, cans): 2 decimal places.
#[inline]
pub fn amount(value: f64) -> f64 {
    round_to(value, 2)
}

/// Energies: whole kcal.
#[inline]
pub fn kcal(value: f64) -> f64 {
    value.round()
}

/// Percentages: 1 decimal place.
#[inline]
pub fn percent(value: f64) -> f64 {
    round_to(value, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(1.235001, 2), 1.24);
        assert_eq!(round_to(-2.55, 0), -3.0);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(money(12.345678), 12.35);
        assert_eq!(amount(0.7499999), 0.75);
        assert_eq!(kcal(260.6), 261.0);
        assert_eq!(percent(-3.333), -3.3);
    }
}
