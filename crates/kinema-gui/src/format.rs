//! Display formatting helpers for movie metadata values.

/// Format an averaged value with two decimal places.
pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// Format a runtime in minutes for display.
pub fn runtime(minutes: u32) -> String {
    format!("{minutes} min")
}

/// Format an averaged runtime for display.
pub fn avg_runtime(minutes: f64) -> String {
    format!("{} min", fixed2(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed2_rounds_to_two_decimals() {
        assert_eq!(fixed2(103.333_333), "103.33");
        assert_eq!(fixed2(8.65), "8.65");
        assert_eq!(fixed2(0.0), "0.00");
    }
}
