/// Text shown in place of a value that is absent or cannot be displayed.
pub const ABSENT: &str = "-";

/// Display precision for drivetrain results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Number of decimal places rendered for numeric values and ratios.
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { decimals: 3 }
    }
}

impl DisplayConfig {
    /// Renders `value` with a fixed number of decimals, or [`ABSENT`].
    #[must_use]
    pub fn fixed(&self, value: Option<f64>) -> String {
        match value {
            Some(value) => format!("{:.*}", self.decimals, value),
            None => ABSENT.to_string(),
        }
    }

    /// Renders `value` like [`fixed`](Self::fixed), then drops trailing zeros
    /// and a trailing decimal point.
    pub(super) fn trimmed(&self, value: f64) -> String {
        let text = format!("{:.*}", self.decimals, value);
        if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_precision() {
        let config = DisplayConfig::default();
        assert_eq!(config.fixed(Some(933.333_333)), "933.333");
        assert_eq!(config.fixed(Some(10.0)), "10.000");
        assert_eq!(config.fixed(None), "-");

        let coarse = DisplayConfig { decimals: 1 };
        assert_eq!(coarse.fixed(Some(8.796_46)), "8.8");
    }

    #[test]
    fn trimming() {
        let config = DisplayConfig::default();
        assert_eq!(config.trimmed(1.5), "1.5");
        assert_eq!(config.trimmed(10.0), "10");
        assert_eq!(config.trimmed(1000.0), "1000");
        assert_eq!(config.trimmed(2.345_6), "2.346");

        // Without a decimal point, zeros are significant.
        let whole = DisplayConfig { decimals: 0 };
        assert_eq!(whole.trimmed(10.0), "10");
    }
}
