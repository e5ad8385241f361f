use serde::{Deserialize, Serialize};

/// A y-axis tick value (or the selected-sample annotation value) paired with
/// the unit suffix used to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabel {
    pub value: f64,
    pub unit: String,
}

impl ValueLabel {
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Display text with thousands grouping and magnitude-dependent fraction
    /// digits: none above 1000, two for mid-range values, three for small
    /// ones. Trailing fraction zeros are trimmed.
    #[must_use]
    pub fn formatted(&self) -> String {
        let fraction_digits = if self.value > 1000.0 {
            0
        } else if (2.0..=999.0).contains(&self.value) {
            2
        } else {
            3
        };
        format!("{}{}", group_thousands(self.value, fraction_digits), self.unit)
    }
}

fn group_thousands(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let mut text = format!("{value:.max_fraction_digits$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    // Values rounding to zero lose their sign instead of showing "-0".
    if text == "-0" {
        text = "0".to_owned();
    }

    let (int_part, fraction) = match text.split_once('.') {
        Some((int_part, fraction)) => (int_part.to_owned(), Some(fraction.to_owned())),
        None => (text, None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::ValueLabel;

    #[test]
    fn large_values_group_and_drop_fraction() {
        assert_eq!(ValueLabel::new(2659.0, "$").formatted(), "2,659$");
        assert_eq!(ValueLabel::new(1234567.8, "$").formatted(), "1,234,568$");
    }

    #[test]
    fn mid_range_values_keep_two_fraction_digits() {
        assert_eq!(ValueLabel::new(95.5, "$").formatted(), "95.5$");
        assert_eq!(ValueLabel::new(95.556, "$").formatted(), "95.56$");
    }

    #[test]
    fn small_values_keep_three_fraction_digits() {
        assert_eq!(ValueLabel::new(0.12345, "$").formatted(), "0.123$");
        assert_eq!(ValueLabel::new(1.5, "$").formatted(), "1.5$");
    }

    #[test]
    fn negative_values_keep_sign_before_grouping() {
        assert_eq!(ValueLabel::new(-1234.5, "$").formatted(), "-1,234.5$");
    }

    #[test]
    fn values_rounding_to_zero_drop_the_sign() {
        assert_eq!(ValueLabel::new(-1.0e-14, "$").formatted(), "0$");
    }
}
