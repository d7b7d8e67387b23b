//! Price display.
//!
//! Prices are stored raw (`f64`) and only grouped for display: the integer part
//! gets thousands separators, the fraction keeps at most three digits with
//! trailing zeros dropped.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

/// Digit grouping convention for the integer part of a price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitGrouping {
    /// Groups of three: `1,234,567`.
    #[default]
    Western,
    /// Last three, then groups of two: `12,34,567`.
    Indian,
}

impl FromStr for DigitGrouping {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "western" => Ok(Self::Western),
            "indian" => Ok(Self::Indian),
            other => Err(DomainError::validation(format!(
                "digit grouping must be one of: western, indian (got {other:?})"
            ))),
        }
    }
}

/// How prices are rendered in the grid, detail panel and admin table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub symbol: String,
    pub grouping: DigitGrouping,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            grouping: DigitGrouping::Western,
        }
    }
}

impl PriceFormat {
    pub fn new(symbol: impl Into<String>, grouping: DigitGrouping) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
        }
    }

    /// Currency symbol followed by the grouped number.
    pub fn format(&self, price: f64) -> String {
        format!("{}{}", self.symbol, self.format_number(price))
    }

    pub fn format_number(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value < 0.0 { "-∞" } else { "∞" }.to_string();
        }

        let rounded = format!("{:.3}", value.abs());
        let (int_part, frac_part) = rounded
            .split_once('.')
            .unwrap_or((rounded.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(rounded.len() + 8);
        if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.grouping));
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}

/// Insert `,` separators into a run of ASCII digits.
pub fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        DigitGrouping::Western => 3,
        DigitGrouping::Indian => 2,
    };

    let mut groups = vec![tail];
    let mut rest = head;
    while rest.len() > step {
        let (left, right) = rest.split_at(rest.len() - step);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn western() -> PriceFormat {
        PriceFormat::default()
    }

    fn indian() -> PriceFormat {
        PriceFormat::new("₹", DigitGrouping::Indian)
    }

    #[test]
    fn groups_whole_prices() {
        assert_eq!(western().format(19999.0), "₹19,999");
        assert_eq!(western().format(999.0), "₹999");
        assert_eq!(western().format(1234567.0), "₹1,234,567");
        assert_eq!(western().format(0.0), "₹0");
    }

    #[test]
    fn indian_grouping_uses_lakh_separators() {
        assert_eq!(indian().format(1234567.0), "₹12,34,567");
        assert_eq!(indian().format(100000.0), "₹1,00,000");
        assert_eq!(indian().format(19999.0), "₹19,999");
    }

    #[test]
    fn keeps_at_most_three_fraction_digits() {
        assert_eq!(western().format(19999.5), "₹19,999.5");
        assert_eq!(western().format(0.1234), "₹0.123");
        assert_eq!(western().format(10.0006), "₹10.001");
        assert_eq!(western().format(10.000), "₹10");
    }

    #[test]
    fn negative_and_non_finite() {
        assert_eq!(western().format(-1500.0), "₹-1,500");
        assert_eq!(western().format(-0.0001), "₹0");
        assert_eq!(western().format(f64::NAN), "₹NaN");
        assert_eq!(western().format(f64::INFINITY), "₹∞");
    }

    #[test]
    fn parses_grouping_names() {
        assert_eq!("Indian".parse::<DigitGrouping>().unwrap(), DigitGrouping::Indian);
        assert_eq!(" western ".parse::<DigitGrouping>().unwrap(), DigitGrouping::Western);
        assert!(matches!(
            "metric".parse::<DigitGrouping>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: grouping only inserts separators, never changes digits.
            #[test]
            fn grouping_preserves_digits(n in 0u64..10_000_000_000_000) {
                let digits = n.to_string();
                for grouping in [DigitGrouping::Western, DigitGrouping::Indian] {
                    let grouped = group_digits(&digits, grouping);
                    prop_assert_eq!(grouped.replace(',', ""), digits.clone());
                }
            }

            /// Property: western groups after the first are exactly three digits.
            #[test]
            fn western_groups_are_three_wide(n in 0u64..10_000_000_000_000) {
                let grouped = group_digits(&n.to_string(), DigitGrouping::Western);
                let groups: Vec<&str> = grouped.split(',').collect();
                prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
                for group in &groups[1..] {
                    prop_assert_eq!(group.len(), 3);
                }
            }

            /// Property: indian groups are two wide except the last three.
            #[test]
            fn indian_groups_are_two_then_three(n in 0u64..10_000_000_000_000) {
                let grouped = group_digits(&n.to_string(), DigitGrouping::Indian);
                let groups: Vec<&str> = grouped.split(',').collect();
                if groups.len() > 1 {
                    prop_assert_eq!(groups[groups.len() - 1].len(), 3);
                    for group in &groups[1..groups.len() - 1] {
                        prop_assert_eq!(group.len(), 2);
                    }
                    prop_assert!(groups[0].len() <= 2);
                }
            }
        }
    }
}
