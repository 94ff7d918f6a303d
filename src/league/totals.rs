//! Court cost totals
//!
//! Each court table lists the referee fees paid by the home and away teams
//! and the fee paid to the referee. The footer shows the three sums and the
//! league's profit; it is recalculated from the inputs on every edit.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("leading integer pattern is valid"));

pub const PROFIT_POSITIVE_CLASS: &str = "text-green-400";
pub const PROFIT_NEGATIVE_CLASS: &str = "text-red-400";

/// Leading integer of `raw`, read the way `parseInt` reads it
pub fn parse_int(raw: &str) -> Option<i64> {
    let captures = LEADING_INT.captures(raw)?;
    captures[1].parse().ok()
}

/// Amount typed into a cost input
///
/// `NSP` (no se presentó, team did not show) counts as zero, as does
/// anything that is not a number.
pub fn parse_value(raw: &str) -> i64 {
    if raw.is_empty() || raw.to_uppercase().contains("NSP") {
        return 0;
    }
    parse_int(raw).unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostField {
    RefereeCostHome,
    RefereeCostAway,
    RefereeCost,
}

impl CostField {
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "referee_cost_home" => Some(CostField::RefereeCostHome),
            "referee_cost_away" => Some(CostField::RefereeCostAway),
            "referee_cost" => Some(CostField::RefereeCost),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CourtTotals {
    pub home: i64,
    pub away: i64,
    pub referee: i64,
}

impl CourtTotals {
    /// Sum `(data-field, value)` pairs of one court table
    pub fn from_inputs<'a, I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (Option<&'a str>, &'a str)>,
    {
        let mut totals = Self::default();
        for (field, value) in inputs {
            let Some(field) = field.and_then(CostField::from_field) else {
                continue;
            };
            let amount = parse_value(value);
            match field {
                CostField::RefereeCostHome => totals.home += amount,
                CostField::RefereeCostAway => totals.away += amount,
                CostField::RefereeCost => totals.referee += amount,
            }
        }
        totals
    }

    pub fn profit(&self) -> i64 {
        (self.home + self.away) - self.referee
    }

    pub fn profit_class(&self) -> &'static str {
        if self.profit() >= 0 {
            PROFIT_POSITIVE_CLASS
        } else {
            PROFIT_NEGATIVE_CLASS
        }
    }
}

pub fn format_amount(amount: i64) -> String {
    format!("${}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(""), 0);
        assert_eq!(parse_value("350"), 350);
        assert_eq!(parse_value(" 42abc"), 42);
        assert_eq!(parse_value("-15"), -15);
        assert_eq!(parse_value("abc"), 0);
        assert_eq!(parse_value("12.9"), 12);
    }

    #[test]
    fn test_nsp_counts_as_zero() {
        assert_eq!(parse_value("NSP"), 0);
        assert_eq!(parse_value("300 nsp"), 0);
    }

    #[test]
    fn test_court_totals() {
        let inputs = vec![
            (Some("referee_cost_home"), "300"),
            (Some("referee_cost_away"), "NSP"),
            (Some("referee_cost"), "250"),
            (Some("referee_cost_home"), "300"),
            (Some("referee_cost_away"), "300"),
            (Some("referee_cost"), "250"),
            (Some("home_score"), "3"),
            (None, "99"),
        ];
        let totals = CourtTotals::from_inputs(inputs);
        assert_eq!(totals, CourtTotals { home: 600, away: 300, referee: 500 });
        assert_eq!(totals.profit(), 400);
        assert_eq!(totals.profit_class(), PROFIT_POSITIVE_CLASS);
        assert_eq!(format_amount(totals.profit()), "$400");
    }

    #[test]
    fn test_negative_profit() {
        let totals = CourtTotals::from_inputs(vec![(Some("referee_cost"), "100")]);
        assert_eq!(totals.profit(), -100);
        assert_eq!(totals.profit_class(), PROFIT_NEGATIVE_CLASS);
        assert_eq!(format_amount(totals.profit()), "$-100");
    }
}
