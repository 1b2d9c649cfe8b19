//! Investment and home-loan (bond) calculators
//!
//! Rates are given as percentages (e.g. `8.5` for 8.5%). Investment rates are
//! annual and compounded yearly; bond rates are annual and applied monthly.

use serde::{Deserialize, Serialize};

/// Interest model for investments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InterestKind {
    Simple,
    Compound,
}

impl InterestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestKind::Simple => "simple",
            InterestKind::Compound => "compound",
        }
    }
}

/// Value of an investment after `years`
///
/// Simple: `P * (1 + r * t)`. Compound: `P * (1 + r)^t`.
pub fn investment_total(principal: f64, rate_percent: f64, years: u32, kind: InterestKind) -> f64 {
    let rate = rate_percent / 100.0;
    match kind {
        InterestKind::Simple => principal * (1.0 + rate * years as f64),
        InterestKind::Compound => principal * (1.0 + rate).powf(years as f64),
    }
}

/// Monthly repayment on a bond of `value` over `months`
///
/// Annuity formula `(i * P) / (1 - (1 + i)^-n)` with monthly rate `i`.
/// A zero rate spreads the value evenly. Returns None when `months` is 0.
pub fn bond_repayment(value: f64, rate_percent: f64, months: u32) -> Option<f64> {
    if months == 0 {
        return None;
    }
    let monthly_rate = rate_percent / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return Some(value / months as f64);
    }
    let n = months as f64;
    Some((monthly_rate * value) / (1.0 - (1.0 + monthly_rate).powf(-n)))
}
