//! Money calculation using rust_decimal
//!
//! Amounts are whole currency units. Tax is computed in `Decimal` and
//! rounded half-up (away from zero) to a whole unit.

use rust_decimal::prelude::*;
use shared::order::{CartLine, CartSummary};

use crate::core::config::{DEFAULT_SERVICE_CHARGE, DEFAULT_TAX_RATE_PERCENT};

/// Service charge and tax rate applied to every summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    pub service_charge: u64,
    /// Fraction, e.g. 0.18
    pub tax_rate: Decimal,
}

impl PricingPolicy {
    pub fn new(service_charge: u64, tax_rate_percent: u32) -> Self {
        Self {
            service_charge,
            tax_rate: Decimal::from(tax_rate_percent) / Decimal::ONE_HUNDRED,
        }
    }

    /// Tax on `subtotal`, rounded half-up to a whole unit
    pub fn tax_on(&self, subtotal: u64) -> u64 {
        let tax = (Decimal::from(subtotal) * self.tax_rate)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        tax.to_u64().unwrap_or_else(|| {
            tracing::error!(subtotal, tax = %tax, "Tax out of range, defaulting to zero");
            0
        })
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_CHARGE, DEFAULT_TAX_RATE_PERCENT)
    }
}

/// Σ price × quantity
pub fn calculate_subtotal(lines: &[CartLine]) -> u64 {
    lines.iter().map(CartLine::line_total).sum()
}

/// Full breakdown of the cart
///
/// The service charge is fixed and applies to an empty cart too.
pub fn compute_summary(lines: &[CartLine], policy: &PricingPolicy) -> CartSummary {
    let subtotal = calculate_subtotal(lines);
    let tax = policy.tax_on(subtotal);
    let service_charge = policy.service_charge;

    CartSummary {
        subtotal,
        service_charge,
        tax,
        total: subtotal + service_charge + tax,
    }
}
