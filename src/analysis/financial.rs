use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::constants::*;

/// Ordered yearly cash flows for one configuration. Entry 0 carries the
/// (negative) initial investment; entries 1..N are the yearly net flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowSeries {
    flows: Vec<f64>,
}

impl CashFlowSeries {
    pub fn new(flows: Vec<f64>) -> Self {
        Self { flows }
    }

    /// Builds the usual investment-then-savings shape.
    pub fn from_investment(investment: f64, yearly_flows: &[f64]) -> Self {
        let mut flows = Vec::with_capacity(yearly_flows.len() + 1);
        flows.push(-investment);
        flows.extend_from_slice(yearly_flows);
        Self { flows }
    }

    pub fn flows(&self) -> &[f64] {
        &self.flows
    }

    pub fn horizon_years(&self) -> usize {
        self.flows.len().saturating_sub(1)
    }
}

/// Net present value; year 0 enters undiscounted.
pub fn npv(series: &CashFlowSeries, rate: f64) -> f64 {
    series
        .flows()
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Derivative of NPV with respect to the rate.
fn npv_derivative(series: &CashFlowSeries, rate: f64) -> f64 {
    series
        .flows()
        .iter()
        .enumerate()
        .map(|(t, &cf)| -(t as f64) * cf / (1.0 + rate).powi(t as i32 + 1))
        .sum()
}

/// Internal rate of return via Newton-Raphson.
///
/// Starts at 10%, iterates at most 100 times against a 1e-4 NPV tolerance.
/// When the derivative collapses the last iterate is returned as-is; there
/// is deliberately no bisection fallback and no "undefined" error for
/// multi-root series.
pub fn irr(series: &CashFlowSeries) -> f64 {
    let mut rate = IRR_INITIAL_GUESS;
    for iteration in 0..IRR_MAX_ITERATIONS {
        let value = npv(series, rate);
        if value.abs() < IRR_NPV_TOLERANCE {
            trace!(iteration, rate, "irr converged");
            return rate;
        }
        let derivative = npv_derivative(series, rate);
        if derivative.abs() < IRR_MIN_DERIVATIVE {
            trace!(iteration, rate, "irr derivative collapsed, returning last iterate");
            return rate;
        }
        rate -= value / derivative;
    }
    rate
}

/// Modified IRR: positive flows compounded forward at the reinvestment rate,
/// negative flows discounted to year 0 at the finance rate.
pub fn mirr(series: &CashFlowSeries, finance_rate: f64, reinvestment_rate: f64) -> f64 {
    let n = series.horizon_years();
    if n == 0 {
        return 0.0;
    }

    let mut fv_positive = 0.0;
    let mut pv_negative = 0.0;
    for (t, &cf) in series.flows().iter().enumerate() {
        if cf > 0.0 {
            fv_positive += cf * (1.0 + reinvestment_rate).powi((n - t) as i32);
        } else if cf < 0.0 {
            pv_negative += cf / (1.0 + finance_rate).powi(t as i32);
        }
    }

    if pv_negative == 0.0 || fv_positive <= 0.0 {
        return 0.0;
    }
    (fv_positive / pv_negative.abs()).powf(1.0 / n as f64) - 1.0
}

/// First year the running sum of flows reaches zero, interpolated within
/// that year. `horizon + 1` is the "never pays back" sentinel.
fn payback_from_flows(flows: &[f64], horizon: usize) -> f64 {
    let mut cumulative = 0.0;
    for (t, &cf) in flows.iter().enumerate() {
        let previous = cumulative;
        cumulative += cf;
        if cumulative >= 0.0 && t > 0 {
            if cf <= 0.0 {
                return t as f64;
            }
            return (t - 1) as f64 + (-previous / cf);
        }
    }
    (horizon + 1) as f64
}

pub fn simple_payback(series: &CashFlowSeries) -> f64 {
    payback_from_flows(series.flows(), series.horizon_years())
}

pub fn discounted_payback(series: &CashFlowSeries, rate: f64) -> f64 {
    let discounted: Vec<f64> = series
        .flows()
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .collect();
    payback_from_flows(&discounted, series.horizon_years())
}

/// Levelized cost of energy over the system lifetime. The denominator is
/// clamped so zero-production candidates rank last with a finite value.
pub fn lcoe(total_cost: f64, annual_energy_production_kwh: f64, lifetime_years: usize) -> f64 {
    let lifetime_energy = (annual_energy_production_kwh * lifetime_years as f64).max(1.0);
    total_cost / lifetime_energy
}
