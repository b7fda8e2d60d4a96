//! Estimates projection values between and beyond the precomputed points.
//!
//! Every arithmetic step is checked. When a step cannot be evaluated
//! (zero denominator, overflow, no real power) the result falls back to
//! the nearest defined value instead of failing, because the output is
//! shown directly as a currency figure.

use std::cmp::Ordering;

use rust_decimal::{Decimal, MathematicalOps};
use tracing::debug;

use super::types::{ProjectionMetric, ProjectionPoint, ProjectionSample, ProjectionSeries};

/// Upper bound on points produced by [`ProjectionInterpolator::sample`].
pub const MAX_SAMPLES: usize = 10_000;

/// Interpolator over a [`ProjectionSeries`].
pub struct ProjectionInterpolator;

impl ProjectionInterpolator {
    /// Projected net worth at `target_years`.
    ///
    /// `baseline` is the value at year zero, used before the first point and
    /// as the reference for growth beyond the last one.
    #[must_use]
    pub fn value_at(
        series: &ProjectionSeries,
        target_years: Decimal,
        baseline: Decimal,
    ) -> Decimal {
        Self::metric_at(series, ProjectionMetric::NetWorth, target_years, baseline)
    }

    /// Value of `metric` at `target_years`.
    ///
    /// 1. A point exactly at `target_years` is returned as is.
    /// 2. Between two points: linear interpolation.
    /// 3. Before the first point: linear from `baseline` toward it.
    /// 4. After the last point: geometric growth at the ratio of the last
    ///    value over `baseline`.
    /// 5. Empty series: `baseline`.
    #[must_use]
    pub fn metric_at(
        series: &ProjectionSeries,
        metric: ProjectionMetric,
        target_years: Decimal,
        baseline: Decimal,
    ) -> Decimal {
        let mut before: Option<&ProjectionPoint> = None;
        let mut after: Option<&ProjectionPoint> = None;

        // Points are strictly ascending, so the first greater point ends the scan.
        for point in series.points() {
            match Decimal::from(point.years).cmp(&target_years) {
                Ordering::Equal => return point.value(metric),
                Ordering::Less => before = Some(point),
                Ordering::Greater => {
                    after = Some(point);
                    break;
                }
            }
        }

        match (before, after) {
            (Some(before), Some(after)) => Self::between(before, after, metric, target_years),
            (None, Some(after)) => Self::from_baseline(after, metric, target_years, baseline),
            (Some(before), None) => Self::beyond(before, metric, target_years, baseline),
            (None, None) => baseline,
        }
    }

    /// Evaluates the curve from `from` to `to` (inclusive) every `step` years.
    ///
    /// A non-positive step yields only the `from` sample. Output is capped
    /// at [`MAX_SAMPLES`] points.
    #[must_use]
    pub fn sample(
        series: &ProjectionSeries,
        metric: ProjectionMetric,
        baseline: Decimal,
        from: Decimal,
        to: Decimal,
        step: Decimal,
    ) -> Vec<ProjectionSample> {
        let point = |years| ProjectionSample {
            years,
            value: Self::metric_at(series, metric, years, baseline),
        };

        if step <= Decimal::ZERO {
            return vec![point(from)];
        }

        let mut samples = Vec::new();
        let mut years = from;
        while years <= to && samples.len() < MAX_SAMPLES {
            samples.push(point(years));
            match years.checked_add(step) {
                Some(next) => years = next,
                None => break,
            }
        }
        samples
    }

    fn between(
        before: &ProjectionPoint,
        after: &ProjectionPoint,
        metric: ProjectionMetric,
        target_years: Decimal,
    ) -> Decimal {
        let start = before.value(metric);
        let end = after.value(metric);
        let span = Decimal::from(after.years) - Decimal::from(before.years);

        target_years
            .checked_sub(Decimal::from(before.years))
            .and_then(|offset| offset.checked_div(span))
            .and_then(|ratio| end.checked_sub(start)?.checked_mul(ratio))
            .and_then(|delta| start.checked_add(delta))
            .unwrap_or_else(|| {
                debug!(
                    %target_years,
                    years = before.years,
                    "interpolation overflow, using previous point"
                );
                start
            })
    }

    fn from_baseline(
        after: &ProjectionPoint,
        metric: ProjectionMetric,
        target_years: Decimal,
        baseline: Decimal,
    ) -> Decimal {
        if after.years == 0 {
            return baseline;
        }
        let end = after.value(metric);

        target_years
            .checked_div(Decimal::from(after.years))
            .and_then(|ratio| end.checked_sub(baseline)?.checked_mul(ratio))
            .and_then(|delta| baseline.checked_add(delta))
            .unwrap_or_else(|| {
                debug!(%target_years, "baseline interpolation overflow, using baseline");
                baseline
            })
    }

    fn beyond(
        before: &ProjectionPoint,
        metric: ProjectionMetric,
        target_years: Decimal,
        baseline: Decimal,
    ) -> Decimal {
        let last = before.value(metric);
        if before.years == 0 {
            return last;
        }

        let growth = if baseline.is_zero() {
            Decimal::ONE
        } else {
            match last.checked_div(baseline) {
                Some(growth) => growth,
                None => return last,
            }
        };

        if growth == Decimal::ONE {
            return last;
        }

        let Some(exponent) = target_years.checked_div(Decimal::from(before.years)) else {
            return last;
        };
        if growth.is_sign_negative() && !exponent.fract().is_zero() {
            debug!(%growth, %exponent, "no real fractional power, holding last projected value");
            return last;
        }

        Self::power(growth, exponent)
            .and_then(|factor| last.checked_mul(factor))
            .unwrap_or_else(|| {
                debug!(%target_years, %growth, "extrapolation overflow, holding last value");
                last
            })
    }

    /// `base ^ exponent`, exact for whole exponents.
    fn power(base: Decimal, exponent: Decimal) -> Option<Decimal> {
        if exponent.fract().is_zero() {
            i64::try_from(exponent)
                .ok()
                .and_then(|whole| base.checked_powi(whole))
        } else {
            base.checked_powd(exponent)
        }
    }
}
