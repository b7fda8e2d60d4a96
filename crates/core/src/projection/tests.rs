//! Property-based tests for projection interpolation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::interpolator::ProjectionInterpolator;
use super::types::{ProjectionPoint, ProjectionSeries};

fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strictly ascending year offsets with matching values.
fn series_strategy() -> impl Strategy<Value = ProjectionSeries> {
    prop::collection::btree_map(0u32..60, amount(), 1..8).prop_map(|points| {
        ProjectionSeries::new(
            points
                .into_iter()
                .map(|(years, value)| ProjectionPoint::net_worth(years, value))
                .collect(),
        )
        .unwrap()
    })
}

proptest! {
    /// Every stored point is returned exactly at its own offset.
    #[test]
    fn prop_exact_points_returned(series in series_strategy(), baseline in amount()) {
        for point in series.points() {
            let target = Decimal::from(point.years);
            let value = ProjectionInterpolator::value_at(&series, target, baseline);
            prop_assert_eq!(value, point.projected_net_worth);
        }
    }

    /// Between two neighbours the value stays within their range.
    #[test]
    fn prop_interpolation_is_bounded(
        start in amount(),
        end in amount(),
        first in 0u32..50,
        gap in 1u32..20,
        quarter in 1u32..4,
    ) {
        let second = first + gap;
        let series = ProjectionSeries::new(vec![
            ProjectionPoint::net_worth(first, start),
            ProjectionPoint::net_worth(second, end),
        ]).unwrap();

        let ratio = Decimal::new(i64::from(quarter) * 25, 2);
        let target = Decimal::from(first) + Decimal::from(gap) * ratio;
        let value = ProjectionInterpolator::value_at(&series, target, Decimal::ZERO);

        prop_assert!(value >= start.min(end), "{} below range", value);
        prop_assert!(value <= start.max(end), "{} above range", value);
    }

    /// Pure function: identical inputs give identical outputs.
    #[test]
    fn prop_idempotent(
        series in series_strategy(),
        target in (-100i64..10_000).prop_map(|tenths| Decimal::new(tenths, 1)),
        baseline in amount(),
    ) {
        let first = ProjectionInterpolator::value_at(&series, target, baseline);
        let second = ProjectionInterpolator::value_at(&series, target, baseline);
        prop_assert_eq!(first, second);
    }

    /// Growth above 1 keeps increasing past the last point.
    #[test]
    fn prop_extrapolation_increases_with_growth(
        years in 1u32..20,
        baseline in (1i64..1_000_000).prop_map(Decimal::from),
        steps in 1u32..4,
    ) {
        let last = baseline * Decimal::TWO;
        let series = ProjectionSeries::new(vec![ProjectionPoint::net_worth(years, last)]).unwrap();

        let near_years = Decimal::from(years * (steps + 1));
        let far_years = Decimal::from(years * (steps + 2));
        let near = ProjectionInterpolator::value_at(&series, near_years, baseline);
        let far = ProjectionInterpolator::value_at(&series, far_years, baseline);

        prop_assert!(near > last);
        prop_assert!(far > near);
    }
}
