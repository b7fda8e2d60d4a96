//! Projection data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ProjectionError;

/// One precomputed point of the net-worth projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Offset from now, in whole years.
    pub years: u32,
    /// Projected net worth.
    pub projected_net_worth: Decimal,
    /// Cumulative savings.
    #[serde(default)]
    pub total_saved: Decimal,
    /// Cumulative costs.
    #[serde(default)]
    pub total_costs: Decimal,
    /// Debt left at this point.
    #[serde(default)]
    pub remaining_debt: Decimal,
    /// Savings including compound interest.
    #[serde(default)]
    pub projected_savings_with_interest: Decimal,
}

impl ProjectionPoint {
    /// Creates a point carrying only a net-worth value.
    #[must_use]
    pub const fn net_worth(years: u32, value: Decimal) -> Self {
        Self {
            years,
            projected_net_worth: value,
            total_saved: Decimal::ZERO,
            total_costs: Decimal::ZERO,
            remaining_debt: Decimal::ZERO,
            projected_savings_with_interest: Decimal::ZERO,
        }
    }

    /// Reads the field selected by `metric`.
    #[must_use]
    pub const fn value(&self, metric: ProjectionMetric) -> Decimal {
        match metric {
            ProjectionMetric::NetWorth => self.projected_net_worth,
            ProjectionMetric::TotalSaved => self.total_saved,
            ProjectionMetric::TotalCosts => self.total_costs,
            ProjectionMetric::RemainingDebt => self.remaining_debt,
            ProjectionMetric::SavingsWithInterest => self.projected_savings_with_interest,
        }
    }
}

/// Which series of a projection point to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMetric {
    /// `projected_net_worth`.
    #[default]
    NetWorth,
    /// `total_saved`.
    TotalSaved,
    /// `total_costs`.
    TotalCosts,
    /// `remaining_debt`.
    RemainingDebt,
    /// `projected_savings_with_interest`.
    SavingsWithInterest,
}

/// Projection points sorted strictly ascending by `years`.
///
/// Sort order is checked on construction and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProjectionPoint>", into = "Vec<ProjectionPoint>")]
pub struct ProjectionSeries {
    points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    /// Wraps backend points after checking their order.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::UnsortedSeries` on the first point that
    /// does not come strictly after its predecessor.
    pub fn new(points: Vec<ProjectionPoint>) -> Result<Self, ProjectionError> {
        if let Some(index) = points.windows(2).position(|w| w[0].years >= w[1].years) {
            return Err(ProjectionError::UnsortedSeries {
                index: index + 1,
                previous: points[index].years,
                current: points[index + 1].years,
            });
        }
        Ok(Self { points })
    }

    /// The points, ascending by `years`.
    #[must_use]
    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl TryFrom<Vec<ProjectionPoint>> for ProjectionSeries {
    type Error = ProjectionError;

    fn try_from(points: Vec<ProjectionPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<ProjectionSeries> for Vec<ProjectionPoint> {
    fn from(series: ProjectionSeries) -> Self {
        series.points
    }
}

/// A single evaluated point of a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSample {
    /// Year offset.
    pub years: Decimal,
    /// Interpolated value.
    pub value: Decimal,
}
