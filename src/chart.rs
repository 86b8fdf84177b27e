use std::collections::BTreeSet;

use crate::data::filter::ListingPoint;

// ---------------------------------------------------------------------------
// Chart spec – declarative description of the 3-D scatter
// ---------------------------------------------------------------------------

pub const CHART_TITLE: &str = "Airbnb Listings in Feature Space";

/// Fixed point opacity, to mitigate overplotting in dense clusters.
pub const POINT_OPACITY: f32 = 0.4;

/// One plotted point: the verbatim embedding coordinates of a filtered
/// listing plus the fields its hover text displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub position: [f64; 3],
    /// Color-grouping label.
    pub category: String,
    pub name: String,
    pub price_per_night: f64,
    pub monthly_income_estimate: f64,
    pub minimum_nights: u32,
}

impl ChartPoint {
    pub fn hover_text(&self) -> String {
        format!(
            "{}\nPrice per night: ${:.0}\nEst. monthly income: ${:.0}\nMinimum nights: {}",
            self.name, self.price_per_night, self.monthly_income_estimate, self.minimum_nights
        )
    }
}

/// The full chart: points in source row order plus the sorted list of
/// categories present (legend entries, color assignment).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSpec {
    pub points: Vec<ChartPoint>,
    pub categories: Vec<String>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build the scatter spec from the filtered rows: a pure 1:1 mapping, no
/// aggregation, binning, or transform. An empty input produces an empty
/// chart, which the renderer draws as an axes-only plot.
pub fn build_chart(rows: &[ListingPoint]) -> ChartSpec {
    let categories: BTreeSet<&str> = rows.iter().map(|r| r.profit_category.as_str()).collect();

    let points = rows
        .iter()
        .map(|r| ChartPoint {
            position: r.embedding,
            category: r.profit_category.clone(),
            name: r.name.clone(),
            price_per_night: r.price_per_night,
            monthly_income_estimate: r.monthly_income_estimate,
            minimum_nights: r.minimum_nights,
        })
        .collect();

    ChartSpec {
        points,
        categories: categories.into_iter().map(str::to_string).collect(),
    }
}
