use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Listing – one row of the source table
// ---------------------------------------------------------------------------

/// A single Airbnb listing (one row of the source CSV), reduced to the
/// columns the dashboard uses. The three embedding coordinates come from an
/// offline dimensionality-reduction run and are opaque here: they are only
/// ever plotted, never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub neighbourhood: String,
    pub beds: u32,
    pub accommodates: u32,
    pub is_superhost: bool,
    pub is_local_host: bool,
    pub has_hot_tub: bool,
    /// Pre-computed embedding coordinates (plot position).
    pub embedding: [f64; 3],
    pub name: String,
    /// Categorical label used for color grouping.
    pub profit_category: String,
    pub price_per_night: f64,
    pub monthly_income_estimate: f64,
    pub minimum_nights: u32,
}

// ---------------------------------------------------------------------------
// ListingDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, in source row order, plus the sorted set of
/// distinct profit categories (drives stable legend colors).
#[derive(Debug, Clone, Default)]
pub struct ListingDataset {
    pub listings: Vec<Listing>,
    pub profit_categories: Vec<String>,
}

impl ListingDataset {
    /// Build the category index from the loaded rows.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let categories: BTreeSet<&str> = listings
            .iter()
            .map(|l| l.profit_category.as_str())
            .collect();
        let profit_categories = categories.into_iter().map(str::to_string).collect();
        ListingDataset {
            listings,
            profit_categories,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
