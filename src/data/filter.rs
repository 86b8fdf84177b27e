use thiserror::Error;

use super::model::Listing;

// ---------------------------------------------------------------------------
// Selector – the six user-controlled filter values
// ---------------------------------------------------------------------------

/// Neighbourhood choices offered by the dropdown: (display label, stored value).
pub const NEIGHBOURHOODS: [(&str, &str); 3] = [
    ("Sumida", "Sumida Ku"),
    ("Chuo", "Chuo Ku"),
    ("Shinjuku", "Shinjuku Ku"),
];

pub const MAX_BEDS: u32 = 2;
pub const MAX_ACCOMMODATES: u32 = 6;

/// Current value of each of the six filter controls. Ephemeral UI state,
/// owned by the presentation layer and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub neighbourhood: String,
    pub beds: u32,
    pub is_superhost: bool,
    pub accommodates: u32,
    pub is_local_host: bool,
    pub has_hot_tub: bool,
}

impl Default for Selector {
    fn default() -> Self {
        Selector {
            neighbourhood: "Sumida Ku".to_string(),
            beds: 2,
            is_superhost: false,
            accommodates: 2,
            is_local_host: false,
            has_hot_tub: false,
        }
    }
}

/// A control value outside its declared domain. The widgets are
/// pre-constrained so this is unreachable through the UI; the binding still
/// validates and fails closed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSelector {
    #[error("unknown neighbourhood {0:?}")]
    Neighbourhood(String),
    #[error("bed count {0} outside 0..={MAX_BEDS}")]
    Beds(u32),
    #[error("guest capacity {0} outside 0..={MAX_ACCOMMODATES}")]
    Accommodates(u32),
}

impl Selector {
    /// Check every value against its control's domain.
    pub fn validate(&self) -> Result<(), InvalidSelector> {
        if !NEIGHBOURHOODS.iter().any(|(_, v)| *v == self.neighbourhood) {
            return Err(InvalidSelector::Neighbourhood(self.neighbourhood.clone()));
        }
        if self.beds > MAX_BEDS {
            return Err(InvalidSelector::Beds(self.beds));
        }
        if self.accommodates > MAX_ACCOMMODATES {
            return Err(InvalidSelector::Accommodates(self.accommodates));
        }
        Ok(())
    }

    /// All six equality predicates, ANDed. No range or fuzzy matching.
    fn matches(&self, listing: &Listing) -> bool {
        listing.neighbourhood == self.neighbourhood
            && listing.beds == self.beds
            && listing.accommodates == self.accommodates
            && listing.is_superhost == self.is_superhost
            && listing.is_local_host == self.is_local_host
            && listing.has_hot_tub == self.has_hot_tub
    }
}

// ---------------------------------------------------------------------------
// Filter – projection of the matching rows
// ---------------------------------------------------------------------------

/// A matching listing projected to the columns the chart consumes; every
/// other source column is dropped here.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPoint {
    pub embedding: [f64; 3],
    pub name: String,
    pub profit_category: String,
    pub price_per_night: f64,
    pub beds: u32,
    pub minimum_nights: u32,
    pub accommodates: u32,
    pub monthly_income_estimate: f64,
    pub is_superhost: bool,
    pub is_local_host: bool,
    pub has_hot_tub: bool,
}

impl From<&Listing> for ListingPoint {
    fn from(l: &Listing) -> Self {
        ListingPoint {
            embedding: l.embedding,
            name: l.name.clone(),
            profit_category: l.profit_category.clone(),
            price_per_night: l.price_per_night,
            beds: l.beds,
            minimum_nights: l.minimum_nights,
            accommodates: l.accommodates,
            monthly_income_estimate: l.monthly_income_estimate,
            is_superhost: l.is_superhost,
            is_local_host: l.is_local_host,
            has_hot_tub: l.has_hot_tub,
        }
    }
}

/// Return the listings matching all six selector values, in source row order.
/// Zero matches is a legitimate empty result, not an error.
pub fn matching_listings(listings: &[Listing], selector: &Selector) -> Vec<ListingPoint> {
    listings
        .iter()
        .filter(|l| selector.matches(l))
        .map(ListingPoint::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Listing;

    fn listing(
        name: &str,
        neighbourhood: &str,
        beds: u32,
        accommodates: u32,
        flags: (bool, bool, bool),
    ) -> Listing {
        Listing {
            neighbourhood: neighbourhood.into(),
            beds,
            accommodates,
            is_superhost: flags.0,
            is_local_host: flags.1,
            has_hot_tub: flags.2,
            embedding: [beds as f64, accommodates as f64, 0.5],
            name: name.into(),
            profit_category: "medium profit".into(),
            price_per_night: 75.0,
            monthly_income_estimate: 1500.0,
            minimum_nights: 2,
        }
    }

    fn selector(
        neighbourhood: &str,
        beds: u32,
        accommodates: u32,
        flags: (bool, bool, bool),
    ) -> Selector {
        Selector {
            neighbourhood: neighbourhood.into(),
            beds,
            is_superhost: flags.0,
            accommodates,
            is_local_host: flags.1,
            has_hot_tub: flags.2,
        }
    }

    /// Every combination over a small grid, so the equality semantics are
    /// checked exhaustively against a brute-force predicate.
    fn exhaustive_fixture() -> Vec<Listing> {
        let mut rows = Vec::new();
        let mut i = 0;
        for hood in ["Sumida Ku", "Chuo Ku"] {
            for beds in 0..=2 {
                for accommodates in 0..=2 {
                    for flags in [
                        (false, false, false),
                        (true, false, false),
                        (false, true, true),
                        (true, true, true),
                    ] {
                        rows.push(listing(&format!("l{i}"), hood, beds, accommodates, flags));
                        i += 1;
                    }
                }
            }
        }
        rows
    }

    #[test]
    fn exhaustive_equality_no_false_positives_or_negatives() {
        let rows = exhaustive_fixture();
        for hood in ["Sumida Ku", "Chuo Ku"] {
            for beds in 0..=2 {
                for accommodates in 0..=2 {
                    for flags in [(false, false, false), (true, true, true)] {
                        let sel = selector(hood, beds, accommodates, flags);
                        let matched = matching_listings(&rows, &sel);
                        let expected: Vec<&Listing> = rows
                            .iter()
                            .filter(|l| {
                                l.neighbourhood == hood
                                    && l.beds == beds
                                    && l.accommodates == accommodates
                                    && l.is_superhost == flags.0
                                    && l.is_local_host == flags.1
                                    && l.has_hot_tub == flags.2
                            })
                            .collect();
                        assert_eq!(matched.len(), expected.len());
                        for (got, want) in matched.iter().zip(expected) {
                            assert_eq!(got.name, want.name);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let rows = exhaustive_fixture();
        let sel = selector("Chuo Ku", 1, 2, (true, false, false));
        let first = matching_listings(&rows, &sel);
        let second = matching_listings(&rows, &sel);
        assert_eq!(first, second);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let rows = exhaustive_fixture();
        // accommodates=6 never occurs in the fixture
        let sel = selector("Chuo Ku", 1, 6, (true, true, true));
        assert!(matching_listings(&rows, &sel).is_empty());
    }

    #[test]
    fn result_preserves_source_row_order() {
        let rows = vec![
            listing("third", "Sumida Ku", 2, 2, (false, false, false)),
            listing("other", "Chuo Ku", 1, 1, (false, false, false)),
            listing("first", "Sumida Ku", 2, 2, (false, false, false)),
            listing("second", "Sumida Ku", 2, 2, (false, false, false)),
        ];
        let matched = matching_listings(&rows, &Selector::default());
        let names: Vec<&str> = matched.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn three_identical_sumida_rows_differing_only_in_name() {
        let rows = vec![
            listing("a", "Sumida Ku", 2, 2, (false, false, false)),
            listing("b", "Sumida Ku", 2, 2, (false, false, false)),
            listing("c", "Sumida Ku", 2, 2, (false, false, false)),
        ];
        let matched = matching_listings(&rows, &Selector::default());
        let names: Vec<&str> = matched.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn projection_copies_fields_verbatim() {
        let rows = vec![listing("a", "Sumida Ku", 2, 2, (false, false, false))];
        let matched = matching_listings(&rows, &Selector::default());
        assert_eq!(matched[0].embedding, [2.0, 2.0, 0.5]);
        assert_eq!(matched[0].price_per_night, 75.0);
        assert_eq!(matched[0].monthly_income_estimate, 1500.0);
        assert_eq!(matched[0].minimum_nights, 2);
        assert_eq!(matched[0].profit_category, "medium profit");
    }

    #[test]
    fn selector_domains_are_enforced() {
        assert_eq!(Selector::default().validate(), Ok(()));

        let mut sel = Selector::default();
        sel.neighbourhood = "Osaka".into();
        assert!(matches!(
            sel.validate(),
            Err(InvalidSelector::Neighbourhood(_))
        ));

        let mut sel = Selector::default();
        sel.beds = 3;
        assert_eq!(sel.validate(), Err(InvalidSelector::Beds(3)));

        let mut sel = Selector::default();
        sel.accommodates = 7;
        assert_eq!(sel.validate(), Err(InvalidSelector::Accommodates(7)));
    }
}
