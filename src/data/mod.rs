/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  data/tokyo_listings.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ListingDataset (mtime-cached)
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ListingDataset  │  Vec<Listing>, category index
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  six equality predicates → Vec<ListingPoint>
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
