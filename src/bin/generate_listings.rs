//! Writes a deterministic synthetic `data/tokyo_listings.csv` so the app
//! runs out of the box. The upstream t-SNE output is not redistributable;
//! this generator produces rows with the same schema and plausible shape:
//! one embedding cluster per profit category, prices and incomes scaled to
//! the category.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

struct Category {
    label: &'static str,
    /// Embedding cluster center.
    center: [f64; 3],
    base_price: f64,
}

const CATEGORIES: [Category; 3] = [
    Category {
        label: "low profit",
        center: [-8.0, -3.0, 2.0],
        base_price: 45.0,
    },
    Category {
        label: "medium profit",
        center: [1.0, 6.0, -4.0],
        base_price: 90.0,
    },
    Category {
        label: "high profit",
        center: [9.0, -5.0, -6.0],
        base_price: 170.0,
    },
];

const NEIGHBOURHOODS: [&str; 3] = ["Sumida Ku", "Chuo Ku", "Shinjuku Ku"];

const NAME_ADJECTIVES: [&str; 8] = [
    "Cozy", "Bright", "Modern", "Quiet", "Spacious", "Charming", "Sunny", "Classic",
];
const NAME_NOUNS: [&str; 6] = ["loft", "studio", "apartment", "machiya", "flat", "hideaway"];

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    std::fs::create_dir_all("data")?;
    let output_path = "data/tokyo_listings.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record([
        "name",
        "neighbourhood_cleansed",
        "beds",
        "accommodates",
        "host_is_superhost",
        "local_host",
        "hot_tub",
        "TSNE1",
        "TSNE2",
        "TSNE3",
        "profit_category",
        "price_per_night_in_USD",
        "estimated_monthly_income_in_USD",
        "minimum_nights",
    ])?;

    let mut rows = 0usize;
    for category in &CATEGORIES {
        for neighbourhood in NEIGHBOURHOODS {
            for _ in 0..40 {
                let beds = rng.range(3) as u32;
                // at least one guest per bed, capped at the slider maximum
                let accommodates = (beds + 1 + rng.range(3) as u32).min(6);
                let is_superhost = rng.range(4) == 0;
                let is_local_host = rng.range(2) == 0;
                let has_hot_tub = rng.range(8) == 0;

                write_row(
                    &mut writer,
                    &mut rng,
                    category,
                    neighbourhood,
                    beds,
                    accommodates,
                    is_superhost,
                    is_local_host,
                    has_hot_tub,
                    rows,
                )?;
                rows += 1;
            }
        }
    }

    // A guaranteed handful matching the default selector, so the app never
    // opens onto an empty chart.
    for _ in 0..5 {
        write_row(
            &mut writer,
            &mut rng,
            &CATEGORIES[1],
            "Sumida Ku",
            2,
            2,
            false,
            false,
            false,
            rows,
        )?;
        rows += 1;
    }

    writer.flush()?;
    println!("Wrote {rows} listings to {output_path}");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn write_row(
    writer: &mut csv::Writer<std::fs::File>,
    rng: &mut SimpleRng,
    category: &Category,
    neighbourhood: &str,
    beds: u32,
    accommodates: u32,
    is_superhost: bool,
    is_local_host: bool,
    has_hot_tub: bool,
    row_id: usize,
) -> anyhow::Result<()> {
    let adjective = NAME_ADJECTIVES[rng.range(NAME_ADJECTIVES.len() as u64) as usize];
    let noun = NAME_NOUNS[rng.range(NAME_NOUNS.len() as u64) as usize];
    let area = neighbourhood.trim_end_matches(" Ku");
    let name = format!("{adjective} {noun} in {area} #{row_id}");

    let embedding = [
        rng.gauss(category.center[0], 1.8),
        rng.gauss(category.center[1], 1.8),
        rng.gauss(category.center[2], 1.8),
    ];

    let price = (category.base_price * (1.0 + 0.15 * beds as f64) + rng.gauss(0.0, 8.0)).max(15.0);
    let occupancy_nights = 12.0 + rng.next_f64() * 16.0;
    let income = price * occupancy_nights;
    let minimum_nights = 1 + rng.range(5) as u32;

    writer.write_record([
        name,
        neighbourhood.to_string(),
        beds.to_string(),
        accommodates.to_string(),
        (is_superhost as u8).to_string(),
        (is_local_host as u8).to_string(),
        (has_hot_tub as u8).to_string(),
        format!("{:.4}", embedding[0]),
        format!("{:.4}", embedding[1]),
        format!("{:.4}", embedding[2]),
        category.label.to_string(),
        format!("{price:.2}"),
        format!("{income:.2}"),
        minimum_nights.to_string(),
    ])?;
    Ok(())
}
