use crate::models::{Agent, ListingStatus, Property};
use crate::sources::traits::PropertySource;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

const PROPERTY_TYPES: [&str; 8] = [
    "Apartment",
    "Flat",
    "Villa",
    "Builder Floor",
    "Penthouse",
    "Bungalow",
    "Independent House",
    "Row House",
];

const CITIES: [&str; 10] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Gurgaon",
];

const NEIGHBORHOODS: [&str; 10] = [
    "Bandra",
    "Andheri",
    "Powai",
    "Malad",
    "Indiranagar",
    "Koramangala",
    "Whitefield",
    "Jubilee Hills",
    "T Nagar",
    "Salt Lake",
];

const FEATURES: [&str; 10] = [
    "Air Conditioning",
    "Swimming Pool",
    "Gym",
    "Parking",
    "Balcony",
    "Garden",
    "Fireplace",
    "Security System",
    "Elevator",
    "Storage",
];

const STATES: [&str; 8] = ["MH", "DL", "KA", "TL", "TN", "WB", "GJ", "RJ"];

const AGENT_SURNAMES: [&str; 8] = [
    "Sharma", "Patel", "Singh", "Gupta", "Kumar", "Verma", "Nair", "Iyer",
];

/// Generates random sample listings for demos and tests
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    count: usize,
    seed: Option<u64>,
    today: Option<NaiveDate>,
}

impl SampleGenerator {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            seed: None,
            today: None,
        }
    }

    /// Fix the RNG seed so repeated runs produce the same listings
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Anchor listing dates to a fixed day instead of the local clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Generate the listings synchronously
    pub fn generate(&self) -> Vec<Property> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());

        (1..=self.count as u64)
            .map(|id| generate_one(&mut rng, id, today))
            .collect()
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new(100)
    }
}

#[async_trait]
impl PropertySource for SampleGenerator {
    async fn load(&self) -> Result<Vec<Property>> {
        info!("Generating {} sample properties", self.count);
        Ok(self.generate())
    }

    fn source_name(&self) -> &'static str {
        "Sample"
    }
}

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn generate_one<R: Rng>(rng: &mut R, id: u64, today: NaiveDate) -> Property {
    let property_type = pick(rng, &PROPERTY_TYPES);
    let city = pick(rng, &CITIES);
    let neighborhood = pick(rng, &NEIGHBORHOODS);
    let beds: u32 = rng.gen_range(1..=5);
    let baths: u32 = rng.gen_range(1..=3);
    let square_feet: u32 = rng.gen_range(500..2_500);

    let price: u64 = match property_type {
        "Penthouse" | "Villa" | "Bungalow" => rng.gen_range(15_000_000..=80_000_000),
        _ => rng.gen_range(3_000_000..=15_000_000),
    };

    let feature_count = rng.gen_range(1..=5);
    let features = FEATURES
        .choose_multiple(rng, feature_count)
        .map(|f| f.to_string())
        .collect();

    let days_ago = rng.gen_range(0..30);
    let status = if rng.gen_bool(0.8) {
        ListingStatus::ForSale
    } else {
        ListingStatus::UnderContract
    };

    Property {
        id,
        title: format!("{} Bedroom {} in {}", beds, property_type, neighborhood),
        description: format!(
            "Beautiful {} bedroom {} located in the heart of {}, {}. This property features {} bathrooms and approximately {} square feet of living space.",
            beds,
            property_type.to_lowercase(),
            neighborhood,
            city,
            baths,
            square_feet
        ),
        property_type: property_type.to_string(),
        price,
        price_per_sq_ft: price / u64::from(square_feet),
        address: format!("{}, {}", rng.gen_range(1..=999), neighborhood),
        city: city.to_string(),
        state: pick(rng, &STATES).to_string(),
        zip_code: rng.gen_range(100_000..190_000).to_string(),
        beds,
        baths,
        square_feet,
        year_built: Some(rng.gen_range(1950..2020)),
        features,
        status,
        favorite: rng.gen_bool(0.2),
        listed_date: today - Duration::days(days_ago),
        image: format!("https://picsum.photos/seed/{}/800/600", id),
        agent: Agent {
            name: format!("Agent {}", pick(rng, &AGENT_SURNAMES)),
            phone: format!("+91 {}", rng.gen_range(1_000_000_000u64..10_000_000_000)),
            email: format!("agent{}@propspotter.in", rng.gen_range(1..=99)),
        },
    }
}
