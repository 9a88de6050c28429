use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::search::{PropertyCategory, Purpose, SearchCriteria};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "propspotter")]
#[command(about = "Search, filter and page through property listings", long_about = None)]
pub struct Cli {
    /// Load listings from a JSON file instead of generating samples
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of sample listings to generate
    #[arg(long, default_value_t = 100)]
    pub count: usize,

    /// Seed for the sample generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Location substring (address, city, state or PIN code)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Property category
    #[arg(short = 't', long = "type", value_enum)]
    pub category: Option<CategoryArg>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Maximum price, 0 for no upper bound
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Minimum bedrooms
    #[arg(long)]
    pub beds: Option<String>,

    /// Minimum bathrooms
    #[arg(long)]
    pub baths: Option<String>,

    /// Minimum area in square feet
    #[arg(long)]
    pub min_area: Option<String>,

    /// Keywords that must all appear in the title or description
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Required amenity id (parking, gym, pool, security, elevator, furnished)
    #[arg(short, long = "amenity")]
    pub amenities: Vec<String>,

    /// Buy or rent
    #[arg(long, value_enum)]
    pub purpose: Option<PurposeArg>,

    /// Require a location, as the search form does
    #[arg(long)]
    pub validate: bool,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Listings per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub per_page: usize,

    /// Write the filtered listings to a JSON file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CategoryArg {
    Residential,
    Apartment,
    Commercial,
    Land,
}

impl From<CategoryArg> for PropertyCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Residential => PropertyCategory::Residential,
            CategoryArg::Apartment => PropertyCategory::Apartment,
            CategoryArg::Commercial => PropertyCategory::Commercial,
            CategoryArg::Land => PropertyCategory::Land,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum PurposeArg {
    Buy,
    Rent,
}

impl From<PurposeArg> for Purpose {
    fn from(arg: PurposeArg) -> Self {
        match arg {
            PurposeArg::Buy => Purpose::Buy,
            PurposeArg::Rent => Purpose::Rent,
        }
    }
}

impl Cli {
    fn has_criteria(&self) -> bool {
        self.location.is_some()
            || self.category.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.beds.is_some()
            || self.baths.is_some()
            || self.min_area.is_some()
            || self.keywords.is_some()
            || !self.amenities.is_empty()
            || self.purpose.is_some()
            || self.validate
    }

    /// Build search criteria from the flags, or `None` when no search flag
    /// was given so every listing is shown.
    ///
    /// Unlike the search form, an omitted price bound means unbounded here.
    pub fn criteria(&self) -> Option<SearchCriteria> {
        if !self.has_criteria() {
            return None;
        }
        Some(SearchCriteria {
            location: self.location.clone().unwrap_or_default(),
            property_type: self.category.map(Into::into).unwrap_or_default(),
            price_range: (self.min_price.unwrap_or(0), self.max_price.unwrap_or(0)),
            bedrooms: self.beds.clone().unwrap_or_default(),
            bathrooms: self.baths.clone().unwrap_or_default(),
            min_area: self.min_area.clone().unwrap_or_default(),
            keywords: self.keywords.clone().unwrap_or_default(),
            amenities: self.amenities.clone(),
            purpose: self.purpose.map(Into::into).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("propspotter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_search_flags_means_no_criteria() {
        let cli = parse(&["--page", "2"]);
        assert!(cli.criteria().is_none());
        assert_eq!(cli.per_page, DEFAULT_PAGE_SIZE);
        assert_eq!(cli.count, 100);
    }

    #[test]
    fn flags_build_criteria() {
        let cli = parse(&[
            "-l", "pune", "-t", "apartment", "--min-price", "5000000", "--beds", "2", "-a",
            "gym", "-a", "pool",
        ]);
        let criteria = cli.criteria().unwrap();
        assert_eq!(criteria.location, "pune");
        assert_eq!(criteria.property_type, PropertyCategory::Apartment);
        assert_eq!(criteria.price_range, (5_000_000, 0));
        assert_eq!(criteria.bedrooms, "2");
        assert_eq!(criteria.amenities, vec!["gym", "pool"]);
    }
}
