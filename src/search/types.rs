use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse property category picked on the search form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    #[default]
    Residential,
    Apartment,
    Commercial,
    Land,
    /// Any category the form sends that has no type mapping
    #[serde(other)]
    Other,
}

impl PropertyCategory {
    /// Substrings of `Property::property_type` accepted for this category.
    /// An empty slice means the category imposes no constraint.
    pub fn type_aliases(self) -> &'static [&'static str] {
        match self {
            PropertyCategory::Residential | PropertyCategory::Other => &[],
            PropertyCategory::Apartment => &["Apartment", "Flat", "Penthouse"],
            PropertyCategory::Commercial => &["Commercial", "Office Space", "Shop", "Retail"],
            PropertyCategory::Land => &["Land", "Plot"],
        }
    }
}

/// Amenity vocabulary understood by the filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Parking,
    Gym,
    Pool,
    Security,
    Elevator,
    Furnished,
}

impl Amenity {
    pub const ALL: [Amenity; 6] = [
        Amenity::Parking,
        Amenity::Gym,
        Amenity::Pool,
        Amenity::Security,
        Amenity::Elevator,
        Amenity::Furnished,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Amenity::Parking => "parking",
            Amenity::Gym => "gym",
            Amenity::Pool => "pool",
            Amenity::Security => "security",
            Amenity::Elevator => "elevator",
            Amenity::Furnished => "furnished",
        }
    }

    /// Label the amenity carries in `Property::features`
    pub fn feature_label(self) -> &'static str {
        match self {
            Amenity::Parking => "Parking",
            Amenity::Gym => "Gym",
            Amenity::Pool => "Swimming Pool",
            Amenity::Security => "Security System",
            Amenity::Elevator => "Elevator",
            Amenity::Furnished => "Furnished",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

/// Whether the user is searching listings to buy or to rent
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    #[default]
    Buy,
    Rent,
}

/// Search criteria collected by the search form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Substring matched against address, city, state and zip code
    pub location: String,
    pub property_type: PropertyCategory,
    /// `(min, max)`; a max of zero means no upper bound
    pub price_range: (u64, u64),
    /// Minimum bedrooms as typed into the form, empty for any
    pub bedrooms: String,
    /// Minimum bathrooms as typed into the form, empty for any
    pub bathrooms: String,
    /// Minimum square feet as typed into the form, empty for any
    pub min_area: String,
    /// Whitespace separated tokens, all of which must match
    pub keywords: String,
    /// Amenity ids, all of which must be present. Unknown ids are ignored.
    pub amenities: Vec<String>,
    pub purpose: Purpose,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            location: String::new(),
            property_type: PropertyCategory::Residential,
            price_range: (0, 10_000_000),
            bedrooms: String::new(),
            bathrooms: String::new(),
            min_area: String::new(),
            keywords: String::new(),
            amenities: Vec::new(),
            purpose: Purpose::Buy,
        }
    }
}

/// Form-level validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Location is required")]
    MissingLocation,
}

impl SearchCriteria {
    /// Form validation run before a search is submitted. The filter itself
    /// accepts any criteria.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if self.location.trim().is_empty() {
            return Err(CriteriaError::MissingLocation);
        }
        Ok(())
    }

    pub fn min_beds(&self) -> Option<i64> {
        parse_threshold(&self.bedrooms)
    }

    pub fn min_baths(&self) -> Option<i64> {
        parse_threshold(&self.bathrooms)
    }

    pub fn min_square_feet(&self) -> Option<i64> {
        parse_threshold(&self.min_area)
    }

    /// Lowercased keyword tokens
    pub fn keyword_tokens(&self) -> Vec<String> {
        self.keywords
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    /// True when at least one predicate could reject some property.
    /// Inactive criteria keep every listing.
    pub fn is_active(&self) -> bool {
        let (min, max) = self.price_range;
        let constrains = |threshold: Option<i64>| threshold.is_some_and(|t| t > 0);
        !self.location.trim().is_empty()
            || !self.property_type.type_aliases().is_empty()
            || min > 0
            || max > 0
            || constrains(self.min_beds())
            || constrains(self.min_baths())
            || constrains(self.min_square_feet())
            || !self.keywords.trim().is_empty()
            || self.amenities.iter().any(|id| Amenity::from_id(id).is_some())
    }
}

/// Cities offered while the user types a location
pub const LOCATION_SUGGESTIONS: [&str; 10] = [
    "Mumbai, Maharashtra",
    "Delhi, NCR",
    "Bangalore, Karnataka",
    "Hyderabad, Telangana",
    "Chennai, Tamil Nadu",
    "Kolkata, West Bengal",
    "Pune, Maharashtra",
    "Ahmedabad, Gujarat",
    "Jaipur, Rajasthan",
    "Surat, Gujarat",
];

/// Suggestions containing `query`, case-insensitively. Empty for an empty query.
pub fn location_suggestions(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let query = query.to_lowercase();
    LOCATION_SUGGESTIONS
        .into_iter()
        .filter(|s| s.to_lowercase().contains(&query))
        .collect()
}

/// Read a numeric form threshold.
///
/// Accepts leading whitespace, an optional sign and a run of digits; any
/// trailing text is ignored. Returns `None` when no digits lead the input,
/// which the filter treats as "no constraint". Digit runs beyond the `i64`
/// range saturate.
pub fn parse_threshold(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let value = rest[..digits_end].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}
