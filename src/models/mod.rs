use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Listing status shown on a property card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "Under Contract")]
    UnderContract,
}

/// Listing agent contact details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Core property data model
///
/// Records are immutable once generated; filtering and pagination produce
/// new collections instead of editing these in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Open-ended type label such as "Apartment" or "Villa"
    #[serde(rename = "type")]
    pub property_type: String,
    pub price: u64,
    #[serde(default)]
    pub price_per_sq_ft: u64,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub beds: u32,
    pub baths: u32,
    pub square_feet: u32,
    #[serde(default)]
    pub year_built: Option<u16>,
    pub features: Vec<String>,
    pub status: ListingStatus,
    #[serde(default)]
    pub favorite: bool,
    #[serde(with = "listed_date")]
    pub listed_date: NaiveDate,
    pub image: String,
    pub agent: Agent,
}

/// Listing dates as shown on cards, e.g. "Mar 01, 2024"
pub const LISTED_DATE_FORMAT: &str = "%b %d, %Y";

// ISO dates are also accepted when reading.
mod listed_date {
    use super::LISTED_DATE_FORMAT as FORMAT;
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(&raw, "%Y-%m-%d"))
            .map_err(|_| de::Error::custom(format!("invalid listing date: {}", raw)))
    }
}

/// A property record that breaks the data schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("property id must be positive")]
    ZeroId,

    #[error("property {0} has zero square feet")]
    ZeroArea(u64),

    #[error("duplicate property id: {0}")]
    DuplicateId(u64),
}

impl Property {
    /// Check the constraints the unsigned field types cannot express
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.id == 0 {
            return Err(SchemaError::ZeroId);
        }
        if self.square_feet == 0 {
            return Err(SchemaError::ZeroArea(self.id));
        }
        Ok(())
    }

    /// Text searched by the location filter
    pub fn location_text(&self) -> String {
        format!("{} {} {} {}", self.address, self.city, self.state, self.zip_code)
    }

    /// Text searched by the keyword filter
    pub fn keyword_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    pub fn has_feature(&self, label: &str) -> bool {
        self.features.iter().any(|f| f == label)
    }
}

/// Validate every record plus id uniqueness across the collection
pub fn validate_collection(properties: &[Property]) -> Result<(), SchemaError> {
    let mut seen = HashSet::with_capacity(properties.len());
    for property in properties {
        property.validate()?;
        if !seen.insert(property.id) {
            return Err(SchemaError::DuplicateId(property.id));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal valid property for tests; callers override what they need
    pub fn property(id: u64) -> Property {
        Property {
            id,
            title: format!("Listing {}", id),
            description: String::new(),
            property_type: "Apartment".to_string(),
            price: 5_000_000,
            price_per_sq_ft: 5_000,
            address: "12, Bandra".to_string(),
            city: "Mumbai".to_string(),
            state: "MH".to_string(),
            zip_code: "400050".to_string(),
            beds: 2,
            baths: 1,
            square_feet: 1_000,
            year_built: Some(2001),
            features: vec![],
            status: ListingStatus::ForSale,
            favorite: false,
            listed_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            image: format!("https://picsum.photos/seed/{}/800/600", id),
            agent: Agent {
                name: "Agent Sharma".to_string(),
                phone: "+91 9876543210".to_string(),
                email: "agent1@propspotter.in".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::property;
    use super::*;

    #[test]
    fn rejects_zero_id_and_area() {
        assert_eq!(property(0).validate(), Err(SchemaError::ZeroId));

        let mut p = property(7);
        p.square_feet = 0;
        assert_eq!(p.validate(), Err(SchemaError::ZeroArea(7)));
    }

    #[test]
    fn collection_ids_must_be_unique() {
        let props = vec![property(1), property(2), property(1)];
        assert_eq!(validate_collection(&props), Err(SchemaError::DuplicateId(1)));
        assert!(validate_collection(&props[..2]).is_ok());
    }

    #[test]
    fn serializes_with_original_field_names() {
        let json = serde_json::to_value(property(3)).unwrap();
        assert_eq!(json["type"], "Apartment");
        assert_eq!(json["zipCode"], "400050");
        assert_eq!(json["squareFeet"], 1_000);
        assert_eq!(json["status"], "For Sale");
        assert_eq!(json["listedDate"], "Mar 01, 2024");
    }

    #[test]
    fn reads_card_and_iso_listing_dates() {
        let mut json = serde_json::to_value(property(5)).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        json["listedDate"] = "Mar 01, 2024".into();
        let card: Property = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(card.listed_date, expected);

        json["listedDate"] = "2024-03-01".into();
        let iso: Property = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(iso.listed_date, expected);

        json["listedDate"] = "last week".into();
        assert!(serde_json::from_value::<Property>(json).is_err());
    }
}
