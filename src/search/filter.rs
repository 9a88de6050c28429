use crate::models::Property;
use crate::search::types::{Amenity, SearchCriteria};
use tracing::debug;

/// Narrow `properties` to those matching every active predicate in `criteria`.
///
/// `None` means no filters are active and returns the collection unchanged.
/// Input order is preserved.
pub fn filter_properties(
    properties: &[Property],
    criteria: Option<&SearchCriteria>,
) -> Vec<Property> {
    let Some(criteria) = criteria else {
        return properties.to_vec();
    };
    if !criteria.is_active() {
        debug!("No active filters, keeping all {} properties", properties.len());
        return properties.to_vec();
    }

    let filtered: Vec<Property> = properties
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect();

    debug!(
        "Filtered {} properties down to {}",
        properties.len(),
        filtered.len()
    );
    filtered
}

/// Whether a single property satisfies every active predicate
pub fn matches(property: &Property, criteria: &SearchCriteria) -> bool {
    matches_location(property, criteria)
        && matches_type(property, criteria)
        && matches_price(property, criteria)
        && matches_rooms_and_area(property, criteria)
        && matches_keywords(property, criteria)
        && matches_amenities(property, criteria)
}

fn matches_location(property: &Property, criteria: &SearchCriteria) -> bool {
    if criteria.location.trim().is_empty() {
        return true;
    }
    property
        .location_text()
        .to_lowercase()
        .contains(&criteria.location.to_lowercase())
}

fn matches_type(property: &Property, criteria: &SearchCriteria) -> bool {
    let aliases = criteria.property_type.type_aliases();
    aliases.is_empty()
        || aliases
            .iter()
            .any(|alias| property.property_type.contains(alias))
}

// A max of zero is treated as "no upper bound".
fn matches_price(property: &Property, criteria: &SearchCriteria) -> bool {
    let (min, max) = criteria.price_range;
    !(property.price < min || (max > 0 && property.price > max))
}

fn matches_rooms_and_area(property: &Property, criteria: &SearchCriteria) -> bool {
    let at_least = |value: u32, threshold: Option<i64>| {
        threshold.map_or(true, |t| i64::from(value) >= t)
    };
    at_least(property.beds, criteria.min_beds())
        && at_least(property.baths, criteria.min_baths())
        && at_least(property.square_feet, criteria.min_square_feet())
}

fn matches_keywords(property: &Property, criteria: &SearchCriteria) -> bool {
    let tokens = criteria.keyword_tokens();
    if tokens.is_empty() {
        return true;
    }
    let haystack = property.keyword_text().to_lowercase();
    tokens.iter().all(|token| haystack.contains(token.as_str()))
}

// Ids outside the amenity vocabulary do not constrain the result.
fn matches_amenities(property: &Property, criteria: &SearchCriteria) -> bool {
    criteria
        .amenities
        .iter()
        .filter_map(|id| Amenity::from_id(id))
        .all(|amenity| property.has_feature(amenity.feature_label()))
}
