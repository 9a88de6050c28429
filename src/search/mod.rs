pub mod filter;
pub mod types;

pub use filter::{filter_properties, matches};
pub use types::{
    location_suggestions, Amenity, CriteriaError, PropertyCategory, Purpose, SearchCriteria,
    LOCATION_SUGGESTIONS,
};
