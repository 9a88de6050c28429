//! Property search engine: a criteria filter and a paginator over an
//! in-memory collection of listings, plus the sources that supply it.
//!
//! The two core operations are pure and compose only in the caller:
//!
//! ```
//! use propspotter::{filter_properties, paginate, SampleGenerator, SearchCriteria};
//!
//! let properties = SampleGenerator::new(40).with_seed(3).generate();
//! let criteria = SearchCriteria { price_range: (0, 0), bedrooms: "2".into(), ..Default::default() };
//! let matches = filter_properties(&properties, Some(&criteria));
//! let page = paginate(&matches, 1, 8);
//! assert!(page.items.len() <= 8);
//! ```

pub mod cli;
pub mod format;
pub mod models;
pub mod pagination;
pub mod search;
pub mod sources;

pub use models::{Agent, ListingStatus, Property, SchemaError};
pub use pagination::{paginate, PageMeta, PageRequest, PageResult, PageWindow};
pub use search::{filter_properties, Amenity, PropertyCategory, SearchCriteria};
pub use sources::{JsonFileSource, PropertySource, SampleGenerator};
