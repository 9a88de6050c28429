pub mod json;
pub mod sample;
pub mod traits;

pub use json::{save_properties, JsonFileSource};
pub use sample::SampleGenerator;
pub use traits::PropertySource;
