// Core engine for the SearCh client - everything the screens compute lives here
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod notifications;
pub mod profile;
pub mod remote;
pub mod source;
pub mod status;

pub use catalog::Catalog;
pub use config::Config;
pub use error::Error;
pub use models::{DerivedStatus, FilterCriteria, FilteredRecord, Scholarship};
pub use profile::{Enrollment, Profile, ProfileUpdate};
pub use remote::RemoteSource;
pub use source::RecordSource;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
