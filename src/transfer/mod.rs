//! Course transferability scoring.
//!
//! - `validation`: Required-field checks on the four inputs
//! - `pipeline`: Embeds both pairs, compares them, combines the similarities
//! - `combiner`: Fixed logistic model and interpretation bands
//! - `report`: Result type and console formatting
//! - `service`: Lazily loads and caches the embedding model

pub mod combiner;
pub mod errors;
pub mod pipeline;
pub mod report;
pub mod service;
pub mod validation;

pub use errors::TransferError;
pub use report::TransferReport;
pub use service::TransferService;
pub use validation::{validate_similarity, CourseInputs};
