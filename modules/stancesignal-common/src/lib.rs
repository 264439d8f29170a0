pub mod types;
pub mod catalog;
pub mod attributes;
pub mod safety;
pub mod config;
pub mod error;
pub mod quality;

pub use types::*;
pub use attributes::{map_attributes, RawAttributes};
pub use safety::*;
pub use config::Config;
pub use error::StanceSignalError;
pub use quality::*;
