pub mod builder;
pub mod date;
pub mod engine;
pub mod narrative;
pub mod numerology;
pub mod zodiac;

pub use crate::domain::model::{LookupTables, Profile, Subject};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
