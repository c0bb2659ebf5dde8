use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One person to build a profile for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub dob: String,
}

/// The computed astrology/numerology profile. `dob` keeps the raw input
/// string; the derived fields come from the parsed date and the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub dob: String,
    pub age: i32,
    pub weekday: String,
    pub zodiac: String,
    pub life_path: u32,
    pub life_path_desc: String,
    pub destiny: u32,
    pub destiny_desc: String,
    pub traits: HashMap<String, serde_json::Value>,
    pub lucky_number: u32,
    pub personal_year: u32,
    pub future_prediction: String,
    pub remedies: String,
    pub marriage_life: String,
}

/// The two externally supplied lookup tables, loaded once at startup and
/// read-only afterwards. `zodiac_traits` is keyed by sign name,
/// `numerology` by stringified number ("1".."9", "11", "22", "33").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupTables {
    pub zodiac_traits: HashMap<String, HashMap<String, serde_json::Value>>,
    pub numerology: HashMap<String, String>,
}

impl LookupTables {
    pub fn from_json(traits_raw: &[u8], numerology_raw: &[u8]) -> Result<Self> {
        let zodiac_traits = serde_json::from_slice(traits_raw)?;
        let numerology = serde_json::from_slice(numerology_raw)?;
        Ok(Self {
            zodiac_traits,
            numerology,
        })
    }
}
