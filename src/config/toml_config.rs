use crate::domain::model::Subject;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_output_formats, validate_path,
    Validate,
};
use serde::{Deserialize, Serialize};

/// TOML-driven batch configuration: one set of tables and output options,
/// any number of people.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchSection,
    pub tables: TablesSection,
    pub output: OutputSection,
    pub people: Vec<PersonEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesSection {
    pub traits_file: String,
    pub numerology_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntry {
    pub name: String,
    pub dob: String,
}

impl BatchConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BatchConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ConfigProvider for BatchConfig {
    fn traits_file(&self) -> &str {
        &self.tables.traits_file
    }

    fn numerology_file(&self) -> &str {
        &self.tables.numerology_file
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.output_formats
    }

    fn subjects(&self) -> Vec<Subject> {
        self.people
            .iter()
            .map(|person| Subject {
                name: person.name.clone(),
                dob: person.dob.clone(),
            })
            .collect()
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;
        validate_path("output.output_path", &self.output.output_path)?;
        let table_files = [
            self.tables.traits_file.clone(),
            self.tables.numerology_file.clone(),
        ];
        validate_file_extensions("tables", &table_files, &["json"])?;
        validate_output_formats("output.output_formats", &self.output.output_formats)?;

        if self.people.is_empty() {
            return Err(crate::utils::error::ProfileError::MissingConfigError {
                field: "people".to_string(),
            });
        }
        for person in &self.people {
            validate_non_empty_string("people.name", &person.name)?;
            validate_non_empty_string("people.dob", &person.dob)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_toml() -> &'static str {
        r#"
[batch]
name = "family"
description = "Profiles for the family"

[tables]
traits_file = "data/zodiac_traits.json"
numerology_file = "data/numerology.json"

[output]
output_path = "./output"
output_formats = ["html", "json"]

[[people]]
name = "Ann"
dob = "15-05-1990"

[[people]]
name = "Bob"
dob = "1985-11-02"
"#
    }

    #[test]
    fn parses_and_validates() {
        let config: BatchConfig = toml::from_str(sample_toml()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.subjects().len(), 2);
        assert_eq!(config.subjects()[1].name, "Bob");
    }

    #[test]
    fn empty_people_list_is_rejected() {
        let mut config: BatchConfig = toml::from_str(sample_toml()).unwrap();
        config.people.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_toml_is_a_toml_error() {
        let result: std::result::Result<BatchConfig, _> = toml::from_str("[batch");
        assert!(result.is_err());
    }
}
