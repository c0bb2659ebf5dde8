pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Subject;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_output_formats, validate_path,
    Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "astro-profile")]
#[command(about = "Astrology and numerology profile generator")]
pub struct CliConfig {
    /// Full name of the person
    #[arg(long)]
    pub name: String,

    /// Birth date, e.g. 15-05-1990 or 1990-05-15
    #[arg(long)]
    pub dob: String,

    #[arg(long, default_value = "data/zodiac_traits.json")]
    pub traits_file: String,

    #[arg(long, default_value = "data/numerology.json")]
    pub numerology_file: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "html,json")]
    pub output_formats: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn traits_file(&self) -> &str {
        &self.traits_file
    }

    fn numerology_file(&self) -> &str {
        &self.numerology_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn subjects(&self) -> Vec<Subject> {
        vec![Subject {
            name: self.name.clone(),
            dob: self.dob.clone(),
        }]
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("dob", &self.dob)?;
        validate_path("output_path", &self.output_path)?;
        let table_files = [self.traits_file.clone(), self.numerology_file.clone()];
        validate_file_extensions("table_files", &table_files, &["json"])?;
        validate_output_formats("output_formats", &self.output_formats)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn sample_config() -> CliConfig {
        CliConfig {
            name: "Ann".to_string(),
            dob: "15-05-1990".to_string(),
            traits_file: "data/zodiac_traits.json".to_string(),
            numerology_file: "data/numerology.json".to_string(),
            output_path: "./output".to_string(),
            output_formats: vec!["html".to_string(), "json".to_string()],
            verbose: false,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn empty_name_or_dob_is_rejected() {
        let mut config = sample_config();
        config.name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = sample_config();
        config.dob = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_json_table_file_is_rejected() {
        let mut config = sample_config();
        config.traits_file = "data/zodiac_traits.csv".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn cli_config_yields_one_subject() {
        let subjects = sample_config().subjects();
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].name, "Ann");
    }
}
