use crate::core::builder::build_profile;
use crate::domain::model::{LookupTables, Profile};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::render;
use crate::utils::error::{ProfileError, Result};
use chrono::Local;

/// Runs the full flow: load the lookup tables, build a profile per
/// configured subject, write the requested output formats. All paths are
/// resolved by the storage implementation.
pub struct ProfileEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ProfileEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run(&self) -> Result<Vec<String>> {
        println!("Loading lookup tables...");
        let tables = self.load_tables()?;
        tracing::info!(
            "Loaded {} zodiac trait entries and {} numerology entries",
            tables.zodiac_traits.len(),
            tables.numerology.len()
        );

        let subjects = self.config.subjects();
        println!("Building {} profile(s)...", subjects.len());
        let today = Local::now().date_naive();

        let mut outputs = Vec::new();
        let mut first_error = None;
        let mut built = 0usize;

        for subject in &subjects {
            match build_profile(&subject.name, &subject.dob, &tables, today) {
                Ok(profile) => {
                    tracing::info!(
                        "Profile built: {} ({}, life path {})",
                        profile.name,
                        profile.zodiac,
                        profile.life_path
                    );
                    outputs.extend(self.write_outputs(&profile)?);
                    built += 1;
                }
                Err(e) => {
                    // One bad birth date must not sink the rest of a batch.
                    tracing::warn!("Skipping {}: {}", subject.name, e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        if built == 0 {
            return Err(first_error.unwrap_or(ProfileError::ConfigError {
                message: "no subjects configured".to_string(),
            }));
        }

        println!("Built {} of {} profile(s)", built, subjects.len());
        Ok(outputs)
    }

    fn load_tables(&self) -> Result<LookupTables> {
        tracing::debug!("Reading zodiac traits from: {}", self.config.traits_file());
        let traits_raw = self.storage.read_file(self.config.traits_file())?;

        tracing::debug!(
            "Reading numerology descriptions from: {}",
            self.config.numerology_file()
        );
        let numerology_raw = self.storage.read_file(self.config.numerology_file())?;

        LookupTables::from_json(&traits_raw, &numerology_raw)
    }

    fn write_outputs(&self, profile: &Profile) -> Result<Vec<String>> {
        let slug = slugify(&profile.name);
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let (file_name, bytes) = match format.as_str() {
                "html" => (
                    format!("{}.html", slug),
                    render::render_page(profile).into_bytes(),
                ),
                "json" => (format!("{}.json", slug), serde_json::to_vec_pretty(profile)?),
                other => {
                    tracing::warn!("Unknown output format '{}', skipping", other);
                    continue;
                }
            };

            let path = format!(
                "{}/{}",
                self.config.output_path().trim_end_matches('/'),
                file_name
            );
            self.storage.write_file(&path, &bytes)?;
            tracing::debug!("Wrote {}", path);
            written.push(path);
        }

        Ok(written)
    }
}

/// File-name slug from a person's name: lowercase alphanumeric runs joined
/// by single dashes. Empty names collapse to "profile".
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    for ch in name.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "profile".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Subject;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self::default()
        }

        fn insert(&self, path: &str, data: &[u8]) {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                ProfileError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    path.to_string(),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.insert(path, data);
            Ok(())
        }
    }

    struct MockConfig {
        subjects: Vec<Subject>,
        formats: Vec<String>,
    }

    impl MockConfig {
        fn new(subjects: Vec<Subject>, formats: &[&str]) -> Self {
            Self {
                subjects,
                formats: formats.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn traits_file(&self) -> &str {
            "tables/traits.json"
        }

        fn numerology_file(&self) -> &str {
            "tables/numerology.json"
        }

        fn output_path(&self) -> &str {
            "out"
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn subjects(&self) -> Vec<Subject> {
            self.subjects.clone()
        }
    }

    fn storage_with_tables() -> MockStorage {
        let storage = MockStorage::new();
        storage.insert(
            "tables/traits.json",
            br#"{"Taurus": {"element": "Earth"}}"#,
        );
        storage.insert("tables/numerology.json", br#"{"3": "Creative."}"#);
        storage
    }

    fn subject(name: &str, dob: &str) -> Subject {
        Subject {
            name: name.to_string(),
            dob: dob.to_string(),
        }
    }

    #[test]
    fn runs_end_to_end_and_writes_both_formats() {
        let storage = storage_with_tables();
        let config = MockConfig::new(vec![subject("Ann Lee", "15/05/1990")], &["html", "json"]);
        let engine = ProfileEngine::new(storage.clone(), config);

        let outputs = engine.run().unwrap();
        assert_eq!(outputs, vec!["out/ann-lee.html", "out/ann-lee.json"]);

        let html = String::from_utf8(storage.get_file("out/ann-lee.html").unwrap()).unwrap();
        assert!(html.contains("Ann Lee"));
        assert!(html.contains("Taurus"));

        let json = storage.get_file("out/ann-lee.json").unwrap();
        let profile: Profile = serde_json::from_slice(&json).unwrap();
        assert_eq!(profile.life_path, 3);
        assert_eq!(profile.zodiac, "Taurus");
    }

    #[test]
    fn bad_date_in_a_batch_is_skipped() {
        let storage = storage_with_tables();
        let config = MockConfig::new(
            vec![
                subject("Ann", "15/05/1990"),
                subject("Bob", "not a date"),
                subject("Cleo", "01-01-2000"),
            ],
            &["json"],
        );
        let engine = ProfileEngine::new(storage.clone(), config);

        let outputs = engine.run().unwrap();
        assert_eq!(outputs.len(), 2);
        assert!(storage.get_file("out/bob.json").is_none());
    }

    #[test]
    fn all_subjects_failing_surfaces_the_first_error() {
        let storage = storage_with_tables();
        let config = MockConfig::new(vec![subject("Ann", "never")], &["json"]);
        let engine = ProfileEngine::new(storage, config);

        let err = engine.run().unwrap_err();
        assert!(matches!(err, ProfileError::DateParseError { .. }));
        assert!(err.to_string().contains("never"));
    }

    #[test]
    fn missing_table_file_fails_before_any_profile() {
        let storage = MockStorage::new();
        let config = MockConfig::new(vec![subject("Ann", "15/05/1990")], &["json"]);
        let engine = ProfileEngine::new(storage, config);

        assert!(matches!(
            engine.run().unwrap_err(),
            ProfileError::IoError(_)
        ));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Ann Lee"), "ann-lee");
        assert_eq!(slugify("  Ann   Lee  "), "ann-lee");
        assert_eq!(slugify("Anne-Marie O'Neil"), "anne-marie-oneil");
        assert_eq!(slugify("???"), "profile");
    }
}
