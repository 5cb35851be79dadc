use std::io::Write;
use tagline::utils::validation::Validate;
use tagline::{Profile, TaglineError};
use tempfile::NamedTempFile;

#[test]
fn test_load_profile_from_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
project_name = "Orbit Metrics"
author = "J. Ngata"
motto = "Ship the numbers."
year_started = 2018
current_year = 2026
satisfaction_scores = [4.2, 4.4, 4.9]
"#
    )
    .unwrap();

    let profile = Profile::from_file(file.path()).unwrap();

    assert_eq!(profile.project_name, "Orbit Metrics");
    assert_eq!(profile.author, "J. Ngata");
    assert_eq!(profile.satisfaction_scores, vec![4.2, 4.4, 4.9]);
    // Fields absent from the file keep their defaults.
    assert_eq!(profile.location, "Dallas, TX");
    assert!(profile.validate().is_ok());
}

#[test]
fn test_missing_profile_file_is_an_io_error() {
    let result = Profile::from_file("/nonexistent/profile.toml");
    assert!(matches!(result, Err(TaglineError::IoError(_))));
}

#[test]
fn test_invalid_profile_file_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "satisfaction_scores = \"not a list\"").unwrap();

    let result = Profile::from_file(file.path());
    assert!(matches!(result, Err(TaglineError::TomlError(_))));
}
