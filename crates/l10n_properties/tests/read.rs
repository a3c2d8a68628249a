use std::fs::File;
use std::path::PathBuf;

use l10n_properties::error::Result;
use l10n_properties::read::PropertiesReader;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

#[traced_test]
#[test]
fn parse_reference_fixture() -> Result<()> {
    // Create a path to the desired file
    let path = PathBuf::from(format!(
        "{}/resources/properties_test.properties",
        env!("CARGO_MANIFEST_DIR")
    ));

    let mut file = File::open(&path)?;
    let properties = PropertiesReader::new(&mut file)?;

    assert_eq!(properties.len(), 13);

    // whitespace around keys, separators and values is trimmed
    for key in ["1", "2", "3", "4", "5", "6", "7", "8"] {
        assert_eq!(properties.get(key), Some(key), "key {key}");
    }

    // the continued line joins with its leading whitespace stripped
    assert_eq!(
        properties.get("9"),
        Some("this is the first part of a continued line and here is the 2nd part"),
    );
    assert_eq!(properties.get("foz"), Some("baz"));

    assert_eq!(properties.get("10"), Some(""));
    assert_eq!(
        properties.get("escapes"),
        Some("tab\there newline\nhere  space"),
    );

    // a bare \u at the end of input keeps the `u` under the lenient default
    assert_eq!(properties.get("bare"), Some("ends with u"));

    Ok(())
}

#[traced_test]
#[test]
fn fixture_preserves_file_order() -> Result<()> {
    let path = PathBuf::from(format!(
        "{}/resources/properties_test.properties",
        env!("CARGO_MANIFEST_DIR")
    ));

    let properties = PropertiesReader::new(File::open(&path)?)?;

    let keys: Vec<_> = properties.entries().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "foz", "10", "escapes", "bare"],
    );

    // enumeration restarts from the top on every call
    let again: Vec<_> = properties.entries().map(|(k, _)| k).collect();
    assert_eq!(keys, again);

    Ok(())
}

#[traced_test]
#[test]
fn missing_key_lookup() -> Result<()> {
    let properties = PropertiesReader::from_str("present=value\n")?;

    assert_eq!(properties.get("present"), Some("value"));
    assert_eq!(properties.get("absent"), None);

    Ok(())
}
