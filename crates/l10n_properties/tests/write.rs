use l10n_properties::error::Result;
use l10n_properties::read::PropertiesReader;
use l10n_properties::types::PropertyTable;
use l10n_properties::write::{to_string, PropertiesWriter, PropertiesWriterOptions};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn round_trip(table: &PropertyTable, options: PropertiesWriterOptions) -> Result<PropertyTable> {
    let text = to_string(table, options);
    Ok(PropertiesReader::from_str(&text)?.into_table())
}

#[traced_test]
#[test]
fn round_trip_plain_entries() -> Result<()> {
    let table = PropertyTable::from([("app.title", "My App"), ("app.exit", "Quit"), ("9", "numeric key")]);

    assert_eq!(round_trip(&table, PropertiesWriterOptions::default())?, table);
    Ok(())
}

#[traced_test]
#[test]
fn round_trip_hostile_characters() -> Result<()> {
    let table = PropertyTable::from([
        ("spaced key", "  padded  "),
        ("sep=key:chars", "value with = and : and # and !"),
        ("controls", "line\nbreak\ttab\rreturn\u{000C}feed"),
        ("backslash", "C:\\Users\\nobody"),
        ("comment#key", "! not a comment"),
    ]);

    assert_eq!(round_trip(&table, PropertiesWriterOptions::default())?, table);
    Ok(())
}

#[traced_test]
#[test]
fn round_trip_unicode_both_modes() -> Result<()> {
    let table = PropertyTable::from([
        ("greeting", "こんにちは"),
        ("emoji", "smile 😀 frown 🙁"),
        ("accents", "üéñ"),
    ]);

    for escape_unicode in [true, false] {
        let options = PropertiesWriterOptions::builder()
            .escape_unicode(escape_unicode)
            .build();
        assert_eq!(round_trip(&table, options)?, table, "escape_unicode={escape_unicode}");
    }
    Ok(())
}

#[traced_test]
#[test]
fn round_trip_preserves_order_and_duplicate_policy() -> Result<()> {
    let mut table = PropertyTable::from([("z", "1"), ("a", "2")]);
    // last-wins update keeps z in front, same policy the parser applies
    table.insert("z", "3");

    let text = to_string(&table, PropertiesWriterOptions::default());
    let parsed = PropertiesReader::from_str(&text)?;

    let entries: Vec<_> = parsed.entries().collect();
    assert_eq!(entries, vec![("z", "3"), ("a", "2")]);
    Ok(())
}

#[traced_test]
#[test]
fn comments_do_not_round_trip_into_entries() -> Result<()> {
    let mut writer = PropertiesWriter::new(Vec::new(), PropertiesWriterOptions::default());
    writer.write_comment("header\nwith a second line")?;
    writer.write_entry("key", "value")?;

    let buf = writer.finish()?;
    let parsed = PropertiesReader::new(buf.as_slice())?;

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.get("key"), Some("value"));
    Ok(())
}

#[traced_test]
#[test]
fn serialized_form_is_stable() -> Result<()> {
    let table = PropertyTable::from([("one line", "This is one line"), ("unicode", "ü")]);

    assert_eq!(
        to_string(&table, PropertiesWriterOptions::default()),
        "one\\ line=This is one line\nunicode=\\u00FC\n",
    );
    Ok(())
}
