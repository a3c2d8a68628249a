use clap::Args;
use l10n_properties::write::{PropertiesWriter, PropertiesWriterOptions};
use l10n_properties::PropertiesReader;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, path::PathBuf};
use tracing::info;

#[derive(Args)]
pub struct MergeArgs {
    /// A reference properties file supplying the complete set of entries
    #[arg(short, long, value_name = "FILE")]
    reference: PathBuf,

    /// A locale properties file whose entries take precedence
    #[arg(short, long, value_name = "FILE")]
    locale: PathBuf,

    /// A target properties file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,

    /// Write characters above U+007E as \uXXXX escapes
    #[arg(long, default_value_t = false)]
    escape_unicode: bool,
}

impl MergeArgs {
    pub fn handle(&self) -> Result<()> {
        let reference = PropertiesReader::new(
            File::open(&self.reference)
                .into_diagnostic()
                .context(format!("path: {}", &self.reference.display()))?,
        )?;

        let locale = PropertiesReader::new(
            File::open(&self.locale)
                .into_diagnostic()
                .context(format!("path: {}", &self.locale.display()))?,
        )?;

        // locale entries keep their order, untranslated reference entries are appended
        let mut merged = locale.into_table();
        let mut filled = 0usize;
        for (key, value) in reference.entries() {
            if !merged.contains_key(key) {
                merged.insert(key, value);
                filled += 1;
            }
        }
        info!("filling {} missing entries", filled);

        let out = if !self.overwrite {
            File::create_new(&self.output)
                .into_diagnostic()
                .context(format!("creating {}", &self.output.display()))?
        } else {
            File::create(&self.output)
                .into_diagnostic()
                .context(format!("creating {}", &self.output.display()))?
        };

        let mut writer = PropertiesWriter::new(
            out,
            PropertiesWriterOptions::builder()
                .escape_unicode(self.escape_unicode)
                .build(),
        );
        writer.write_table(&merged)?;
        writer.finish().context("finalizing properties file")?;

        Ok(())
    }
}
