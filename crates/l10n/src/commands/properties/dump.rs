use clap::Args;
use l10n_properties::PropertiesReader;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, path::PathBuf};

#[derive(Args)]
pub struct DumpArgs {
    /// An input properties file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Emit the entries as a JSON object instead of key/value lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl DumpArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let properties = PropertiesReader::new(f)?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(properties.table()).into_diagnostic()?
            );
        } else {
            for (key, value) in properties.entries() {
                println!("{}: {}", key, value);
            }
        }

        Ok(())
    }
}
