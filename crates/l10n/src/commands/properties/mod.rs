pub mod diff;
pub mod dump;
pub mod merge;

#[derive(clap::Subcommand)]
pub enum PropertiesCommands {
    /// Compare two properties files
    Diff(diff::DiffArgs),
    /// Print the entries of a properties file
    Dump(dump::DumpArgs),
    /// Fill a locale file with entries missing from a reference file
    Merge(merge::MergeArgs),
}

impl PropertiesCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            PropertiesCommands::Diff(diff) => diff.handle(),
            PropertiesCommands::Dump(dump) => dump.handle(),
            PropertiesCommands::Merge(merge) => merge.handle(),
        }
    }
}
