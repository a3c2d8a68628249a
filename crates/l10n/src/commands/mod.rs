pub mod properties;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle .properties files
    Properties {
        #[command(subcommand)]
        command: properties::PropertiesCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Properties { command } => command.handle(),
        }
    }
}
