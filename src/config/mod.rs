pub mod profile;

pub use profile::Profile;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "tagline")]
#[command(about = "Prints a project tagline header with computed score statistics")]
pub struct CliConfig {
    #[arg(long, help = "Run the built-in self-check instead of printing the tagline")]
    pub check: bool,

    #[arg(long, help = "Read the tagline aloud after printing it")]
    pub speak: bool,

    #[arg(long, value_name = "FILE", help = "Load profile overrides from a TOML file")]
    pub profile: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
