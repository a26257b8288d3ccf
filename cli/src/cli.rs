use crate::commands::{convert::ConvertCommand, list::ListCommand, AppContext, CommandEnum};
use arcmarks::config::Config;
use arcmarks::error::Result;
use arcmarks::utils;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Arc sidebar export (defaults to Arc's StorableSidebar.json)
    #[arg(short = 'i', long, global = true)]
    pub input: Option<PathBuf>,

    /// Bookmarks file to write
    #[arg(short = 'o', long, global = true)]
    pub output: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Name of the folder holding the exported bookmarks
    #[arg(long, global = true)]
    pub title: Option<String>,

    /// Escape HTML special characters in titles and URLs
    #[arg(long, global = true)]
    pub escape: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Convert the Arc export into a Netscape bookmarks file (default)
    Convert,

    /// Print the bookmarks found in the export without writing a file
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Fold command-line overrides into the loaded configuration
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(title) = &self.title {
            config.folder_title = title.clone();
        }
        if self.escape {
            config.escape_html = true;
        }
        config
    }
}

pub fn handle_args(cli: Cli, config: Config) -> Result<ExitCode> {
    let config = cli.apply_to(config);
    let input = config
        .input
        .clone()
        .unwrap_or_else(utils::get_default_input);

    let ctx = AppContext {
        config: &config,
        input: &input,
        color: !cli.nc,
    };

    let command = match cli.command.unwrap_or(Commands::Convert) {
        Commands::Convert => CommandEnum::Convert(ConvertCommand),
        Commands::List { json } => CommandEnum::List(ListCommand { json }),
    };

    command.execute(&ctx).map(ExitCode::from)
}
