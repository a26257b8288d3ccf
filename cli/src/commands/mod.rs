use arcmarks::config::Config;
use arcmarks::error::Result;
use std::path::Path;
use std::process::ExitCode;

pub struct AppContext<'a> {
    pub config: &'a Config,
    /// Resolved export path
    pub input: &'a Path,
    pub color: bool,
}

pub mod convert;
pub mod list;

/// How a command finished when it did not hand an error back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The command already printed its own failure message
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

pub trait ArcCommand {
    /// Errors the command has already reported come back as
    /// `Outcome::Failed`; anything returned as `Err` is left to the caller.
    fn execute(&self, ctx: &AppContext) -> Result<Outcome>;
}

/// Enum-based dispatch for commands (avoids Box<dyn ArcCommand>)
pub enum CommandEnum {
    Convert(convert::ConvertCommand),
    List(list::ListCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<Outcome> {
        match self {
            Self::Convert(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
        }
    }
}
