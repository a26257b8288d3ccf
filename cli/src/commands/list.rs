use super::{AppContext, ArcCommand, Outcome};
use crate::output::colorize::{Colorize, ColorizeBookmark};
use arcmarks::convert::load_bookmarks;
use arcmarks::error::Result;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand {
    pub json: bool,
}

impl ArcCommand for ListCommand {
    fn execute(&self, ctx: &AppContext) -> Result<Outcome> {
        let (bookmarks, stats) = load_bookmarks(ctx.input)?;
        debug!("Extraction stats: {:?}", stats);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&bookmarks)?);
            return Ok(Outcome::Done);
        }

        if bookmarks.is_empty() {
            eprintln!("No bookmarks found in {}", ctx.input.display());
            return Ok(Outcome::Done);
        }

        for (index, bookmark) in bookmarks.iter().enumerate() {
            let entry = ColorizeBookmark {
                index: index + 1,
                bookmark,
            };
            if ctx.color {
                print!("{}", entry.to_colored());
            } else {
                print!("{}", entry.to_plain());
            }
        }
        Ok(Outcome::Done)
    }
}
