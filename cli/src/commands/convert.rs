use super::{AppContext, ArcCommand, Outcome};
use crate::output::colorize::{paint_error, paint_success, paint_warning};
use arcmarks::convert::{convert, ConvertOptions};
use arcmarks::error::Result;
use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertCommand;

const IMPORT_INSTRUCTIONS: &[&str] = &[
    "1. In Chrome: Open Bookmarks Manager (⌘⇧B) -> Click three dots -> Import bookmarks",
    "2. In Firefox: Open Library (⌘⇧B) -> Import and Backup -> Import Bookmarks from HTML",
];

impl ArcCommand for ConvertCommand {
    fn execute(&self, ctx: &AppContext) -> Result<Outcome> {
        let options = ConvertOptions::from(ctx.config);

        match convert(ctx.input, &ctx.config.output, &options) {
            Ok(report) => {
                debug!("Extraction stats: {:?}", report.stats);
                if report.stats.cycles_cut > 0 {
                    warn!(
                        "Skipped {} cyclic folder references",
                        report.stats.cycles_cut
                    );
                }
                if report.is_empty() {
                    eprintln!(
                        "{}",
                        paint_warning("Warning: No bookmarks found in the file", ctx.color)
                    );
                }
                let message = format!(
                    "Successfully converted {} bookmarks to {}",
                    report.count,
                    report.output.display()
                );
                println!("{}", paint_success(&message, ctx.color));
                println!("\nTo import these bookmarks:");
                for line in IMPORT_INSTRUCTIONS {
                    println!("{}", line);
                }
                Ok(Outcome::Done)
            }
            Err(e) => {
                eprintln!("{}", paint_error(&format!("Error: {}", e), ctx.color));
                eprintln!("Conversion failed");
                Ok(Outcome::Failed)
            }
        }
    }
}
