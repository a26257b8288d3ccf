use arcmarks::models::Bookmark;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
    fn to_plain(&self) -> String;
}

pub struct ColorizeBookmark<'a> {
    pub index: usize,
    pub bookmark: &'a Bookmark,
}

impl<'a> ColorizeBookmark<'a> {
    fn date(&self) -> String {
        chrono::DateTime::from_timestamp(self.bookmark.add_date, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| self.bookmark.add_date.to_string())
    }
}

impl<'a> Colorize for ColorizeBookmark<'a> {
    fn to_colored(&self) -> String {
        let mut s = String::new();
        let id = self.index.to_string();
        s.push_str(&format!(
            "{}. {}\n",
            id.bright_blue(),
            self.bookmark.title.bold().green(),
        ));
        let padding = id.len() + 3;
        // padding for alignment
        s.push_str(&format!(
            "{:>padding$} {}\n",
            ">".red(),
            self.bookmark.url.yellow()
        ));
        s.push_str(&format!("{:>padding$} {}\n", "@".red(), self.date().dimmed()));
        s
    }

    fn to_plain(&self) -> String {
        let id = self.index.to_string();
        let padding = id.len() + 3;
        format!(
            "{}. {}\n{:>padding$} {}\n{:>padding$} {}\n",
            id,
            self.bookmark.title,
            ">",
            self.bookmark.url,
            "@",
            self.date()
        )
    }
}

pub fn paint_success(message: &str, color: bool) -> String {
    if color {
        message.green().to_string()
    } else {
        message.to_string()
    }
}

pub fn paint_warning(message: &str, color: bool) -> String {
    if color {
        message.yellow().to_string()
    } else {
        message.to_string()
    }
}

pub fn paint_error(message: &str, color: bool) -> String {
    if color {
        message.red().bold().to_string()
    } else {
        message.to_string()
    }
}
