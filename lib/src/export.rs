use crate::error::Result;
use crate::models::Bookmark;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub const DEFAULT_FOLDER_TITLE: &str = "Arc Browser Bookmarks";

/// Trait for rendering bookmarks into an importable file format
pub trait BookmarkExporter {
    fn render(&self, bookmarks: &[Bookmark]) -> String;

    fn export(&self, bookmarks: &[Bookmark], path: &Path) -> Result<()> {
        fs::write(path, self.render(bookmarks))?;
        Ok(())
    }
}

/// Netscape Bookmark File exporter
///
/// All bookmarks land in a single toolbar folder. Title and URL are written
/// verbatim unless `escape_html` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetscapeExporter {
    pub folder_title: String,
    pub escape_html: bool,
}

impl Default for NetscapeExporter {
    fn default() -> Self {
        Self {
            folder_title: DEFAULT_FOLDER_TITLE.to_string(),
            escape_html: false,
        }
    }
}

impl NetscapeExporter {
    pub fn new(folder_title: impl Into<String>, escape_html: bool) -> Self {
        Self {
            folder_title: folder_title.into(),
            escape_html,
        }
    }

    /// Render with an explicit folder `ADD_DATE`
    pub fn render_at(&self, bookmarks: &[Bookmark], timestamp: i64) -> String {
        let mut html = String::with_capacity(512 + bookmarks.len() * 96);

        html.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
        html.push_str("<!-- This is an automatically generated file.\n");
        html.push_str("     It will be read and overwritten.\n");
        html.push_str("     DO NOT EDIT! -->\n");
        html.push_str("<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n");
        html.push_str("<TITLE>Bookmarks</TITLE>\n");
        html.push_str("<H1>Bookmarks</H1>\n");
        html.push_str("<DL><p>\n");
        let _ = write!(
            html,
            "    <DT><H3 ADD_DATE=\"{}\" PERSONAL_TOOLBAR=\"true\">{}</H3>\n    <DL><p>",
            timestamp,
            self.text(&self.folder_title)
        );

        for bookmark in bookmarks {
            let _ = write!(
                html,
                "\n        <DT><A HREF=\"{}\" ADD_DATE=\"{}\">{}</A>",
                self.text(&bookmark.url),
                bookmark.add_date,
                self.text(&bookmark.title)
            );
        }

        html.push_str("\n    </DL><p>\n</DL><p>");
        html
    }

    fn text<'s>(&self, s: &'s str) -> std::borrow::Cow<'s, str> {
        if self.escape_html {
            escape_html(s).into()
        } else {
            s.into()
        }
    }
}

impl BookmarkExporter for NetscapeExporter {
    fn render(&self, bookmarks: &[Bookmark]) -> String {
        self.render_at(bookmarks, chrono::Utc::now().timestamp())
    }
}

/// Render bookmarks in the legacy layout: default folder title, no escaping
pub fn serialize(bookmarks: &[Bookmark]) -> String {
    NetscapeExporter::default().render(bookmarks)
}

/// Escape the characters that would break an attribute value or element text
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
