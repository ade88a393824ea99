//! Markdown output for the terminal.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Prints cook plans and status lines, styled or as raw markdown.
pub struct TerminalRenderer {
    /// `None` prints the markdown untouched.
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            skin: rich_enabled.then(Self::ember_skin),
        }
    }

    fn ember_skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::DarkRed);
        skin.headers[0].set_fg(Color::Red);
        skin.bold.set_fg(Color::Yellow);
        // Relative offsets ("_2h before serving_") are the only italics.
        skin.italic.set_fg(Color::DarkYellow);
        skin
    }

    pub fn is_rich(&self) -> bool {
        self.skin.is_some()
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        match &self.skin {
            Some(skin) => skin.print_text(markdown),
            None => print!("{markdown}"),
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
