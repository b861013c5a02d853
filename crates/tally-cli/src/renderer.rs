//! Terminal rendering for the markdown produced by `tally-core`.
//!
//! Rich output goes through a termimad skin, which also lays out the
//! schedule and risk tables; `--no-color` prints the markdown unchanged.

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
    }

    /// Render several markdown sections separated by blank lines
    pub fn render_all<I, S>(&self, sections: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = sections
            .into_iter()
            .map(|section| section.as_ref().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n\n");
        self.render(&format!("{text}\n"));
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
