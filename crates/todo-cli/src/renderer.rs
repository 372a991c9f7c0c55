//! Terminal output for todo markdown.
//!
//! Item headings are coloured by completion state; every other line goes
//! through termimad. With colour disabled the markdown is printed verbatim.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Prints rendered todo output to stdout.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

/// Colour of an item heading, picked from the status label it ends with.
fn heading_color(line: &str) -> Color {
    if line.ends_with("(✓ Done)") {
        Color::Green
    } else if line.ends_with("(○ Todo)") {
        Color::Yellow
    } else {
        Color::Cyan
    }
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::White);
        skin.italic.set_fg(Color::Grey);

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match line.strip_prefix("## ") {
                Some(heading) => {
                    let mut skin = self.skin.clone();
                    skin.bold.set_fg(heading_color(heading));
                    skin.print_inline(&format!("**{heading}**"));
                }
                None => self.skin.print_inline(line),
            }
            println!();
        }
        Ok(())
    }
}
