use super::{ANALYSIS_BANNER, ANALYSIS_FOOTER, Reporter};
use colored::*;

/// Prints to stdout. Analysis text is rendered as markdown unless `plain`.
pub struct TerminalReporter {
    plain: bool,
    skin: termimad::MadSkin,
}

impl TerminalReporter {
    pub fn new(plain: bool) -> Self {
        Self {
            plain,
            skin: termimad::MadSkin::default(),
        }
    }
}

impl Reporter for TerminalReporter {
    fn info(&mut self, message: &str) {
        println!("{} {}", "[+]".green(), message);
    }

    fn warn(&mut self, message: &str) {
        println!("{} {}", "[!]".yellow(), message);
    }

    fn analysis(&mut self, source_label: &str, text: &str) {
        println!();
        println!("{}", ANALYSIS_BANNER.bright_black());
        println!("{}", source_label.bright_black());
        println!();

        if self.plain {
            println!("{}", text);
        } else {
            self.skin.print_text(text);
        }

        println!();
        println!("{}", ANALYSIS_FOOTER.bright_black());
        println!();
    }
}
