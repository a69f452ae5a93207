pub mod terminal;

pub use terminal::TerminalReporter;

pub const ANALYSIS_BANNER: &str = "========== ANALYSIS ==========";
pub const ANALYSIS_FOOTER: &str = "==============================";

/// Where the pipeline sends everything the user sees.
pub trait Reporter {
    /// `[+]` status line
    fn info(&mut self, message: &str);
    /// `[!]` recovered failure
    fn warn(&mut self, message: &str);
    /// Backend reply for one input, framed by the ANALYSIS markers
    fn analysis(&mut self, source_label: &str, text: &str);
}

/// One line of captured output.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Info(String),
    Warn(String),
    Analysis { source: String, text: String },
}

/// Reporter that records instead of printing.
#[derive(Debug, Default)]
pub struct Transcript {
    pub entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyses(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Analysis { source, text } => Some((source.as_str(), text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Warn(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Renders the transcript the way the plain terminal would.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                Entry::Info(m) => out.push_str(&format!("[+] {}\n", m)),
                Entry::Warn(m) => out.push_str(&format!("[!] {}\n", m)),
                Entry::Analysis { text, .. } => out.push_str(&frame_analysis(text)),
            }
        }
        out
    }
}

impl Reporter for Transcript {
    fn info(&mut self, message: &str) {
        self.entries.push(Entry::Info(message.to_string()));
    }

    fn warn(&mut self, message: &str) {
        self.entries.push(Entry::Warn(message.to_string()));
    }

    fn analysis(&mut self, source_label: &str, text: &str) {
        self.entries.push(Entry::Analysis {
            source: source_label.to_string(),
            text: text.to_string(),
        });
    }
}

/// The analysis text between the fixed banner and footer.
pub fn frame_analysis(text: &str) -> String {
    format!("\n{}\n\n{}\n\n{}\n\n", ANALYSIS_BANNER, text, ANALYSIS_FOOTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_analysis_markers() {
        let framed = frame_analysis("body");
        let banner = framed.find(ANALYSIS_BANNER).unwrap();
        let body = framed.find("body").unwrap();
        let footer = framed.rfind(ANALYSIS_FOOTER).unwrap();
        assert!(banner < body && body < footer);
    }

    #[test]
    fn test_transcript_render() {
        let mut t = Transcript::new();
        t.info("Processing a.js");
        t.warn("Failed fetching b.js: boom");
        assert_eq!(t.render(), "[+] Processing a.js\n[!] Failed fetching b.js: boom\n");
        assert_eq!(t.warnings(), vec!["Failed fetching b.js: boom"]);
    }
}
