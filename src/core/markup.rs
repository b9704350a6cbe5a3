//! Inline markup for message text.
//!
//! Only two conversions exist: `\n` starts a new line, and text wrapped in a
//! `**` pair is bold. Pairs match leftmost-first and non-greedy, a bold run
//! may continue across a line break, and a `**` with no partner stays literal.
//! Output is render-agnostic; the TUI maps it onto ratatui spans.

const BOLD_MARKER: &str = "**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub text: String,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkupLine {
    pub spans: Vec<Inline>,
}

impl MarkupLine {
    fn push(&mut self, text: &str, bold: bool) {
        if text.is_empty() {
            return;
        }
        // Merge with the previous run when the style matches.
        if let Some(last) = self.spans.last_mut()
            && last.bold == bold
        {
            last.text.push_str(text);
            return;
        }
        self.spans.push(Inline {
            text: text.to_string(),
            bold,
        });
    }

    /// Concatenated text of the line, without styling.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Splits `text` into styled runs, tagging each run bold or plain.
fn bold_runs(text: &str) -> Vec<(&str, bool)> {
    let mut runs = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(BOLD_MARKER) {
        let after_open = &rest[open + BOLD_MARKER.len()..];
        let Some(close) = after_open.find(BOLD_MARKER) else {
            break;
        };
        runs.push((&rest[..open], false));
        runs.push((&after_open[..close], true));
        rest = &after_open[close + BOLD_MARKER.len()..];
    }
    runs.push((rest, false));
    runs
}

/// Converts message text into lines of styled inline runs.
pub fn parse(text: &str) -> Vec<MarkupLine> {
    let mut lines = vec![MarkupLine::default()];

    for (run, bold) in bold_runs(text) {
        let mut pieces = run.split('\n');
        if let Some(first) = pieces.next()
            && let Some(line) = lines.last_mut()
        {
            line.push(first, bold);
        }
        for piece in pieces {
            let mut line = MarkupLine::default();
            line.push(piece, bold);
            lines.push(line);
        }
    }

    lines
}
