use crate::MAX_HEADING_LEVEL;
use crate::chapter::Heading;

const FENCE_PREFIXES: [&str; 2] = ["```", "~~~"];

/// What a single line is, looked at in isolation.
///
/// A line is never both a fence delimiter and a heading, so callers
/// tracking fence state cannot see a contradictory classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Text,
    Fence,
    Heading(Heading),
}

/// Classify one raw input line. The line may carry its `\n` or `\r\n`
/// terminator; it is ignored for matching and never altered.
pub fn classify_line(raw: &str) -> LineKind {
    let line = raw.trim_end_matches(['\r', '\n']);

    if FENCE_PREFIXES.iter().any(|p| line.starts_with(p)) {
        return LineKind::Fence;
    }

    match detect_heading(line) {
        Some(heading) => LineKind::Heading(heading),
        None => LineKind::Text,
    }
}

/// ATX rule: up to three leading spaces, one to six `#`, then either
/// nothing or a space/tab before the title text.
fn detect_heading(line: &str) -> Option<Heading> {
    let unindented = line.trim_start_matches(' ');
    if line.len() - unindented.len() > 3 {
        return None;
    }

    let rest = unindented.trim_start_matches('#');
    let level = unindented.len() - rest.len();
    if level == 0 || level > MAX_HEADING_LEVEL as usize {
        return None;
    }
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }

    // Trailing `#` runs are decoration, not title text.
    let title = rest.trim().trim_end_matches('#').trim_end();

    Some(Heading {
        level: level as u8,
        title: title.to_string(),
    })
}
