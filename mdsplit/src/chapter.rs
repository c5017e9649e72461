use std::fmt;

/// An ATX heading: its level (1-6) and its cleaned title.
///
/// The title has surrounding whitespace and any trailing run of `#`
/// removed. It may be empty (`###` on a line of its own).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub title: String,
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "#".repeat(self.level as usize), self.title)
    }
}

/// A contiguous run of input lines opened by a qualifying heading, or
/// by the start of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Titles of the headings this chapter is nested under, outermost
    /// first. Always fewer entries than the heading's level.
    pub parent_headings: Vec<String>,
    /// `None` only for the chapter preceding the first heading.
    pub heading: Option<Heading>,
    /// The chapter's lines in original byte form, terminators
    /// included. The heading line itself comes first, when present.
    pub text: Vec<String>,
}

impl Chapter {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
