pub mod chapter;
pub mod classify;
pub mod scan;

pub use chapter::{Chapter, Heading};
pub use classify::{LineKind, classify_line};
pub use scan::{ChapterBuilder, Chapters, split_by_heading};

/// Deepest heading level ATX syntax allows.
pub const MAX_HEADING_LEVEL: u8 = 6;
