use std::mem;

use crate::chapter::{Chapter, Heading};
use crate::classify::{LineKind, classify_line};

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Single-pass scanner that groups lines into chapters.
///
/// Feed lines with [`push`](ChapterBuilder::push); each call returns the
/// chapter the line just closed, if any. [`finish`](ChapterBuilder::finish)
/// flushes the remainder, which is the only point an empty chapter can
/// come out.
#[derive(Debug)]
pub struct ChapterBuilder {
    max_level: u8,
    within_fence: bool,
    /// Titles of the open headings above the current chapter,
    /// outermost first.
    parents: Vec<String>,
    heading: Option<Heading>,
    lines: Vec<String>,
}

impl ChapterBuilder {
    pub fn new(max_level: u8) -> Self {
        ChapterBuilder {
            max_level,
            within_fence: false,
            parents: Vec::new(),
            heading: None,
            lines: Vec::new(),
        }
    }

    /// Feed the next line. A heading at or above the split level starts
    /// a new chapter (unless inside a code fence) and hands back the one
    /// it closed; the line itself always lands in the chapter being
    /// built afterwards.
    pub fn push(&mut self, line: String) -> Option<Chapter> {
        let mut closed = None;

        match classify_line(&line) {
            LineKind::Fence => self.within_fence = !self.within_fence,
            LineKind::Heading(new) if !self.within_fence && new.level <= self.max_level => {
                if !self.lines.is_empty() {
                    closed = Some(self.close(&new));
                }
                self.heading = Some(new);
            }
            _ => {}
        }

        self.lines.push(line);
        closed
    }

    /// Flush the chapter in progress. Empty only when no line was ever
    /// pushed.
    pub fn finish(self) -> Chapter {
        Chapter {
            parent_headings: self.parents,
            heading: self.heading,
            text: self.lines,
        }
    }

    /// Emit the buffered chapter and converge the ancestor stack toward
    /// the heading that closes it: moving deeper records the closed
    /// title as a parent, anything else drops entries until the stack
    /// is shallower than the new level. Skipped intermediate levels get
    /// no placeholder.
    fn close(&mut self, new: &Heading) -> Chapter {
        let chapter = Chapter {
            parent_headings: self.parents.clone(),
            heading: self.heading.take(),
            text: mem::take(&mut self.lines),
        };

        match &chapter.heading {
            Some(closed) if closed.level < new.level => {
                self.parents.push(closed.title.clone());
            }
            Some(_) => {
                while self.parents.len() >= new.level as usize {
                    self.parents.pop();
                }
            }
            None => {}
        }

        chapter
    }
}

// ---------------------------------------------------------------------------
// Iterator
// ---------------------------------------------------------------------------

/// Lazy chapter sequence over a stream of lines. Forward-only; safe to
/// abandon mid-scan.
pub struct Chapters<I> {
    lines: I,
    builder: Option<ChapterBuilder>,
}

impl<I: Iterator<Item = String>> Iterator for Chapters<I> {
    type Item = Chapter;

    fn next(&mut self) -> Option<Chapter> {
        let builder = self.builder.as_mut()?;
        for line in self.lines.by_ref() {
            if let Some(chapter) = builder.push(line) {
                return Some(chapter);
            }
        }
        // Input exhausted: the final chapter is always emitted, even empty.
        self.builder.take().map(ChapterBuilder::finish)
    }
}

/// Split `lines` into chapters at headings of `max_level` or shallower.
///
/// Lines pass through byte for byte: concatenating every yielded
/// chapter's text reproduces the input exactly. `max_level` must
/// already be within 1-6; the scanner does not revalidate it.
pub fn split_by_heading<I>(lines: I, max_level: u8) -> Chapters<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    Chapters {
        lines: lines.into_iter(),
        builder: Some(ChapterBuilder::new(max_level)),
    }
}
