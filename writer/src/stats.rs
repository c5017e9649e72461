use std::fmt;

/// Counters accumulated over one splitting run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub input_files: usize,
    pub chapters: usize,
    pub new_files: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Split results:")?;
        writeln!(f, "- {} input file(s)", self.input_files)?;
        writeln!(f, "- {} extracted chapter(s)", self.chapters)?;
        write!(f, "- {} new output file(s)", self.new_files)
    }
}
