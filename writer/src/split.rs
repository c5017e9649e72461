use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use mdsplit::split_by_heading;

use crate::encoding;
use crate::error::SplitError;
use crate::filename::valid_filename;
use crate::source::{Input, collect_markdown_files, stem_of};
use crate::stats::Stats;
use crate::toc::{self, ChapterRef};

/// One splitting run: where the output tree goes and how chapters are
/// written into it.
pub struct Splitter {
    pub out_path: PathBuf,
    /// Heading levels up to this split; deeper ones stay in place.
    pub max_level: u8,
    /// Input files are decoded and output files encoded with this.
    pub encoding: &'static Encoding,
    pub table_of_contents: bool,
    pub navigation: bool,
    /// Write into an already existing output folder.
    pub force: bool,
    pub verbose: bool,
}

impl Splitter {
    /// Split `input` into the output tree, returning the run's counters.
    pub fn run(&self, input: &Input) -> Result<Stats, SplitError> {
        if self.out_path.exists() && !self.force {
            return Err(SplitError::OutputExists(self.out_path.clone()));
        }

        let mut stats = Stats::default();
        match input {
            Input::File(path) => {
                if self.verbose {
                    println!(
                        "Process file '{}' to '{}'",
                        path.display(),
                        self.out_path.display()
                    );
                }
                let text = self.read_file(path)?;
                self.split_document(&text, &file_name_of(path), &self.out_path, &mut stats)?;
            }
            Input::Directory(dir) => {
                for file in collect_markdown_files(dir)? {
                    let relative = file.strip_prefix(dir).unwrap_or(file.as_path());
                    let doc_out = match relative.parent() {
                        Some(parent) if !parent.as_os_str().is_empty() => {
                            self.out_path.join(parent).join(stem_of(&file))
                        }
                        _ => self.out_path.join(stem_of(&file)),
                    };
                    if self.verbose {
                        println!(
                            "Process file '{}' to '{}'",
                            file.display(),
                            doc_out.display()
                        );
                    }
                    let text = self.read_file(&file)?;
                    self.split_document(&text, &file_name_of(&file), &doc_out, &mut stats)?;
                }
            }
            Input::Stdin => {
                if self.verbose {
                    println!("Process stdin to '{}'", self.out_path.display());
                }
                let mut bytes = Vec::new();
                io::stdin().read_to_end(&mut bytes)?;
                let text = encoding::decode(&bytes, self.encoding, Path::new("stdin"))?;
                self.split_document(&text, "stdin.md", &self.out_path, &mut stats)?;
            }
        }
        Ok(stats)
    }

    // -----------------------------------------------------------------------
    // Per-document work
    // -----------------------------------------------------------------------

    fn read_file(&self, path: &Path) -> Result<String, SplitError> {
        let bytes = fs::read(path)?;
        encoding::decode(&bytes, self.encoding, path)
    }

    /// Write one document's chapters under `doc_out`. The chapter before
    /// the first heading keeps `source_name`; chapters with the same
    /// heading land in the same file, appended in emission order.
    fn split_document(
        &self,
        text: &str,
        source_name: &str,
        doc_out: &Path,
        stats: &mut Stats,
    ) -> Result<(), SplitError> {
        if self.verbose {
            println!("Create output folder '{}'", doc_out.display());
        }
        stats.input_files += 1;

        let lines = text.split_inclusive('\n').map(str::to_string);
        let mut written: Vec<ChapterRef> = Vec::new();

        for chapter in split_by_heading(lines, self.max_level) {
            if chapter.is_empty() {
                continue;
            }
            stats.chapters += 1;

            let file_name = match &chapter.heading {
                None => source_name.to_string(),
                Some(heading) => valid_filename(&heading.title)? + ".md",
            };

            let mut relative = PathBuf::new();
            for parent in &chapter.parent_headings {
                relative.push(valid_filename(parent)?);
            }
            relative.push(&file_name);

            let path = doc_out.join(&relative);
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }

            if self.verbose {
                println!("Write {} lines to '{}'", chapter.text.len(), path.display());
            }
            if !path.exists() {
                stats.new_files += 1;
            }

            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            for line in &chapter.text {
                file.write_all(&encoding::encode(line, self.encoding))?;
            }

            written.push(ChapterRef {
                title: match &chapter.heading {
                    None => source_name.to_string(),
                    Some(heading) => heading.title.clone(),
                },
                path: relative,
                depth: chapter.parent_headings.len(),
            });
        }

        if self.table_of_contents && !written.is_empty() {
            self.write_toc(doc_out, &written, stats)?;
        }
        if self.navigation {
            self.append_navigation(doc_out, &written)?;
        }
        Ok(())
    }

    fn write_toc(
        &self,
        doc_out: &Path,
        written: &[ChapterRef],
        stats: &mut Stats,
    ) -> Result<(), SplitError> {
        let path = doc_out.join("toc.md");
        if self.verbose {
            println!("Write table of contents to '{}'", path.display());
        }
        if !path.exists() {
            stats.new_files += 1;
        }
        let rendered = toc::render_toc(written);
        fs::write(&path, encoding::encode(&rendered, self.encoding))?;
        Ok(())
    }

    /// Footers go to each distinct chapter file once, after all of its
    /// chapters have been appended.
    fn append_navigation(&self, doc_out: &Path, written: &[ChapterRef]) -> Result<(), SplitError> {
        let files = toc::unique_files(written);
        for (index, reference) in files.iter().enumerate() {
            let Some(footer) = toc::navigation_footer(&files, index, self.table_of_contents)
            else {
                continue;
            };
            let path = doc_out.join(&reference.path);
            let mut file = OpenOptions::new().append(true).open(&path)?;
            file.write_all(&encoding::encode(&footer, self.encoding))?;
        }
        Ok(())
    }
}

fn file_name_of(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => String::from("doc.md"),
    }
}
