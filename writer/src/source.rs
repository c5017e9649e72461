use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SplitError;

/// Where the markdown comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A single markdown file.
    File(PathBuf),
    /// A folder; every `.md` file underneath is split.
    Directory(PathBuf),
    /// The standard input stream (`-` on the command line).
    Stdin,
}

impl Input {
    /// Resolve a command-line input argument. `-` selects stdin;
    /// anything else must name an existing file or folder.
    pub fn locate(arg: &str) -> Result<Input, SplitError> {
        if arg == "-" {
            return Ok(Input::Stdin);
        }
        let path = PathBuf::from(arg);
        if path.is_file() {
            Ok(Input::File(path))
        } else if path.is_dir() {
            Ok(Input::Directory(path))
        } else {
            Err(SplitError::InputNotFound(path))
        }
    }

    /// Output folder used when none is given: the file stem, the
    /// folder name with `_split` appended, or `stdin`.
    pub fn default_output(&self) -> PathBuf {
        match self {
            Input::File(path) => PathBuf::from(stem_of(path)),
            Input::Directory(path) => PathBuf::from(format!("{}_split", stem_of(path))),
            Input::Stdin => PathBuf::from("stdin"),
        }
    }
}

/// Every `.md` file under `dir`, sorted so runs are deterministic.
pub fn collect_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, SplitError> {
    let mut files = Vec::new();
    collect_into(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_into(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), SplitError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_into(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            out.push(path);
        }
    }
    Ok(())
}

pub(crate) fn stem_of(path: &Path) -> String {
    match path.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => String::from("output"),
    }
}
