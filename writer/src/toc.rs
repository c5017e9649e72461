use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A chapter file as seen from its document's output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRef {
    /// Link text: the heading title, or the source file's name for the
    /// chapter before the first heading.
    pub title: String,
    /// Path of the chapter file relative to the document output root.
    pub path: PathBuf,
    /// Nesting depth, one per ancestor heading.
    pub depth: usize,
}

/// Render `toc.md` for one document: one list entry per chapter in
/// emission order, indented two spaces per ancestor. Targets are
/// `<>`-wrapped so titles with spaces stay valid links.
pub fn render_toc(chapters: &[ChapterRef]) -> String {
    let mut out = String::from("# Table of Contents\n\n");
    for chapter in chapters {
        out.push_str(&"  ".repeat(chapter.depth));
        out.push_str(&format!(
            "- [{}](<{}>)\n",
            chapter.title,
            link_target(&chapter.path)
        ));
    }
    out
}

/// Chapter files in first-emission order, one entry per distinct path.
/// Chapters merged into the same file appear once.
pub fn unique_files(chapters: &[ChapterRef]) -> Vec<&ChapterRef> {
    let mut seen = BTreeSet::new();
    let mut unique = Vec::new();
    for chapter in chapters {
        if seen.insert(chapter.path.as_path()) {
            unique.push(chapter);
        }
    }
    unique
}

/// Footer appended to `files[index]`: the previous and next chapter
/// files plus a link back to `toc.md`, all relative to the chapter
/// file's own folder. `None` when there is nothing to link.
pub fn navigation_footer(files: &[&ChapterRef], index: usize, with_toc: bool) -> Option<String> {
    let up = "../".repeat(files[index].depth);

    let mut links = Vec::new();
    if index > 0 {
        let prev = files[index - 1];
        links.push(format!(
            "[← {}](<{}{}>)",
            prev.title,
            up,
            link_target(&prev.path)
        ));
    }
    if with_toc {
        links.push(format!("[Contents](<{}toc.md>)", up));
    }
    if let Some(next) = files.get(index + 1) {
        links.push(format!(
            "[{} →](<{}{}>)",
            next.title,
            up,
            link_target(&next.path)
        ));
    }

    if links.is_empty() {
        return None;
    }
    Some(format!("\n---\n\n{}\n", links.join(" | ")))
}

fn link_target(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
