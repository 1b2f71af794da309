use std::fs;
use std::path::PathBuf;

use crate::app::infrastructure::error::Result;
use crate::app::services::file_store::FileStore;

pub const HTML_ENTRY: &str = "index.html";
pub const CSS_ENTRY: &str = "styles.css";
pub const JS_ENTRY: &str = "script.js";

/// Literal contents of the three well-known files. Missing files are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSources {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl PreviewSources {
    pub fn from_store(store: &impl FileStore) -> Self {
        Self {
            html: store.content_or_empty(HTML_ENTRY).to_string(),
            css: store.content_or_empty(CSS_ENTRY).to_string(),
            js: store.content_or_empty(JS_ENTRY).to_string(),
        }
    }
}

/// Build the single document loaded into the sandboxed preview frame.
///
/// The stylesheet goes in a `<style>` element just before `</head>`; without
/// a head it goes before `<body>`, else after a leading doctype, else at
/// the very start. The script goes in a `<script>` element just before
/// `</body>` (or at the very end).
pub fn compose_preview(sources: &PreviewSources) -> String {
    let mut doc = sources.html.clone();

    if !sources.css.is_empty() {
        let style = format!("<style>\n{}\n</style>\n", sources.css);
        let pos = find_ci(&doc, "</head>")
            .or_else(|| find_ci(&doc, "<body"))
            .unwrap_or_else(|| end_of_doctype(&doc));
        doc.insert_str(pos, &style);
    }

    if !sources.js.is_empty() {
        let script = format!("<script>\n{}\n</script>\n", escape_script(&sources.js));
        match rfind_ci(&doc, "</body>") {
            Some(pos) => doc.insert_str(pos, &script),
            None => doc.push_str(&script),
        }
    }

    doc
}

/// A literal `</script>` inside the user's code, in any case, would end
/// the element early.
fn escape_script(js: &str) -> String {
    let lower = js.to_ascii_lowercase();
    let mut out = String::with_capacity(js.len());
    let mut last = 0;
    for (pos, _) in lower.match_indices("</script") {
        out.push_str(&js[last..pos]);
        out.push_str("<\\/");
        last = pos + 2;
    }
    out.push_str(&js[last..]);
    out
}

/// Byte offset just past a leading `<!DOCTYPE ...>`, or 0 when there is none.
fn end_of_doctype(doc: &str) -> usize {
    let start = doc.len() - doc.trim_start().len();
    if !doc[start..].to_ascii_lowercase().starts_with("<!doctype") {
        return 0;
    }
    match doc[start..].find('>') {
        Some(end) => start + end + 1,
        None => 0,
    }
}

fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().find(needle)
}

fn rfind_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack.to_ascii_lowercase().rfind(needle)
}

/// Write the composed document to the temp preview file and return its path.
pub fn write_preview_file(html: &str) -> Result<PathBuf> {
    let dir = std::env::temp_dir().join("playpad-preview");
    fs::create_dir_all(&dir)?;
    let path = dir.join("preview.html");
    fs::write(&path, html)?;
    Ok(path)
}
