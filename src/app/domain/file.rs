use serde::{Deserialize, Serialize};

/// The three seeded files every playground starts with. They can be edited
/// but never renamed or deleted.
pub const DEFAULT_FILES: [&str; 3] = ["index.html", "styles.css", "script.js"];

pub fn is_protected(name: &str) -> bool {
    DEFAULT_FILES.contains(&name)
}

/// File type derived from a name's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FileKind {
    Html,
    Css,
    JavaScript,
    #[default]
    Other,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [
        FileKind::Html,
        FileKind::Css,
        FileKind::JavaScript,
        FileKind::Other,
    ];

    /// Classify a file name by its extension. Total over all strings:
    /// anything unrecognized (including no extension) is `Other`.
    pub fn from_name(name: &str) -> FileKind {
        let ext = match name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => return FileKind::Other,
        };
        match ext.as_str() {
            "html" | "htm" => FileKind::Html,
            "css" => FileKind::Css,
            "js" | "mjs" => FileKind::JavaScript,
            _ => FileKind::Other,
        }
    }

    /// Extension appended to names created without one.
    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Html => "html",
            FileKind::Css => "css",
            FileKind::JavaScript => "js",
            FileKind::Other => "txt",
        }
    }

    /// Language id handed to the editor view.
    pub fn language_id(self) -> &'static str {
        match self {
            FileKind::Html => "html",
            FileKind::Css => "css",
            FileKind::JavaScript => "javascript",
            FileKind::Other => "plaintext",
        }
    }

    pub fn tag_color(self) -> TagColor {
        match self {
            FileKind::Html => TagColor::Red,
            FileKind::Css => TagColor::Blue,
            FileKind::JavaScript => TagColor::Amber,
            FileKind::Other => TagColor::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Html => "html",
            FileKind::Css => "css",
            FileKind::JavaScript => "js",
            FileKind::Other => "other",
        }
    }
}

/// Color tag shown next to a file in the explorer and on its tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagColor {
    Red,
    Blue,
    Amber,
    Neutral,
}

impl TagColor {
    /// Tag color for a file name; never fails.
    pub fn for_file(name: &str) -> TagColor {
        FileKind::from_name(name).tag_color()
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            TagColor::Red => (220, 60, 60),
            TagColor::Blue => (60, 120, 220),
            TagColor::Amber => (230, 170, 30),
            TagColor::Neutral => (140, 140, 140),
        }
    }

    pub fn to_rgb_dark(self) -> (u8, u8, u8) {
        match self {
            TagColor::Red => (180, 50, 50),
            TagColor::Blue => (50, 100, 180),
            TagColor::Amber => (190, 140, 25),
            TagColor::Neutral => (120, 120, 120),
        }
    }

    /// CSS hex string, as consumed by the web front end.
    pub fn to_hex(self, dark: bool) -> String {
        let (r, g, b) = if dark { self.to_rgb_dark() } else { self.to_rgb() };
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// A file held by the store. The name is the store key and is not
/// repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualFile {
    pub content: String,
    pub kind: FileKind,
}

impl VirtualFile {
    pub fn new(name: &str, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: FileKind::from_name(name),
        }
    }

    pub fn empty(name: &str) -> Self {
        Self::new(name, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_known_extensions() {
        assert_eq!(FileKind::from_name("index.html"), FileKind::Html);
        assert_eq!(FileKind::from_name("styles.css"), FileKind::Css);
        assert_eq!(FileKind::from_name("script.js"), FileKind::JavaScript);
        assert_eq!(FileKind::from_name("PAGE.HTML"), FileKind::Html);
    }

    #[test]
    fn test_kind_falls_back_to_other() {
        assert_eq!(FileKind::from_name("README"), FileKind::Other);
        assert_eq!(FileKind::from_name("notes.md"), FileKind::Other);
        assert_eq!(FileKind::from_name(""), FileKind::Other);
        assert_eq!(FileKind::from_name("."), FileKind::Other);
        assert_eq!(FileKind::from_name("archive.js.bak"), FileKind::Other);
    }

    #[test]
    fn test_tag_colors() {
        assert_eq!(TagColor::for_file("a.html"), TagColor::Red);
        assert_eq!(TagColor::for_file("a.css"), TagColor::Blue);
        assert_eq!(TagColor::for_file("a.js"), TagColor::Amber);
        assert_eq!(TagColor::for_file("a.rs"), TagColor::Neutral);
    }

    #[test]
    fn test_tag_color_hex() {
        assert_eq!(TagColor::Red.to_hex(false), "#dc3c3c");
        assert_eq!(TagColor::Neutral.to_hex(false), "#8c8c8c");
        assert_eq!(TagColor::Blue.to_hex(true), "#3264b4");
    }

    #[test]
    fn test_tag_color_dark_differs() {
        for kind in FileKind::ALL {
            let color = kind.tag_color();
            assert_ne!(color.to_hex(false), color.to_hex(true), "{:?}", color);
        }
    }

    #[test]
    fn test_protected_defaults() {
        assert!(is_protected("index.html"));
        assert!(is_protected("styles.css"));
        assert!(is_protected("script.js"));
        assert!(!is_protected("utils.js"));
        assert!(!is_protected("Index.html"));
    }

    #[test]
    fn test_virtual_file_kind_follows_name() {
        let file = VirtualFile::new("app.js", "console.log(1);");
        assert_eq!(file.kind, FileKind::JavaScript);
        assert_eq!(VirtualFile::empty("x").kind, FileKind::Other);
    }
}
