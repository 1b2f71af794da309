use std::collections::BTreeSet;

/// Open tabs, the current file and the pinned set.
///
/// Holds names only; file contents live in the store. After every
/// operation `current` is a member of `open_files`, and `open_files` has
/// no duplicates and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSession {
    open_files: Vec<String>,
    current: String,
    pinned: BTreeSet<String>,
    fallback: String,
}

impl TabSession {
    /// A session with only `fallback` open and current.
    pub fn new(fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        Self {
            open_files: vec![fallback.clone()],
            current: fallback.clone(),
            pinned: BTreeSet::new(),
            fallback,
        }
    }

    /// Rebuild a session from saved state, repairing whatever no longer
    /// holds: unknown or duplicate tabs are dropped, unknown pins are
    /// dropped, and an unknown current falls back.
    pub fn restore(
        fallback: impl Into<String>,
        open_files: Vec<String>,
        current: String,
        pinned: impl IntoIterator<Item = String>,
        exists: impl Fn(&str) -> bool,
    ) -> Self {
        let mut session = Self::new(fallback);
        session.open_files.clear();
        for name in open_files {
            if exists(name.as_str()) && !session.open_files.contains(&name) {
                session.open_files.push(name);
            }
        }
        session.pinned = pinned.into_iter().filter(|n| exists(n.as_str())).collect();

        let current = if exists(current.as_str()) {
            current
        } else {
            session
                .open_files
                .first()
                .cloned()
                .unwrap_or_else(|| session.fallback.clone())
        };
        session.open(&current);
        session
    }

    /// Focus `name`, appending it as a tab if it is not open yet.
    /// Opening an already-open file just re-focuses it.
    pub fn open(&mut self, name: &str) {
        if !self.is_open(name) {
            self.open_files.push(name.to_string());
            tracing::debug!(file = name, tabs = self.open_files.len(), "tab opened");
        }
        self.current = name.to_string();
    }

    /// Same contract as `open`; kept for tab-bar click handlers.
    pub fn select(&mut self, name: &str) {
        self.open(name);
    }

    /// Close the tab for `name`. Returns false if nothing changed.
    ///
    /// If the closed tab was current, focus moves to the tab on its left,
    /// or to the fallback file when it was the first tab. The fallback is
    /// re-opened if needed. The fallback cannot be closed when it is the
    /// only tab.
    pub fn close(&mut self, name: &str) -> bool {
        let Some(idx) = self.position(name) else {
            return false;
        };

        let next = if idx > 0 {
            self.open_files[idx - 1].clone()
        } else if name != self.fallback {
            self.fallback.clone()
        } else {
            match self.open_files.get(idx + 1) {
                Some(right) => right.clone(),
                None => return false,
            }
        };

        self.open_files.remove(idx);
        if self.current == name {
            self.open(&next);
        }
        tracing::debug!(file = name, current = %self.current, "tab closed");
        true
    }

    /// Replace `old` with `new` in place: the tab keeps its position and
    /// focus follows the rename. Pins carry over.
    pub fn rename(&mut self, old: &str, new: &str) {
        if let Some(idx) = self.position(old) {
            self.open_files[idx] = new.to_string();
        }
        if self.current == old {
            self.current = new.to_string();
        }
        if self.pinned.remove(old) {
            self.pinned.insert(new.to_string());
        }
    }

    /// Drop every reference to a deleted file.
    pub fn forget(&mut self, name: &str) {
        self.close(name);
        self.pinned.remove(name);
    }

    pub fn pin(&mut self, name: &str) -> bool {
        self.pinned.insert(name.to_string())
    }

    pub fn unpin(&mut self, name: &str) -> bool {
        self.pinned.remove(name)
    }

    pub fn is_pinned(&self, name: &str) -> bool {
        self.pinned.contains(name)
    }

    pub fn pinned(&self) -> &BTreeSet<String> {
        &self.pinned
    }

    pub fn open_files(&self) -> &[String] {
        &self.open_files
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open_files.iter().any(|n| n == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.open_files.iter().position(|n| n == name)
    }

    /// Get the next tab name (for tab cycling)
    pub fn next_tab(&self) -> Option<&str> {
        let idx = self.position(&self.current)?;
        let next_idx = (idx + 1) % self.open_files.len();
        Some(&self.open_files[next_idx])
    }

    /// Get the previous tab name (for tab cycling)
    pub fn prev_tab(&self) -> Option<&str> {
        let idx = self.position(&self.current)?;
        let prev_idx = if idx == 0 {
            self.open_files.len() - 1
        } else {
            idx - 1
        };
        Some(&self.open_files[prev_idx])
    }

    pub fn focus_next(&mut self) {
        if let Some(name) = self.next_tab().map(str::to_string) {
            self.current = name;
        }
    }

    pub fn focus_prev(&mut self) {
        if let Some(name) = self.prev_tab().map(str::to_string) {
            self.current = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn session_with(tabs: &[&str], current: &str) -> TabSession {
        let mut session = TabSession::new("index.html");
        session.open_files = tabs.iter().map(|s| s.to_string()).collect();
        session.current = current.to_string();
        session
    }

    #[test]
    fn test_open_appends_and_focuses() {
        let mut session = TabSession::new("index.html");
        assert_eq!(session.open_files(), ["index.html"]);
        assert_eq!(session.current(), "index.html");

        session.open("script.js");
        assert_eq!(session.open_files(), ["index.html", "script.js"]);
        assert_eq!(session.current(), "script.js");
    }

    #[test]
    fn test_open_existing_only_refocuses() {
        let mut session = session_with(&["a.js", "b.js", "c.js"], "c.js");
        session.open("a.js");
        assert_eq!(session.open_files(), ["a.js", "b.js", "c.js"]);
        assert_eq!(session.current(), "a.js");

        session.select("b.js");
        assert_eq!(session.open_files(), ["a.js", "b.js", "c.js"]);
        assert_eq!(session.current(), "b.js");
    }

    #[test]
    fn test_close_focuses_previous_tab() {
        let mut session = TabSession::new("index.html");
        session.open("script.js");
        assert!(session.close("script.js"));
        assert_eq!(session.open_files(), ["index.html"]);
        assert_eq!(session.current(), "index.html");
    }

    #[test]
    fn test_close_current_picks_immediate_left() {
        let mut session = session_with(&["a.js", "b.js", "c.js"], "c.js");
        session.close("c.js");
        assert_eq!(session.open_files(), ["a.js", "b.js"]);
        assert_eq!(session.current(), "b.js");
    }

    #[test]
    fn test_close_non_current_keeps_focus() {
        let mut session = session_with(&["a.js", "b.js", "c.js"], "c.js");
        session.close("a.js");
        assert_eq!(session.open_files(), ["b.js", "c.js"]);
        assert_eq!(session.current(), "c.js");
    }

    #[test]
    fn test_close_first_tab_reopens_fallback() {
        let mut session = session_with(&["a.js", "b.js"], "a.js");
        session.close("a.js");
        assert_eq!(session.open_files(), ["b.js", "index.html"]);
        assert_eq!(session.current(), "index.html");
    }

    #[test]
    fn test_close_last_tab_reopens_fallback() {
        let mut session = session_with(&["a.js"], "a.js");
        session.close("a.js");
        assert_eq!(session.open_files(), ["index.html"]);
        assert_eq!(session.current(), "index.html");
    }

    #[test]
    fn test_close_lone_fallback_is_rejected() {
        let mut session = TabSession::new("index.html");
        assert!(!session.close("index.html"));
        assert_eq!(session.open_files(), ["index.html"]);
        assert_eq!(session.current(), "index.html");
    }

    #[test]
    fn test_close_first_fallback_focuses_right_neighbor() {
        let mut session = session_with(&["index.html", "a.js"], "index.html");
        assert!(session.close("index.html"));
        assert_eq!(session.open_files(), ["a.js"]);
        assert_eq!(session.current(), "a.js");
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let mut session = session_with(&["a.js", "b.js"], "b.js");
        assert!(!session.close("zzz.js"));
        assert_eq!(session.open_files(), ["a.js", "b.js"]);
    }

    #[test]
    fn test_rename_preserves_position_and_focus() {
        let mut session = session_with(&["index.html", "utils.js", "styles.css"], "utils.js");
        session.pin("utils.js");
        session.rename("utils.js", "helpers.js");
        assert_eq!(session.open_files(), ["index.html", "helpers.js", "styles.css"]);
        assert_eq!(session.current(), "helpers.js");
        assert!(session.is_pinned("helpers.js"));
        assert!(!session.is_pinned("utils.js"));
    }

    #[test]
    fn test_rename_closed_file_only_moves_pin() {
        let mut session = session_with(&["index.html"], "index.html");
        session.pin("a.js");
        session.rename("a.js", "b.js");
        assert_eq!(session.open_files(), ["index.html"]);
        assert!(session.is_pinned("b.js"));
    }

    #[test]
    fn test_forget_closes_and_unpins() {
        let mut session = session_with(&["index.html", "a.js", "b.js"], "a.js");
        session.pin("a.js");
        session.forget("a.js");
        assert_eq!(session.open_files(), ["index.html", "b.js"]);
        assert_eq!(session.current(), "index.html");
        assert!(session.pinned().is_empty());
    }

    #[test]
    fn test_pin_is_set_semantics() {
        let mut session = TabSession::new("index.html");
        assert!(session.pin("a.js"));
        assert!(!session.pin("a.js"));
        assert!(session.unpin("a.js"));
        assert!(!session.unpin("a.js"));
    }

    #[test]
    fn test_cycling_wraps() {
        let mut session = session_with(&["a.js", "b.js", "c.js"], "c.js");
        assert_eq!(session.next_tab(), Some("a.js"));
        assert_eq!(session.prev_tab(), Some("b.js"));

        session.focus_next();
        assert_eq!(session.current(), "a.js");
        session.focus_prev();
        assert_eq!(session.current(), "c.js");
    }

    #[test]
    fn test_restore_repairs_state() {
        let known = ["index.html", "styles.css", "a.js"];
        let session = TabSession::restore(
            "index.html",
            vec![
                "a.js".to_string(),
                "gone.js".to_string(),
                "a.js".to_string(),
                "styles.css".to_string(),
            ],
            "gone.js".to_string(),
            vec!["a.js".to_string(), "gone.js".to_string()],
            |n| known.contains(&n),
        );
        assert_eq!(session.open_files(), ["a.js", "styles.css"]);
        assert_eq!(session.current(), "a.js");
        assert_eq!(session.pinned().len(), 1);
    }

    #[test]
    fn test_restore_empty_tabs_opens_fallback() {
        let session = TabSession::restore(
            "index.html",
            Vec::new(),
            String::new(),
            Vec::new(),
            |n| n == "index.html",
        );
        assert_eq!(session.open_files(), ["index.html"]);
        assert_eq!(session.current(), "index.html");
    }

    #[derive(Debug, Clone)]
    enum Op {
        Open(usize),
        Close(usize),
        Next,
        Prev,
    }

    const NAMES: [&str; 5] = ["index.html", "styles.css", "script.js", "a.js", "b.css"];

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..NAMES.len()).prop_map(Op::Open),
            (0..NAMES.len()).prop_map(Op::Close),
            Just(Op::Next),
            Just(Op::Prev),
        ]
    }

    proptest! {
        /// Property: current is always an open tab and tabs never repeat
        #[test]
        fn prop_current_is_always_open(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut session = TabSession::new("index.html");
            for op in ops {
                match op {
                    Op::Open(i) => session.open(NAMES[i]),
                    Op::Close(i) => { session.close(NAMES[i]); }
                    Op::Next => session.focus_next(),
                    Op::Prev => session.focus_prev(),
                }
                prop_assert!(session.is_open(session.current()));
                prop_assert!(!session.open_files().is_empty());
                let unique: BTreeSet<&String> = session.open_files().iter().collect();
                prop_assert_eq!(unique.len(), session.open_files().len());
            }
        }

        /// Property: renaming an open tab keeps its index
        #[test]
        fn prop_rename_keeps_index(
            opens in prop::collection::vec(0..NAMES.len(), 1..8),
            pick in any::<prop::sample::Index>()
        ) {
            let mut session = TabSession::new("index.html");
            for i in opens {
                session.open(NAMES[i]);
            }
            let idx = pick.index(session.open_files().len());
            let old = session.open_files()[idx].clone();
            let was_current = session.current() == old;

            session.rename(&old, "renamed.js");

            prop_assert_eq!(session.position("renamed.js"), Some(idx));
            prop_assert!(!session.is_open(&old));
            prop_assert_eq!(was_current, session.current() == "renamed.js");
        }
    }
}
