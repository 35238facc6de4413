/// A user-supplied search term together with the matching rule in force.
///
/// With `trailing_space` set, a question only matches when the term is
/// immediately followed by a space, which mirrors the `%term %` pattern
/// existing clients rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    pub term: String,
    pub trailing_space: bool,
}

pub const LIKE_ESCAPE: char = '\\';

impl SearchTerm {
    pub fn new(term: impl Into<String>, trailing_space: bool) -> Self {
        Self {
            term: term.into(),
            trailing_space,
        }
    }

    /// Pattern for `LIKE ? ESCAPE '\'`. Wildcards typed by the user match literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.len() + 3);
        pattern.push('%');
        for c in self.term.chars() {
            if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        if self.trailing_space {
            pattern.push(' ');
        }
        pattern.push('%');
        pattern
    }

    /// Same rule as [`Self::like_pattern`], evaluated in memory. Case folding is
    /// ASCII only, like SQLite's `LIKE`.
    pub fn matches(&self, text: &str) -> bool {
        let mut needle = self.term.to_ascii_lowercase();
        if self.trailing_space {
            needle.push(' ');
        }
        text.to_ascii_lowercase().contains(&needle)
    }
}
