//! Splitting of `<hash> <subject>` log lines.

/// One line of a `log`-style listing, split into hash and subject.
///
/// The raw line is kept untouched so that grouping can store it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitLine<'a> {
    pub raw: &'a str,
    pub hash: &'a str,
    pub subject: &'a str,
}

impl<'a> CommitLine<'a> {
    /// Split a raw line on its first run of whitespace.
    ///
    /// A line without any whitespace has no discernible hash; it is treated
    /// as a bare subject so that it still degrades to `misc` downstream.
    pub fn parse(raw: &'a str) -> Self {
        let line = raw.trim();

        match line.split_once(char::is_whitespace) {
            Some((hash, subject)) => Self {
                raw,
                hash,
                subject: subject.trim_start(),
            },
            None => Self {
                raw,
                hash: "",
                subject: line,
            },
        }
    }

    /// Abbreviated hash for display, at most seven characters.
    pub fn short_hash(&self) -> &'a str {
        match self.hash.char_indices().nth(7) {
            Some((idx, _)) => &self.hash[..idx],
            None => self.hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_first_space() {
        let line = CommitLine::parse("abc123 feat(api): add endpoint");
        assert_eq!(line.hash, "abc123");
        assert_eq!(line.subject, "feat(api): add endpoint");
        assert_eq!(line.raw, "abc123 feat(api): add endpoint");
    }

    #[test]
    fn test_split_on_whitespace_run() {
        let line = CommitLine::parse("abc123 \t  fix: tabs and spaces");
        assert_eq!(line.hash, "abc123");
        assert_eq!(line.subject, "fix: tabs and spaces");
    }

    #[test]
    fn test_subject_keeps_inner_colons() {
        let line = CommitLine::parse("abc123 fix: error: connection (timeout) handling");
        assert_eq!(line.subject, "fix: error: connection (timeout) handling");
    }

    #[test]
    fn test_line_without_whitespace_is_subject_only() {
        let line = CommitLine::parse("deadbeef");
        assert_eq!(line.hash, "");
        assert_eq!(line.subject, "deadbeef");
    }

    #[test]
    fn test_short_hash() {
        let line = CommitLine::parse("f2191200bf7b6e5eec3d61fcef9eb756e0129cfb chore(release): 0.1.0");
        assert_eq!(line.short_hash(), "f219120");

        let short = CommitLine::parse("abc fix: x");
        assert_eq!(short.short_hash(), "abc");
    }
}
