//! Pasted-command normalization
//!
//! Commands copied from browsers and docs arrive split over several lines
//! with trailing `\` continuations. The parsers expect one line with single
//! spaces between words.

/// Join multi-line input into a single command line
///
/// Each line is trimmed and loses a trailing continuation backslash; the
/// pieces are joined and every whitespace run collapses to one space.
/// Backslashes elsewhere (JSON escapes) are kept.
pub fn normalize(raw: &str) -> String {
    raw.lines()
        .map(|line| {
            let line = line.trim();
            line.strip_suffix('\\').unwrap_or(line)
        })
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
