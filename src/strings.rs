//! String utilities
//!
//! Shell-ish word handling shared by the parsers and builders.

/// Split a command line into words on whitespace
///
/// Whitespace inside a single- or double-quoted run does not split, and the
/// quote characters stay in the word (`a:'b c'` is one word). An unterminated
/// quote simply runs to the end of the line.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            None => {
                if c == '\'' || c == '"' {
                    quote = Some(c);
                }
                current.push(c);
            }
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Remove one pair of matching surrounding quotes, if present
pub fn unquote(s: &str) -> &str {
    for q in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Strip every leading and trailing quote character
pub fn trim_quotes(s: &str) -> &str {
    s.trim_matches(|c| c == '\'' || c == '"')
}

/// Wrap a value in single quotes, verbatim
pub fn single_quote(s: &str) -> String {
    format!("'{}'", s)
}

/// Quote a word so it stays one word when the line is split again
///
/// Words without whitespace or quotes are returned as-is. Single quotes are
/// preferred; a word that already holds a single quote gets double quotes.
pub fn shell_quote(word: &str) -> String {
    let needs_quoting = word.is_empty()
        || word.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"');
    if !needs_quoting {
        word.to_string()
    } else if word.contains('\'') {
        format!("\"{}\"", word)
    } else {
        single_quote(word)
    }
}
