//! Dotted-path parsing for hierarchical tree access.
//!
//! A path is a sequence of segment labels joined by unescaped dots. A literal
//! dot inside a segment is written `\.`, so the key `"var 5.0"` is addressed
//! as `"var 5\.0"` while `"var 5.0"` (unescaped) addresses the key `"0"`
//! nested under `"var 5"`. No other escape sequences are defined: a backslash
//! not followed by a dot, including a trailing one, is an ordinary character.
//!
//! Parsing is total. There is no malformed path — an unmatched escape simply
//! produces a segment that fails to match any stored key, which the lookup
//! surface reports as absence.

/// The separator between path segments.
pub const SEPARATOR: char = '.';

/// The character that escapes a literal dot inside a segment.
pub const ESCAPE: char = '\\';

/// Splits a path string into its segments, folding `\.` into literal dots.
///
/// The empty path yields no segments at all: it addresses the tree itself.
/// Empty segments between consecutive dots are kept as-is; they can only
/// match a key that is itself the empty string.
///
/// # Examples
///
/// ```
/// # use pathtree::tree::path::split;
/// assert_eq!(split("a.b.c"), ["a", "b", "c"]);
/// assert_eq!(split(r"var 5.var 5\.0"), ["var 5", "var 5.0"]);
/// assert_eq!(split(""), Vec::<String>::new());
/// ```
pub fn split(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    // Two states: scanning a segment, or having just seen the escape char.
    let mut escaped = false;

    for ch in path.chars() {
        if escaped {
            escaped = false;
            if ch == SEPARATOR {
                current.push(SEPARATOR);
                continue;
            }
            // Not an escape sequence after all; the backslash was literal
            // and the current character is handled as usual.
            current.push(ESCAPE);
        }
        if ch == ESCAPE {
            escaped = true;
        } else if ch == SEPARATOR {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    if escaped {
        // Trailing backslash is literal.
        current.push(ESCAPE);
    }
    segments.push(current);

    segments
}

/// Escapes a single segment so it survives [`split`] intact.
///
/// This is the inverse of the folding `split` performs: every literal dot is
/// prefixed with the escape character.
///
/// ```
/// # use pathtree::tree::path::{escape, split};
/// assert_eq!(escape("var 5.0"), r"var 5\.0");
/// assert_eq!(split(&escape("var 5.0")), ["var 5.0"]);
/// ```
pub fn escape(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for ch in segment.chars() {
        if ch == SEPARATOR {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
    out
}

/// Joins segments into a path string, escaping literal dots in each.
///
/// ```
/// # use pathtree::tree::path::join;
/// assert_eq!(join(["var 5", "var 5.0"]), r"var 5.var 5\.0");
/// ```
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&escape(segment.as_ref()));
    }
    out
}
