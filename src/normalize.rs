//! Name normalization — raw application paths to canonical display names.
//!
//! The receiver keys its effect lookups on a clean identifier, so every
//! name that goes on the wire passes through here first: directory and
//! extension stripped, parenthetical region/revision tags removed,
//! apostrophes replaced (the receiver's parser treats them as delimiters).

use regex::Regex;
use std::sync::LazyLock;

/// Matches a parenthesized tag plus any whitespace in front of it,
/// e.g. `" (USA)"` or `" (Rev 1)"`.
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").expect("parenthetical pattern is valid"));

/// Strip directory components and a trailing extension from a path-like
/// string, keeping only the base name.
///
/// Both `/` and `\` count as separators — application paths come from a
/// frontend that may be configured with either style. A trailing `.ext`
/// is treated as an extension only when `ext` is non-empty and contains
/// no whitespace; this keeps names like `"Dr. Mario"` intact when they
/// pass through a second time.
pub fn base_name(raw: &str) -> &str {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    match name.rfind('.') {
        Some(i) if i > 0 => {
            let ext = &name[i + 1..];
            if !ext.is_empty() && !ext.contains(char::is_whitespace) {
                &name[..i]
            } else {
                name
            }
        }
        _ => name,
    }
}

/// Normalize a raw path or display string into a canonical identifier.
///
/// Applies, in order: base-name strip, parenthetical removal, trim, and
/// apostrophe → underscore replacement. The pipeline is run to a fixed
/// point so the result is idempotent — removing a parenthetical can
/// expose a new trailing extension, which the next pass picks up.
///
/// Never fails; empty or degenerate input yields an empty string.
pub fn normalize(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = normalize_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn normalize_once(raw: &str) -> String {
    let stem = base_name(raw);
    let stripped = PARENTHETICAL.replace_all(stem, "");
    stripped.trim().replace('\'', "_")
}
