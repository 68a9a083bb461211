//! Variable extraction from the `:root` block of a stylesheet.
//!
//! Only the first `:root { ... }` block is examined, and only its flat
//! `--name: value;` declarations are collected. Anything the declaration
//! grammar cannot match is skipped rather than reported.

use std::borrow::Cow;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Normalized variable key → trimmed value, in first-seen key order.
pub type CssVariables = IndexMap<String, String>;

/// Options for [`extract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Strip `//` and `/* */` comments before locating the `:root` block.
    pub remove_comments: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
        }
    }
}

// `$` also stops before `\r\n` so CRLF files keep their line endings.
static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)//.*$").unwrap());

// Lazy: each `/*` closes at the nearest `*/`.
static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

// The first `}` ends the block.
static ROOT_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":root\s*\{([^}]*)\}").unwrap());

// Capture group 1: name without the leading `--`
// Capture group 2: raw value up to the terminating `;`
static DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--([^:]+):\s*([^;]+);").unwrap());

static DASH_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Extract custom properties declared in the first `:root` block of `content`.
///
/// Returns an empty map when there is no `:root` block. When two declarations
/// normalize to the same key the later value wins, while the key keeps the
/// position of its first occurrence.
///
/// # Examples
///
/// ```
/// use css_vars_to_ts::{ExtractOptions, extract};
///
/// let vars = extract(":root { --color-primary: #fff; }", ExtractOptions::default());
/// assert_eq!(vars.get("color_primary").map(String::as_str), Some("#fff"));
/// ```
pub fn extract(content: &str, options: ExtractOptions) -> CssVariables {
    let mut variables = CssVariables::new();

    let content = if options.remove_comments {
        strip_comments(content)
    } else {
        Cow::Borrowed(content)
    };

    let Some(body) = ROOT_BLOCK_REGEX
        .captures(&content)
        .and_then(|captures| captures.get(1))
    else {
        return variables;
    };

    for captures in DECLARATION_REGEX.captures_iter(body.as_str()) {
        let (_, [name, value]) = captures.extract();
        variables.insert(normalize_name(name), value.trim().to_string());
    }

    variables
}

/// Remove `//` line comments, then `/* ... */` block comments.
///
/// Text outside the removed spans is left untouched, including line breaks.
pub fn strip_comments(content: &str) -> Cow<'_, str> {
    match LINE_COMMENT_REGEX.replace_all(content, "") {
        Cow::Borrowed(content) => BLOCK_COMMENT_REGEX.replace_all(content, ""),
        Cow::Owned(content) => {
            Cow::Owned(BLOCK_COMMENT_REGEX.replace_all(&content, "").into_owned())
        }
    }
}

/// Normalize a custom property name (without its leading `--`).
///
/// Surrounding whitespace is trimmed and every run of dashes becomes a
/// single underscore: `a--b---c` → `a_b_c`.
pub fn normalize_name(name: &str) -> String {
    DASH_RUN_REGEX.replace_all(name.trim(), "_").into_owned()
}
