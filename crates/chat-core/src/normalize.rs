//! Best-effort repair of the Markdown the assistant sends back.
//!
//! The assistant's output often arrives with words glued together or torn
//! apart, headings wrapped in bold markers, and list items run into one
//! line. [`normalize`] runs a fixed chain of textual rewrites over it.
//! There is no parsing involved: every pass is a substitution over the
//! whole string, and later passes rely on what earlier ones produced.
//!
//! The passes are public so that each of them can be exercised on its own.
//! Some of them are knowingly over-eager, most notably
//! [`join_mid_word_spaces`], which will also merge two genuine lowercase
//! words.

use std::sync::LazyLock;

use regex::{Captures, Regex};

#[cfg(test)]
mod tests;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("normalizer patterns are valid")
}

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"([a-z])([A-Z])"));
static HYPHEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"([a-z])\s?-\s?([a-z])"));
static MID_WORD_SPACE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"([a-z])\s{1,2}([a-z])"));
static BOLD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"-\s\*\*\s*([A-Za-z0-9\s]+?)\s*\*\*\s*:")
});
static BOLD_HEADING: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\n?#\s*\*\*\s*([^\n*]+?)\s*\*\*"));
// `\d` would also match non-ASCII digits.
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| compile(r"([0-9]+)\.\s*"));
// The label colon may sit on either side of the closing bold marker.
static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\n?- \*\*[^\n]+(?:\*\*:|:\*\*)"));
static BLOCK_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\n-|\n##"));
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[^\S\r\n]{2,}"));
static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\n{3,}"));

/// Repairs the Markdown in `input`.
///
/// This never fails. The output has no leading or trailing whitespace and
/// never contains more than two consecutive newlines.
pub fn normalize(input: &str) -> String {
    let text = split_camel_case(input);
    let text = join_hyphen_breaks(&text);
    let text = join_mid_word_spaces(&text);
    let text = rewrite_bold_labels(&text);
    let text = rewrite_bold_headings(&text);
    let text = space_numbered_items(&text);
    let text = separate_bullet_blocks(&text);
    let text = collapse_whitespace(&text);
    text.trim().to_owned()
}

/// Inserts a space where a lowercase letter runs into an uppercase one.
///
/// `"SystemDesignis"` becomes `"System Designis"`.
pub fn split_camel_case(input: &str) -> String {
    CAMEL_BOUNDARY.replace_all(input, "${1} ${2}").into_owned()
}

/// Removes a hyphen (and at most one whitespace on each side) between two
/// lowercase letters.
pub fn join_hyphen_breaks(input: &str) -> String {
    HYPHEN_BREAK.replace_all(input, "${1}${2}").into_owned()
}

/// Removes one or two whitespace characters between two lowercase letters.
///
/// `"Data base"` becomes `"Database"`, and so does any other pair of
/// lowercase words.
pub fn join_mid_word_spaces(input: &str) -> String {
    MID_WORD_SPACE.replace_all(input, "${1}${2}").into_owned()
}

/// Turns `- **label** :` into a bullet `- **label:**` that starts its own
/// paragraph.
pub fn rewrite_bold_labels(input: &str) -> String {
    BOLD_LABEL.replace_all(input, "\n\n- **${1}:**").into_owned()
}

/// Turns `# **Title**` into a level-2 heading surrounded by blank lines.
pub fn rewrite_bold_headings(input: &str) -> String {
    BOLD_HEADING
        .replace_all(input, |caps: &Captures<'_>| {
            format!("\n\n## {}\n\n", caps[1].trim())
        })
        .into_owned()
}

/// Starts every `N.` on a new line.
pub fn space_numbered_items(input: &str) -> String {
    NUMBERED_ITEM.replace_all(input, "\n${1}. ").into_owned()
}

/// Makes every bold-labeled bullet block end with exactly one newline.
///
/// A block runs from the bullet up to the next line starting with `-` or
/// `##`, or to the end of the text. The newline in front of the bullet,
/// if any, is kept.
pub fn separate_bullet_blocks(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 1);
    let mut cursor = 0;
    while let Some(bullet) = BULLET_LINE.find_at(input, cursor) {
        let block_end = BLOCK_BOUNDARY
            .find_at(input, bullet.end())
            .map_or(input.len(), |m| m.start());
        let block = &input[bullet.start()..block_end];

        out.push_str(&input[cursor..bullet.start()]);
        if block.starts_with('\n') {
            out.push('\n');
        }
        out.push_str(block.trim());
        out.push('\n');

        cursor = block_end;
    }
    out.push_str(&input[cursor..]);
    out
}

/// Squeezes runs of spaces into one, and runs of blank lines into one.
pub fn collapse_whitespace(input: &str) -> String {
    let text = SPACE_RUN.replace_all(input, " ");
    NEWLINE_RUN.replace_all(&text, "\n\n").into_owned()
}
