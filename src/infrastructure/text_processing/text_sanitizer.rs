use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

const SOFT_HYPHEN: char = '\u{00ad}';

/// Cleans text recovered from a PDF content stream: NFKC normalisation, removal of
/// soft hyphens and control characters, re-joining words split across lines, and
/// collapsing runs of whitespace. Paragraph breaks survive as a single blank line.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|&c| c != SOFT_HYPHEN && (!c.is_control() || c == '\n' || c == '\t'))
        .collect();
    let joined = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in joined.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(collapsed);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs.join("\n\n")
}
