use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHENATED_LINE_BREAK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").ok());

/// Cleans text extracted from a PDF page.
///
/// NFKC-normalizes ligatures, rejoins words hyphenated across lines, drops
/// control characters, collapses runs of blank lines to one and runs of
/// spaces to a single space.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    let joined = match HYPHENATED_LINE_BREAK.as_ref() {
        Some(re) => re.replace_all(&normalized, "$head$tail").into_owned(),
        None => normalized,
    };

    let mut out = String::with_capacity(joined.len());
    let mut pending_blank = false;

    for line in joined.lines().map(str::trim) {
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push_str(if pending_blank { "\n\n" } else { "\n" });
        }
        push_collapsed(line, &mut out);
        pending_blank = false;
    }

    out
}

fn push_collapsed(line: &str, out: &mut String) {
    let mut last_was_space = false;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
}
