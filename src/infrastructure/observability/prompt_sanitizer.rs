use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static SECRET_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(bearer\s+|api_key=|password=|secret=|token=)[^\s&'\x22]+|\bsk-[A-Za-z0-9_\-]{8,}",
    )
    .ok()
});

/// Shortens user text for log lines and masks anything that looks like a
/// credential.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_secrets(trimmed);
    let total = redacted.chars().count();

    if total > MAX_VISIBLE_CHARS {
        let visible: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{visible}... ({total} chars total)")
    } else {
        redacted
    }
}

fn redact_secrets(text: &str) -> String {
    match SECRET_PATTERN.as_ref() {
        Some(pattern) => pattern
            .replace_all(text, |caps: &regex::Captures<'_>| match caps.get(1) {
                Some(prefix) => format!("{}[REDACTED]", prefix.as_str()),
                None => String::from("[REDACTED]"),
            })
            .into_owned(),
        None => text.to_string(),
    }
}
