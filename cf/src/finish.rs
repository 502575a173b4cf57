//! Truncation guard for long-form output
//!
//! Providers sometimes stop at the token cap mid-sentence. If the text does
//! not end in terminal punctuation a fixed call-to-action is appended. This
//! is a best-effort check: text can end in a period and still be cut short.

/// Characters treated as a finished ending
pub const TERMINAL_PUNCTUATION: &[char] = &['.', '!', '?', ':', '"'];

/// Appended when the generated plan looks cut off
pub const CLOSING_PARAGRAPH: &str = "\n\n**Ready to Begin?** Take the first validation step this week and remember - \
every successful idea started as just a thought. The difference is taking action.";

/// Trim `text` and append [`CLOSING_PARAGRAPH`] if it ends abruptly
///
/// Idempotent: the closing paragraph itself ends in terminal punctuation.
pub fn ensure_complete(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.ends_with(TERMINAL_PUNCTUATION) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, CLOSING_PARAGRAPH)
    }
}
