/// Minimal markdown-to-HTML conversion for agent answers
use std::sync::LazyLock;

use regex::Regex;

// Spans never cross a line terminator, including \r, U+2028 and U+2029
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\n\r\u{2028}\u{2029}]*?)\*\*").expect("bold pattern is valid")
});

static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^\n\r\u{2028}\u{2029}]*?)\*").expect("italic pattern is valid")
});

/// Format an answer for display
///
/// Three ordered passes over the whole text:
/// 1. newline → `<br>`
/// 2. `**x**` → `<b>x</b>`
/// 3. `*x*` → `<i>x</i>`
///
/// Bold must run before italic so `**` is never split into two single
/// markers. Other HTML in the answer is passed through untouched.
pub fn format_answer(text: &str) -> String {
    let with_breaks = text.replace('\n', "<br>");
    let with_bold = BOLD.replace_all(&with_breaks, "<b>${1}</b>");
    ITALIC.replace_all(&with_bold, "<i>${1}</i>").into_owned()
}
