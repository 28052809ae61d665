//! The escaping engine: pure functions turning raw text into markdown-safe
//! text under a given context, plus backtick fence sizing for code spans and
//! fenced blocks.
//!
//! Escaping runs in three passes and the order matters: common rules first,
//! then context rules, then line-leading rules. The common pass handles the
//! backslash together with every other special character in a single sweep,
//! so later passes never re-escape backslashes it introduced.

/// Where a piece of literal text is about to appear. Contexts share the
/// common rule set; `TableCell` and `Url` add rules of their own.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Context {
    /// Plain inline text: paragraphs, emphasis spans, headings, list items.
    Plain,
    /// Adds `|` to the escaped set so cell boundaries survive.
    TableCell,
    /// Minimal percent-encoding on top of the common rules: spaces become
    /// `%20`, parentheses `%28`/`%29`. Not full URI escaping.
    Url,
}

/// Escape `text` for the given `context`. Total: every input succeeds,
/// escaping is purely additive.
pub fn escape(text: &str, context: Context) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '*' | '_' | '`' | '~' | '[' | ']' | '(' | ')' | '<' | '>' | '&' => {
                out.push('\\');
                out.push(ch);
            }
            '|' if context == Context::TableCell => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }

    if context == Context::Url {
        out = out
            .replace(' ', "%20")
            .replace('(', "%28")
            .replace(')', "%29");
    }

    escape_line_starts(&out)
}

/// Escape patterns that only have meaning at the start of a line: `#`
/// (heading), `- ` / `+ ` (bullet item) and `<digits>. ` (ordered item).
/// Lines are split on `\n` or `\r\n` and rejoined with `\n`.
fn escape_line_starts(text: &str) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .map(escape_line_start)
        .collect();
    lines.join("\n")
}

fn escape_line_start(line: &str) -> String {
    let mut line = line.to_owned();

    if line.starts_with('#') {
        line.insert(0, '\\');
    }

    if line.starts_with("- ") {
        line.replace_range(0..1, "\\-");
    } else if line.starts_with("+ ") {
        line.replace_range(0..1, "\\+");
    }

    // A leading decimal number followed by ". " would start an ordered list
    // item; escaping the dot is enough to neutralise it.
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let mut rest = line[digits..].chars();
        if rest.next() == Some('.') && rest.next().is_some_and(char::is_whitespace) {
            line.insert(digits, '\\');
        }
    }

    line
}

/// Length of the longest run of consecutive backticks in `text`.
pub(crate) fn longest_backtick_run(text: &str) -> usize {
    let mut max_ticks = 0usize;
    let mut cur = 0usize;
    for ch in text.chars() {
        if ch == '`' {
            cur += 1;
            if cur > max_ticks {
                max_ticks = cur;
            }
        } else {
            cur = 0;
        }
    }
    max_ticks
}

/// Fence for an inline code span: one backtick longer than any run inside
/// the content, minimum one.
pub(crate) fn inline_code_fence(text: &str) -> String {
    "`".repeat(longest_backtick_run(text) + 1)
}

/// Fence for a fenced code block: strictly longer than any run inside the
/// content, minimum three.
pub(crate) fn code_block_fence(text: &str) -> String {
    "`".repeat(std::cmp::max(3, longest_backtick_run(text) + 1))
}
