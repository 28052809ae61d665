//! List constructors: bullet, ordered and task lists, with recursive
//! rendering of nested item sequences.

use super::{BLOCK_TERMINATOR, Generator};
use crate::error::{Error, Result};
use crate::escape::{self, Context};
use crate::node::{Kind, ListItem, Node};

#[derive(Clone, Copy)]
enum Mode {
    Bullet,
    Ordered,
    Checklist,
}

impl Generator {
    /// `- item` lines, one per item, terminated by a blank line.
    pub fn bullet_list<I>(&self, items: I, escape: bool) -> Result<Node>
    where
        I: IntoIterator,
        I::Item: Into<ListItem>,
    {
        self.guard_escape(escape)?;
        let items: Vec<ListItem> = items.into_iter().map(Into::into).collect();
        let (text, escaped) = render_items(&items, 0, Mode::Bullet, 1, None, escape);
        Ok(Node::new(Kind::BulletList, text, escaped))
    }

    /// `start. item` lines with sequential numbering. `start` must be at
    /// least 1.
    pub fn ordered_list<I>(&self, items: I, start: u64, escape: bool) -> Result<Node>
    where
        I: IntoIterator,
        I::Item: Into<ListItem>,
    {
        self.guard_escape(escape)?;
        if start < 1 {
            return Err(Error::OrderedListStart(start));
        }
        let items: Vec<ListItem> = items.into_iter().map(Into::into).collect();
        let (text, escaped) = render_items(&items, 0, Mode::Ordered, start, None, escape);
        Ok(Node::new(Kind::OrderedList, text, escaped))
    }

    /// A task list: `- [x] item` / `- [ ] item`. When `checked` is given it
    /// must pair one flag with every item; omitted flags default to
    /// unchecked.
    pub fn checklist<I>(&self, items: I, checked: Option<&[bool]>, escape: bool) -> Result<Node>
    where
        I: IntoIterator,
        I::Item: Into<ListItem>,
    {
        self.guard_escape(escape)?;
        let items: Vec<ListItem> = items.into_iter().map(Into::into).collect();
        if let Some(pattern) = checked {
            if pattern.len() != items.len() {
                return Err(Error::CheckedPattern {
                    items: items.len(),
                    checked: pattern.len(),
                });
            }
        }
        let (text, escaped) = render_items(&items, 0, Mode::Checklist, 1, checked, escape);
        Ok(Node::new(Kind::Checklist, text, escaped))
    }
}

/// Recursive renderer shared by the three list flavours. Returns the
/// rendered text (always ending in the block terminator) and the
/// accumulated taint flag. A nested sequence consumes a marker of its own
/// and renders one indent level deeper; nested ordered sequences restart
/// numbering at 1, nested checklists default to unchecked.
fn render_items(
    items: &[ListItem],
    level: usize,
    mode: Mode,
    start: u64,
    checked: Option<&[bool]>,
    escape: bool,
) -> (String, bool) {
    let indent = "  ".repeat(level);
    let mut parts: Vec<String> = Vec::with_capacity(items.len());
    let mut escaped_flag = escape;
    let mut idx = start;

    for (i, item) in items.iter().enumerate() {
        let prefix = match mode {
            Mode::Bullet => "- ".to_owned(),
            Mode::Ordered => {
                let p = format!("{idx}. ");
                idx = idx.saturating_add(1);
                p
            }
            Mode::Checklist => {
                let is_checked = checked.and_then(|p| p.get(i)).copied().unwrap_or(false);
                if is_checked { "- [x] " } else { "- [ ] " }.to_owned()
            }
        };

        match item {
            ListItem::Nested(children) => {
                let (text, esc) = render_items(children, level + 1, mode, 1, None, escape);
                escaped_flag &= esc;
                parts.push(format!("{indent}{prefix}\n{text}"));
            }
            ListItem::Text(s) => {
                let text = if escape {
                    escape::escape(s, Context::Plain)
                } else {
                    s.clone()
                };
                parts.push(format!("{indent}{prefix}{text}"));
            }
            ListItem::Node(n) => {
                escaped_flag &= n.is_escaped();
                parts.push(format!("{indent}{prefix}{}", n.as_str().trim()));
            }
        }
    }

    (parts.join("\n") + BLOCK_TERMINATOR, escaped_flag)
}
