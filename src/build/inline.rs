//! Inline constructors: emphasis spans, code spans, links and images, plus
//! the fixed leaves (line break, empty).

use super::Generator;
use crate::error::Result;
use crate::escape::{self, Context};
use crate::node::{Content, Kind, Node};

impl Generator {
    /// A plain text leaf: escaped literal content with no delimiters.
    pub fn text(&self, content: &str, escape: bool) -> Result<Node> {
        self.guard_escape(escape)?;
        let body = if escape {
            escape::escape(content, Context::Plain)
        } else {
            content.to_owned()
        };
        Ok(Node::new(Kind::Text, body, escape))
    }

    /// `**content**`
    pub fn bold(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.build_inline(Kind::Bold, "**", "**", content.into(), escape, |s| s)
    }

    /// `*content*`
    pub fn italic(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.build_inline(Kind::Italic, "*", "*", content.into(), escape, |s| s)
    }

    /// `~~content~~`
    pub fn strikethrough(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.build_inline(Kind::Strikethrough, "~~", "~~", content.into(), escape, |s| s)
    }

    /// An inline code span. Only raw text is accepted so a code span can
    /// never contain partially escaped markup; the backtick fence is sized
    /// to exceed the longest backtick run in the content, which keeps the
    /// literal body unambiguous without character escaping.
    pub fn code(&self, content: &str, escape: bool) -> Result<Node> {
        self.guard_escape(escape)?;
        let fence = escape::inline_code_fence(content);
        Ok(Node::new(
            Kind::Code,
            format!("{fence}{content}{fence}"),
            escape,
        ))
    }

    /// `[text](url)`. The URL is always escaped under the URL context; the
    /// `escape` flag only governs the visible text. A caller may want
    /// literal display text but must never be able to break the link target
    /// syntax.
    pub fn link(&self, text: impl Into<Content>, url: &str, escape: bool) -> Result<Node> {
        let url = escape::escape(url, Context::Url);
        self.build_inline(
            Kind::Link,
            "[",
            &format!("]({url})"),
            text.into(),
            escape,
            |s| s,
        )
    }

    /// `![alt_text](url)`. As with [`link`](Self::link), the URL is always
    /// escaped.
    pub fn image(&self, alt_text: &str, url: &str, escape: bool) -> Result<Node> {
        self.guard_escape(escape)?;
        let alt = if escape {
            escape::escape(alt_text, Context::Plain)
        } else {
            alt_text.to_owned()
        };
        let url = escape::escape(url, Context::Url);
        Ok(Node::new(
            Kind::Image,
            format!("![{alt}]({url})"),
            escape,
        ))
    }

    /// The text half of a reference-style link, `[text][ref_id]`. The
    /// matching definition comes from [`link_reference`](Self::link_reference);
    /// this crate does not track or deduplicate reference ids across a
    /// document.
    pub fn reference_link(
        &self,
        text: impl Into<Content>,
        ref_id: &str,
        escape: bool,
    ) -> Result<Node> {
        let id = escape::escape(ref_id, Context::Url);
        self.build_inline(
            Kind::ReferenceLink,
            "[",
            &format!("][{id}]"),
            text.into(),
            escape,
            |s| s,
        )
    }

    /// The definition half of a reference-style link, `[ref_id]: url`.
    pub fn link_reference(&self, ref_id: &str, url: &str) -> Node {
        let url = escape::escape(url, Context::Url);
        Node::new(Kind::LinkReference, format!("[{ref_id}]: {url}\n"), true)
    }

    /// A hard line break: two trailing spaces and a newline.
    pub fn line_break(&self) -> Node {
        Node::new(Kind::LineBreak, "  \n".to_owned(), true)
    }

    /// An always-escaped empty node.
    pub fn empty(&self) -> Node {
        Node::new(Kind::Empty, String::new(), true)
    }
}
