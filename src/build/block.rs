//! Block-level constructors: paragraph, headings, blockquote, fenced code
//! block, horizontal rule, and the document root.

use super::{BLOCK_TERMINATOR, Generator};
use crate::error::{Error, Result};
use crate::escape;
use crate::node::{Content, Kind, Node, permitted_children};

impl Generator {
    /// A paragraph, terminated by a blank line.
    pub fn paragraph(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.build_inline(
            Kind::Paragraph,
            "",
            BLOCK_TERMINATOR,
            content.into(),
            escape,
            |s| s,
        )
    }

    /// An ATX heading at `level` (1 through 6), terminated by a blank line.
    pub fn heading(&self, level: u8, content: impl Into<Content>, escape: bool) -> Result<Node> {
        if !(1..=6).contains(&level) {
            return Err(Error::HeadingLevel(level));
        }
        let prefix = format!("{} ", "#".repeat(level as usize));
        self.build_inline(
            Kind::Heading,
            &prefix,
            BLOCK_TERMINATOR,
            content.into(),
            escape,
            |s| s,
        )
    }

    pub fn h1(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.heading(1, content, escape)
    }

    pub fn h2(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.heading(2, content, escape)
    }

    pub fn h3(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.heading(3, content, escape)
    }

    pub fn h4(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.heading(4, content, escape)
    }

    pub fn h5(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.heading(5, content, escape)
    }

    pub fn h6(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        self.heading(6, content, escape)
    }

    /// A block quote. The content is rendered as a paragraph first, then
    /// every non-blank line is prefixed with `"> "` and every blank line
    /// with `">"`, preserving the block terminator.
    pub fn blockquote(&self, content: impl Into<Content>, escape: bool) -> Result<Node> {
        let body = self.paragraph(content, escape)?;
        let prefixed: Vec<String> = body
            .as_str()
            .trim_end()
            .split('\n')
            .map(|line| {
                if line.trim().is_empty() {
                    ">".to_owned()
                } else {
                    format!("> {line}")
                }
            })
            .collect();
        let rendered = prefixed.join("\n") + BLOCK_TERMINATOR;
        Ok(Node::new(Kind::Blockquote, rendered, body.is_escaped()))
    }

    /// A fenced code block, optionally tagged with a language. Content is
    /// raw text only and is spliced literally; the fence is at least three
    /// backticks and strictly longer than any backtick run inside.
    pub fn code_block(
        &self,
        content: &str,
        language: Option<&str>,
        escape: bool,
    ) -> Result<Node> {
        self.guard_escape(escape)?;
        let fence = escape::code_block_fence(content);
        let lang = language.unwrap_or("");
        Ok(Node::new(
            Kind::CodeBlock,
            format!("{fence}{lang}\n{content}\n{fence}{BLOCK_TERMINATOR}"),
            escape,
        ))
    }

    /// `---`, terminated by a blank line.
    pub fn horizontal_rule(&self) -> Node {
        Node::new(Kind::HorizontalRule, format!("---{BLOCK_TERMINATOR}"), true)
    }

    /// The document root: each child block is right-trimmed of its trailing
    /// newlines, then the blocks are joined by a single newline.
    pub fn document(&self, children: &[Node]) -> Result<Node> {
        let accepts = permitted_children(Kind::Document);
        let mut parts: Vec<&str> = Vec::with_capacity(children.len());
        let mut escaped_flag = true;

        for child in children {
            if !accepts.contains(&child.kind()) {
                return Err(Error::InvalidNesting {
                    parent: Kind::Document,
                    child: child.kind(),
                });
            }
            escaped_flag &= child.is_escaped();
            parts.push(child.as_str().trim_end_matches('\n'));
        }

        Ok(Node::new(Kind::Document, parts.join("\n"), escaped_flag))
    }
}
