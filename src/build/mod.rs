//! Node constructors.
//!
//! All constructors live as methods on [`Generator`], which carries the
//! safe-mode policy as an explicit value so tests and concurrent callers get
//! deterministic behaviour. The module-level free functions in the crate
//! root are one-line wrappers that snapshot the global flag.

pub mod block;
pub mod inline;
pub mod list;
pub mod table;

pub use table::Alignment;

use crate::error::{Error, Result};
use crate::escape::{self, Context};
use crate::node::{Content, Item, Kind, Node, permitted_children};

/// The trailing blank line that separates block-level constructs.
pub(crate) const BLOCK_TERMINATOR: &str = "\n\n";

/// Constructor surface with an explicit safe-mode policy.
///
/// While safe mode is active, any call requesting `escape = false` fails
/// with [`Error::SafeMode`] instead of proceeding.
#[derive(Clone, Copy, Debug, Default)]
pub struct Generator {
    safe_mode: bool,
}

impl Generator {
    /// A generator with safe mode off.
    pub const fn new() -> Self {
        Generator { safe_mode: false }
    }

    pub const fn with_safe_mode(safe_mode: bool) -> Self {
        Generator { safe_mode }
    }

    pub const fn safe_mode(&self) -> bool {
        self.safe_mode
    }

    /// Snapshot of the process-wide flag, used by the free-function API.
    pub(crate) fn from_global() -> Self {
        Generator {
            safe_mode: crate::is_safe_mode(),
        }
    }

    pub(crate) fn guard_escape(&self, escape: bool) -> Result<()> {
        if !escape && self.safe_mode {
            return Err(Error::SafeMode);
        }
        Ok(())
    }

    /// Shared combinator behind bold, italic, strikethrough, link text,
    /// reference-link text, paragraph and heading.
    ///
    /// Normalises `content` into an item sequence, escapes raw text (when
    /// `escape` is set) or validates node kinds against the rule table for
    /// `kind`, concatenates, applies `post`, and wraps the body in the
    /// delimiters. The returned node's taint flag is the AND of `escape`
    /// and every child node's flag.
    pub(crate) fn build_inline(
        &self,
        kind: Kind,
        left: &str,
        right: &str,
        content: Content,
        escape: bool,
        post: impl FnOnce(String) -> String,
    ) -> Result<Node> {
        self.guard_escape(escape)?;

        let accepts = permitted_children(kind);
        let mut escaped_flag = escape;
        let mut body = String::new();

        for item in content.into_items() {
            match item {
                Item::Text(s) => {
                    if escape {
                        body.push_str(&escape::escape(&s, Context::Plain));
                    } else {
                        body.push_str(&s);
                    }
                }
                Item::Node(n) => {
                    if !accepts.contains(&n.kind()) {
                        return Err(Error::InvalidNesting {
                            parent: kind,
                            child: n.kind(),
                        });
                    }
                    escaped_flag &= n.is_escaped();
                    // already rendered and escaped at its own construction
                    body.push_str(n.as_str());
                }
            }
        }

        let body = post(body);
        Ok(Node::new(kind, format!("{left}{body}{right}"), escaped_flag))
    }
}
