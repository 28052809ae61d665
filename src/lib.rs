//! Build well-formed GitHub-flavored Markdown from typed, composable nodes.
//!
//! Every constructor returns an immutable [`Node`] holding the fully
//! rendered markdown for itself and all of its descendants. Literal content
//! is escaped exactly once, at the leaf that introduced it; composite
//! constructors validate their children's kinds against a static nesting
//! rule table and fold every child's [`Node::is_escaped`] taint flag into
//! their own, so a `false` anywhere in a tree is visible at the root.
//!
//! ```
//! use markdown_builder as md;
//!
//! let title = md::heading(1, "Title", true)?;
//! assert_eq!(title.as_str(), "# Title\n\n");
//!
//! let body = md::paragraph(
//!     vec![md::Content::from("see "), md::bold("this *note*", true)?.into()],
//!     true,
//! )?;
//! let doc = md::document(&[title, body])?;
//! assert!(doc.is_escaped());
//! # Ok::<(), md::Error>(())
//! ```
//!
//! Escaping can be opted out of per call (`escape = false`), which clears
//! the taint flag on the result and every future ancestor. Enabling safe
//! mode (globally via [`set_safe_mode`], or per [`Generator`]) turns any
//! such request into an error.

pub mod build;
pub mod error;
pub mod escape;
pub mod node;

pub use build::{Alignment, Generator};
pub use error::{Error, Result};
pub use escape::Context;
pub use node::{Cell, Content, Kind, ListItem, Node};

use std::sync::atomic::{AtomicBool, Ordering};

// Single-writer discipline: the flag is configuration fixed before
// concurrent work starts, so Relaxed is sufficient.
static SAFE_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable process-wide safe mode. While active, every free
/// constructor in this module rejects `escape = false` with
/// [`Error::SafeMode`].
pub fn set_safe_mode(enabled: bool) {
    SAFE_MODE.store(enabled, Ordering::Relaxed);
}

/// Whether process-wide safe mode is currently active.
pub fn is_safe_mode() -> bool {
    SAFE_MODE.load(Ordering::Relaxed)
}

// Free-function constructors: each one snapshots the global safe-mode flag
// into a Generator and delegates. See the methods of the same name on
// `Generator` for behaviour and failure semantics.

pub fn text(content: &str, escape: bool) -> Result<Node> {
    Generator::from_global().text(content, escape)
}

pub fn bold(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().bold(content, escape)
}

pub fn italic(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().italic(content, escape)
}

pub fn strikethrough(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().strikethrough(content, escape)
}

pub fn code(content: &str, escape: bool) -> Result<Node> {
    Generator::from_global().code(content, escape)
}

pub fn link(text: impl Into<Content>, url: &str, escape: bool) -> Result<Node> {
    Generator::from_global().link(text, url, escape)
}

pub fn image(alt_text: &str, url: &str, escape: bool) -> Result<Node> {
    Generator::from_global().image(alt_text, url, escape)
}

pub fn reference_link(text: impl Into<Content>, ref_id: &str, escape: bool) -> Result<Node> {
    Generator::from_global().reference_link(text, ref_id, escape)
}

pub fn link_reference(ref_id: &str, url: &str) -> Node {
    Generator::from_global().link_reference(ref_id, url)
}

pub fn line_break() -> Node {
    Generator::from_global().line_break()
}

pub fn empty() -> Node {
    Generator::from_global().empty()
}

pub fn paragraph(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().paragraph(content, escape)
}

pub fn heading(level: u8, content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().heading(level, content, escape)
}

pub fn h1(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().h1(content, escape)
}

pub fn h2(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().h2(content, escape)
}

pub fn h3(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().h3(content, escape)
}

pub fn h4(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().h4(content, escape)
}

pub fn h5(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().h5(content, escape)
}

pub fn h6(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().h6(content, escape)
}

pub fn blockquote(content: impl Into<Content>, escape: bool) -> Result<Node> {
    Generator::from_global().blockquote(content, escape)
}

pub fn code_block(content: &str, language: Option<&str>, escape: bool) -> Result<Node> {
    Generator::from_global().code_block(content, language, escape)
}

pub fn horizontal_rule() -> Node {
    Generator::from_global().horizontal_rule()
}

pub fn document(children: &[Node]) -> Result<Node> {
    Generator::from_global().document(children)
}

pub fn bullet_list<I>(items: I, escape: bool) -> Result<Node>
where
    I: IntoIterator,
    I::Item: Into<ListItem>,
{
    Generator::from_global().bullet_list(items, escape)
}

pub fn ordered_list<I>(items: I, start: u64, escape: bool) -> Result<Node>
where
    I: IntoIterator,
    I::Item: Into<ListItem>,
{
    Generator::from_global().ordered_list(items, start, escape)
}

pub fn checklist<I>(items: I, checked: Option<&[bool]>, escape: bool) -> Result<Node>
where
    I: IntoIterator,
    I::Item: Into<ListItem>,
{
    Generator::from_global().checklist(items, checked, escape)
}

pub fn table<H, R, C>(
    headers: H,
    rows: R,
    alignment: Option<&[Alignment]>,
    escape: bool,
) -> Result<Node>
where
    H: IntoIterator,
    H::Item: Into<Cell>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: Into<Cell>,
{
    Generator::from_global().table(headers, rows, alignment, escape)
}
