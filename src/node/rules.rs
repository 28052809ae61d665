//! The static nesting rule table: which child kinds each parent kind may
//! legally contain. Consulted at construction time, never at render time.

use super::Kind;

const BOLD: &[Kind] = &[
    Kind::Text,
    Kind::Italic,
    Kind::Code,
    Kind::Strikethrough,
    Kind::Link,
    // nested bold is legal and yields ****content****
    Kind::Bold,
];

const ITALIC: &[Kind] = &[
    Kind::Text,
    Kind::Bold,
    Kind::Code,
    Kind::Strikethrough,
    Kind::Link,
    Kind::Italic,
];

// strikethrough cannot contain strikethrough
const STRIKETHROUGH: &[Kind] = &[Kind::Text, Kind::Bold, Kind::Italic, Kind::Code, Kind::Link];

// no nested links
const LINK_TEXT: &[Kind] = &[
    Kind::Text,
    Kind::Bold,
    Kind::Italic,
    Kind::Code,
    Kind::Strikethrough,
];

const PARAGRAPH: &[Kind] = &[
    Kind::Text,
    Kind::Bold,
    Kind::Italic,
    Kind::Code,
    Kind::Strikethrough,
    Kind::Image,
    Kind::LineBreak,
];

const DOCUMENT: &[Kind] = &[
    Kind::Paragraph,
    Kind::Heading,
    Kind::Blockquote,
    Kind::CodeBlock,
    Kind::BulletList,
    Kind::OrderedList,
    Kind::Checklist,
    Kind::Table,
    Kind::HorizontalRule,
    Kind::LinkReference,
    Kind::Empty,
];

/// The set of child kinds `parent` may contain. Kinds that only accept raw
/// text (or nothing) map to the empty set. Lists and tables take their
/// items/cells directly and are not routed through this table.
pub(crate) fn permitted_children(parent: Kind) -> &'static [Kind] {
    match parent {
        Kind::Bold => BOLD,
        Kind::Italic => ITALIC,
        Kind::Strikethrough => STRIKETHROUGH,
        Kind::Link | Kind::ReferenceLink | Kind::Heading => LINK_TEXT,
        Kind::Paragraph => PARAGRAPH,
        // blockquote reuses the paragraph set; nested blockquotes or lists
        // inside quotes are not modelled.
        Kind::Blockquote => PARAGRAPH,
        Kind::Document => DOCUMENT,
        Kind::Code
        | Kind::CodeBlock
        | Kind::Image
        | Kind::LineBreak
        | Kind::Text
        | Kind::BulletList
        | Kind::OrderedList
        | Kind::Checklist
        | Kind::Table
        | Kind::HorizontalRule
        | Kind::LinkReference
        | Kind::Empty => &[],
    }
}
