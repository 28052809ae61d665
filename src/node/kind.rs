use std::fmt::{self, Display, Formatter};

/// The closed set of node kinds. Every constructor produces exactly one of
/// these, and the nesting rule table is keyed on them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    Bold,
    Italic,
    Code,
    Strikethrough,
    Link,
    Image,
    LineBreak,
    ReferenceLink,
    Text,
    Paragraph,
    Heading,
    Blockquote,
    CodeBlock,
    Document,
    BulletList,
    OrderedList,
    Checklist,
    Table,
    HorizontalRule,
    LinkReference,
    Empty,
}

impl Kind {
    /// Stable snake_case name, used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Bold => "bold",
            Kind::Italic => "italic",
            Kind::Code => "code",
            Kind::Strikethrough => "strikethrough",
            Kind::Link => "link",
            Kind::Image => "image",
            Kind::LineBreak => "line_break",
            Kind::ReferenceLink => "reference_link",
            Kind::Text => "text",
            Kind::Paragraph => "paragraph",
            Kind::Heading => "heading",
            Kind::Blockquote => "blockquote",
            Kind::CodeBlock => "code_block",
            Kind::Document => "document",
            Kind::BulletList => "bullet_list",
            Kind::OrderedList => "ordered_list",
            Kind::Checklist => "checklist",
            Kind::Table => "table",
            Kind::HorizontalRule => "horizontal_rule",
            Kind::LinkReference => "link_reference",
            Kind::Empty => "empty",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
