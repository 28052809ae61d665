pub mod content;
pub mod kind;
pub mod rules;

pub use content::{Cell, Content, ListItem};
pub use kind::Kind;

pub(crate) use content::Item;
pub(crate) use rules::permitted_children;

use std::fmt::{self, Display, Formatter};

/// Immutable representation of a markdown fragment.
///
/// A `Node` is created exactly once by exactly one constructor and never
/// mutated afterwards. Its `text` holds the fully rendered markdown for the
/// node *and* all of its descendants; a parent splices that text verbatim
/// and never re-escapes it. Composition copies rendered text rather than
/// holding a child reference, so a constructed node is a terminal,
/// self-contained value that can be reused as input to any number of parent
/// constructions.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Node {
    kind: Kind,
    text: String,
    escaped: bool,
}

impl Node {
    pub(crate) fn new(kind: Kind, text: String, escaped: bool) -> Self {
        Node {
            kind,
            text,
            escaped,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The rendered markdown text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the node and return its rendered text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Conservative taint flag: `true` only if every piece of literal input
    /// reachable in this subtree passed through the escaping engine (or is
    /// fixed, always-safe boilerplate). Once a descendant was built with
    /// `escape = false` this is `false` for every ancestor.
    pub fn is_escaped(&self) -> bool {
        self.escaped
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(Kind::Bold.to_string(), "bold");
        assert_eq!(Kind::LineBreak.to_string(), "line_break");
        assert_eq!(Kind::HorizontalRule.to_string(), "horizontal_rule");
    }

    #[test]
    fn content_normalisation() {
        assert!(matches!(
            Content::Empty.into_items().as_slice(),
            [Item::Text(s)] if s.is_empty()
        ));

        let seq = Content::Sequence(vec![
            Content::from("a"),
            Content::Sequence(vec![Content::from("b"), Content::from("c")]),
        ]);
        let items = seq.into_items();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn rule_table_shape() {
        assert!(permitted_children(Kind::Bold).contains(&Kind::Italic));
        assert!(!permitted_children(Kind::Strikethrough).contains(&Kind::Strikethrough));
        assert!(permitted_children(Kind::Code).is_empty());
        assert!(!permitted_children(Kind::Link).contains(&Kind::Link));
        assert!(permitted_children(Kind::Document).contains(&Kind::Table));
        assert!(!permitted_children(Kind::Document).contains(&Kind::Bold));
    }

    #[test]
    fn nodes_render_through_display() {
        let n = Node::new(Kind::Text, "plain".to_owned(), true);
        assert_eq!(n.to_string(), "plain");
        assert_eq!(n.clone().into_string(), "plain");
    }
}
