use super::Node;

/// Heterogeneous constructor input: a single string, an already built node,
/// nothing at all, or an ordered sequence of any of these. Constructors take
/// `impl Into<Content>` so call sites can pass `&str`, `String`, `Node`,
/// vectors of those, or `Option`s directly.
#[derive(Clone, Debug)]
pub enum Content {
    /// Absent content; normalises to a single empty-string item.
    Empty,
    Text(String),
    Node(Node),
    Sequence(Vec<Content>),
}

/// A normalised content item as consumed by the builders.
#[derive(Clone, Debug)]
pub(crate) enum Item {
    Text(String),
    Node(Node),
}

impl Content {
    /// Flatten into an ordered item list. `Empty` stands for "no content"
    /// and contributes one empty string; nested sequences flatten in order.
    pub(crate) fn into_items(self) -> Vec<Item> {
        fn walk(content: Content, out: &mut Vec<Item>) {
            match content {
                Content::Empty => out.push(Item::Text(String::new())),
                Content::Text(s) => out.push(Item::Text(s)),
                Content::Node(n) => out.push(Item::Node(n)),
                Content::Sequence(seq) => {
                    for c in seq {
                        walk(c, out);
                    }
                }
            }
        }
        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_owned())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<Node> for Content {
    fn from(n: Node) -> Self {
        Content::Node(n)
    }
}

impl From<Vec<Content>> for Content {
    fn from(seq: Vec<Content>) -> Self {
        Content::Sequence(seq)
    }
}

impl From<Vec<&str>> for Content {
    fn from(seq: Vec<&str>) -> Self {
        Content::Sequence(seq.into_iter().map(Content::from).collect())
    }
}

impl From<Vec<String>> for Content {
    fn from(seq: Vec<String>) -> Self {
        Content::Sequence(seq.into_iter().map(Content::from).collect())
    }
}

impl From<Vec<Node>> for Content {
    fn from(seq: Vec<Node>) -> Self {
        Content::Sequence(seq.into_iter().map(Content::from).collect())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(c) => c.into(),
            None => Content::Empty,
        }
    }
}

/// A list item: literal text, a built node, or a nested item sequence which
/// renders one indent level deeper.
#[derive(Clone, Debug)]
pub enum ListItem {
    Text(String),
    Node(Node),
    Nested(Vec<ListItem>),
}

impl From<&str> for ListItem {
    fn from(s: &str) -> Self {
        ListItem::Text(s.to_owned())
    }
}

impl From<String> for ListItem {
    fn from(s: String) -> Self {
        ListItem::Text(s)
    }
}

impl From<Node> for ListItem {
    fn from(n: Node) -> Self {
        ListItem::Node(n)
    }
}

impl<T: Into<ListItem>> From<Vec<T>> for ListItem {
    fn from(seq: Vec<T>) -> Self {
        ListItem::Nested(seq.into_iter().map(Into::into).collect())
    }
}

/// A table cell: literal text or a built node. Cells do not nest, so there
/// is no sequence variant.
#[derive(Clone, Debug)]
pub enum Cell {
    Text(String),
    Node(Node),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_owned())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<Node> for Cell {
    fn from(n: Node) -> Self {
        Cell::Node(n)
    }
}
