use crate::node::Kind;

/// Errors raised while constructing markdown nodes.
///
/// Construction is a pure pipeline: nothing is retried or recovered
/// internally, and a failed call leaves every previously built [`Node`]
/// untouched.
///
/// [`Node`]: crate::node::Node
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A child node's kind is not in the parent's permitted set.
    #[error("{parent} cannot contain node '{child}'")]
    InvalidNesting { parent: Kind, child: Kind },

    #[error("heading level must be between 1 and 6, got {0}")]
    HeadingLevel(u8),

    #[error("ordered list start must be at least 1, got {0}")]
    OrderedListStart(u64),

    #[error("checked pattern has {checked} entries but the checklist has {items} items")]
    CheckedPattern { items: usize, checked: usize },

    #[error("table must have at least one header column")]
    EmptyTableHeader,

    #[error("table row {row} has {len} columns but headers have {columns}")]
    RowLength {
        /// 1-based index of the offending data row.
        row: usize,
        len: usize,
        columns: usize,
    },

    #[error("alignment has {len} entries but the table has {columns} columns")]
    AlignmentLength { len: usize, columns: usize },

    /// An `escape = false` request was made while safe mode is active.
    /// Safe mode provides no override.
    #[error("unescaped content is not permitted while safe mode is active")]
    SafeMode,
}

pub type Result<T> = std::result::Result<T, Error>;
