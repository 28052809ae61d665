//! Table constructor.

use super::{BLOCK_TERMINATOR, Generator};
use crate::error::{Error, Result};
use crate::escape::{self, Context};
use crate::node::{Cell, Kind, Node};

/// Column alignment for the separator row.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    fn marker(self) -> &'static str {
        match self {
            Alignment::Left => ":---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
        }
    }
}

impl Generator {
    /// A GFM table: header row, alignment row, then data rows, terminated
    /// by a blank line.
    ///
    /// At least one header column is required, every data row must have
    /// exactly the header's column count, and `alignment` (when given) must
    /// carry one entry per column. Without an alignment every column
    /// renders as plain `---`.
    pub fn table<H, R, C>(
        &self,
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
        self.guard_escape(escape)?;

        let headers: Vec<Cell> = headers.into_iter().map(Into::into).collect();
        let columns = headers.len();
        if columns == 0 {
            return Err(Error::EmptyTableHeader);
        }

        if let Some(spec) = alignment {
            if spec.len() != columns {
                return Err(Error::AlignmentLength {
                    len: spec.len(),
                    columns,
                });
            }
        }

        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::RowLength {
                    row: i + 1,
                    len: row.len(),
                    columns,
                });
            }
        }

        let mut escaped_flag = escape;
        let mut render_row = |cells: &[Cell]| -> String {
            let rendered: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Text(s) => {
                        if escape {
                            escape::escape(s, Context::TableCell)
                        } else {
                            s.clone()
                        }
                    }
                    Cell::Node(n) => {
                        escaped_flag &= n.is_escaped();
                        n.as_str().to_owned()
                    }
                })
                .collect();
            rendered.join(" | ")
        };

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(render_row(&headers));
        lines.push(match alignment {
            Some(spec) => spec
                .iter()
                .map(|a| a.marker())
                .collect::<Vec<_>>()
                .join(" | "),
            None => vec!["---"; columns].join(" | "),
        });
        for row in &rows {
            lines.push(render_row(row));
        }

        Ok(Node::new(
            Kind::Table,
            lines.join("\n") + BLOCK_TERMINATOR,
            escaped_flag,
        ))
    }
}
