//! Locates the one table row that carries slot data.

use tracing::{debug, error};

use super::document::{Document, Node, Query};
use crate::error::{ScoutError, ScoutResult};

/// Finds the data row inside a listing document.
///
/// The listing renders a single table whose first row is a header; the slot
/// data sits in the first row that has any `td` cell. First match wins even
/// if later rows would qualify too.
pub struct RowLocator {
    table: Query,
    row: Query,
    cell: Query,
}

impl RowLocator {
    pub fn new() -> ScoutResult<Self> {
        Ok(Self {
            table: Query::parse("table")?,
            row: Query::parse("tr")?,
            cell: Query::parse("td")?,
        })
    }

    /// First data-bearing row of the first table in the document.
    pub fn locate<'a>(&self, document: &'a Document) -> ScoutResult<Node<'a>> {
        let Some(table) = document.find_first(&self.table) else {
            error!("no table element in listing document");
            return Err(ScoutError::TableNotFound);
        };

        let rows = table.find_all(&self.row);
        if rows.len() < 2 {
            error!(
                "expected a header row and a data row, found {} row(s)",
                rows.len()
            );
            return Err(ScoutError::InsufficientRows { found: rows.len() });
        }

        match rows
            .iter()
            .find(|row| !row.find_all(&self.cell).is_empty())
        {
            Some(row) => {
                debug!("data row located among {} table rows", rows.len());
                Ok(*row)
            }
            None => {
                error!("none of the {} table rows carries a td cell", rows.len());
                Err(ScoutError::NoDataRow)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> RowLocator {
        RowLocator::new().unwrap()
    }

    #[test]
    fn document_without_table_is_rejected() {
        let document = Document::parse("<html><body><p>maintenance</p></body></html>");

        let err = locator().locate(&document).unwrap_err();
        assert!(matches!(err, ScoutError::TableNotFound));
    }

    #[test]
    fn header_only_table_is_rejected() {
        let document = Document::parse("<table><tr><th>Von</th></tr></table>");

        let err = locator().locate(&document).unwrap_err();
        assert!(matches!(err, ScoutError::InsufficientRows { found: 1 }));
    }

    #[test]
    fn table_without_data_cells_is_rejected() {
        let document = Document::parse(
            "<table><tr><th>Von</th></tr><tr><th>Bis</th></tr></table>",
        );

        let err = locator().locate(&document).unwrap_err();
        assert!(matches!(err, ScoutError::NoDataRow));
    }

    #[test]
    fn first_data_row_wins() {
        let document = Document::parse(
            "<table>\
               <tr><th>Von</th></tr>\
               <tr><td>first</td></tr>\
               <tr><td>second</td></tr>\
             </table>",
        );

        let row = locator().locate(&document).unwrap();
        assert_eq!(row.text(), "first");
    }

    #[test]
    fn only_the_first_table_is_scanned() {
        let document = Document::parse(
            "<table><tr><th>legend</th></tr></table>\
             <table><tr><th>Von</th></tr><tr><td>data</td></tr></table>",
        );

        // The leading single-row table is the one the locator sees.
        let err = locator().locate(&document).unwrap_err();
        assert!(matches!(err, ScoutError::InsufficientRows { found: 1 }));
    }
}
