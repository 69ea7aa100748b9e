//! Table reconstruction from layout-preserving text (`pdftotext -layout`).
//!
//! Layout output keeps column alignment with runs of spaces. A line that
//! splits into at least [`MIN_COLUMNS`] gap-separated segments is a table
//! row; consecutive rows form one table, and any other line (blank, title,
//! page footer) closes it.

use super::{Row, Table};
use crate::parsing::tokens::split_by_whitespace_gaps;

pub const MIN_COLUMNS: usize = 3;

/// Each row is a single cell holding the segments joined by one space,
/// so one logical catalog line occupies one cell.
pub fn tables_from_layout(lines: &[String]) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Table = Vec::new();

    for line in lines {
        match layout_row(line) {
            Some(row) => current.push(row),
            None => {
                if !current.is_empty() {
                    tables.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        tables.push(current);
    }

    tables
}

fn layout_row(line: &str) -> Option<Row> {
    let segments = split_by_whitespace_gaps(line);
    if segments.len() < MIN_COLUMNS {
        return None;
    }
    Some(vec![Some(segments.join(" "))])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_table_between_title_and_footer() {
        let page = lines(&[
            "TABELA DE PRECO ATUALIZADA 04/08",
            "",
            "Codigo   Descricao                    Unid   Preco       Qtde",
            "55885    ACUCAR DE COCO 150G UNILIFE  UN     17,9900     4,0000",
            "10233    DIPIRONA 500MG CX 10         CX     4,5000      1,0000",
            "",
            "Pagina 1",
        ]);

        let tables = tables_from_layout(&page);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].len(), 3);
        assert_eq!(
            tables[0][1],
            vec![Some(
                "55885 ACUCAR DE COCO 150G UNILIFE UN 17,9900 4,0000".to_string()
            )]
        );
    }

    #[test]
    fn test_interruption_splits_tables() {
        let page = lines(&[
            "1   GAZE   PCT   2,5000   1,0000",
            "MEDICAMENTOS CONTROLADOS",
            "2   SORO   FR    3,0000   1,0000",
        ]);
        assert_eq!(tables_from_layout(&page).len(), 2);
    }

    #[test]
    fn test_prose_is_not_a_table() {
        let page = lines(&["Precos sujeitos a alteracao sem aviso previo."]);
        assert!(tables_from_layout(&page).is_empty());
    }
}
