//! Column alignment for list output

/// Delimiter between fields of an input row
pub const DELIMITER: char = '|';

/// Space between aligned columns
const GLUE: &str = "  ";

/// Align `|`-delimited rows into columns
///
/// Every column but the last is padded to its widest cell; the last column
/// is written as-is. Rows are joined with `\n` without a trailing newline.
#[must_use]
pub fn columnize<S: AsRef<str>>(rows: &[S]) -> String {
    let cells: Vec<Vec<&str>> = rows
        .iter()
        .map(|row| row.as_ref().split(DELIMITER).map(str::trim).collect())
        .collect();

    let column_count = cells.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..column_count)
        .map(|column| {
            cells
                .iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    cells
        .iter()
        .map(|row| {
            let mut line = String::new();
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    line.push_str(GLUE);
                }
                line.push_str(cell);
                if column + 1 < row.len() {
                    let padding = widths[column].saturating_sub(cell.chars().count());
                    line.push_str(&" ".repeat(padding));
                }
            }
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop carriage returns and line feeds so a value fits on one row
#[must_use]
pub fn remove_line_break(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Build one delimited row from its fields
///
/// Delimiters inside a field are replaced so they cannot split it.
#[must_use]
pub fn row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| remove_line_break(field.as_ref()).replace(DELIMITER, "/"))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columnize_two_columns() {
        let rows = vec![
            "namespace1/name1|description1".to_string(),
            "ns/n|description2".to_string(),
        ];
        assert_eq!(
            columnize(&rows),
            "namespace1/name1  description1\nns/n              description2"
        );
    }

    #[test]
    fn test_columnize_three_columns() {
        let rows = ["!1|group/project|Fix", "!200|g/p|Add feature"];
        assert_eq!(
            columnize(&rows),
            "!1    group/project  Fix\n!200  g/p            Add feature"
        );
    }

    #[test]
    fn test_columnize_empty() {
        let rows: Vec<String> = Vec::new();
        assert_eq!(columnize(&rows), "");
    }

    #[test]
    fn test_columnize_empty_last_column_has_no_trailing_space() {
        let rows = ["#1|", "#22|title"];
        assert_eq!(columnize(&rows), "#1\n#22  title");
    }

    #[test]
    fn test_columnize_counts_chars_not_bytes() {
        let rows = ["日本語|a", "xy|b"];
        assert_eq!(columnize(&rows), "日本語  a\nxy   b");
    }

    #[test]
    fn test_remove_line_break() {
        assert_eq!(remove_line_break("123\r\n456\r789\n"), "123456789");
    }

    #[test]
    fn test_row_escapes_delimiter() {
        assert_eq!(row(&["#1", "a|b\nc"]), "#1|a/bc");
    }
}
