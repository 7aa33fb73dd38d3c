//! Quote-aware splitting for the product sheet.
//!
//! Only two escapes are honoured: `""` inside a quoted field, and commas or
//! newlines inside quotes. Anything else is literal text.

/// Splits `text` into logical rows, dropping blank lines and the header.
///
/// A row whose running `"` count is odd swallows following lines (joined with
/// `\n`) until the count turns even or input runs out.
pub fn logical_rows(text: &str) -> Vec<String> {
    let mut lines = text.split('\n').filter(|l| !l.trim().is_empty()).skip(1);
    let mut rows = Vec::new();

    while let Some(first) = lines.next() {
        let mut row = first.to_string();
        let mut quotes = quote_count(first);

        while quotes % 2 == 1 {
            let Some(next) = lines.next() else { break };
            row.push('\n');
            row.push_str(next);
            quotes += quote_count(next);
        }

        rows.push(row);
    }

    rows
}

/// Splits one logical row into raw (untrimmed) fields.
pub fn split_fields(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

fn quote_count(line: &str) -> usize {
    line.matches('"').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_count_counts_escaped_pairs_twice() {
        assert_eq!(quote_count(r#""5"" wide""#), 4);
    }

    #[test]
    fn trailing_comma_yields_empty_last_field() {
        assert_eq!(split_fields("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn empty_row_is_one_empty_field() {
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn whitespace_only_lines_are_dropped_before_header() {
        let rows = logical_rows("\n   \nheader\nrow\n");
        assert_eq!(rows, vec!["row"]);
    }
}
