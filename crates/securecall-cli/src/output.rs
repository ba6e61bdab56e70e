//! Plain-text table rendering

/// Render rows as a padded two-space-separated table with a header rule
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(
        &headers.iter().map(ToString::to_string).collect::<Vec<_>>(),
        &widths,
    ));
    out.push('\n');

    let rule_width: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for row in rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }

    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(cells.len());
    for (cell, &width) in cells.iter().zip(widths) {
        parts.push(format!("{cell:<width$}"));
    }
    parts.join("  ").trim_end().to_string()
}

/// Render a label/value listing, aligned on the label column
pub fn render_pairs(pairs: &[(&str, String)]) -> String {
    let label_width = pairs
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, value) in pairs {
        out.push_str(&format!("{label:<label_width$}  {value}\n"));
    }
    out
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_table_pads_columns() {
        let table = render_table(
            &["id", "value"],
            &[
                vec!["CALL-001".to_string(), "94".to_string()],
                vec!["C".to_string(), "7".to_string()],
            ],
        );

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "id        value");
        assert_eq!(lines[2], "CALL-001  94");
        assert_eq!(lines[3], "C         7");
    }

    #[test]
    fn test_render_table_empty_rows_keeps_header() {
        let table = render_table(&["a", "b"], &[]);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_render_pairs_aligns_labels() {
        let listing = render_pairs(&[
            ("Total", "5".to_string()),
            ("AI-Detected", "2".to_string()),
        ]);

        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines[0], "Total        5");
        assert_eq!(lines[1], "AI-Detected  2");
    }
}
