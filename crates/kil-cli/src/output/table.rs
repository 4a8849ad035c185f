/// Widest a single cell may render before it is truncated.
const MAX_CELL_WIDTH: usize = 60;

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let header_line = format_row(headers.iter().copied(), &widths);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", truncate_text(cell, *width)))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn truncate_text(text: &str, width: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let mut truncated: String = single_line.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_columns() {
        let rendered = render_entity_table(
            &["name", "house"],
            &[
                vec!["Harry".into(), "Gryffindor".into()],
                vec!["Draco Malfoy".into(), "Slytherin".into()],
            ],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "name          house");
        assert_eq!(lines[2], "Harry         Gryffindor");
        assert_eq!(lines[3], "Draco Malfoy  Slytherin");
    }

    #[test]
    fn truncates_long_cells() {
        let long = "x".repeat(100);
        assert_eq!(truncate_text(&long, 10).chars().count(), 10);
        assert!(truncate_text(&long, 10).ends_with('…'));
        assert_eq!(truncate_text("a\nb", 10), "a b");
    }
}
