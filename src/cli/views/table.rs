use colored::{Color, Colorize};

/// One table cell: text plus an optional colour applied after padding.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub color: Option<Color>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }

    fn render(&self, width: usize) -> String {
        let padded = format!("{:<width$}", self.text);
        match self.color {
            Some(color) => padded.color(color).to_string(),
            None => padded,
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

/// Plain-text table. Rows render in insertion order; an empty table
/// renders a single placeholder row.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
    placeholder: String,
}

impl Table {
    pub fn new(headers: &[&'static str], placeholder: &str) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
            placeholder: placeholder.to_string(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.width());
                }
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{h:<w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(format!("  {}", header.trim_end().bold()));

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        lines.push(format!("  {}", "─".repeat(total).dimmed()));

        if self.rows.is_empty() {
            lines.push(format!("  {}", self.placeholder.dimmed()));
        }
        for row in &self.rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| cell.render(*w))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(format!("  {}", line.trim_end()));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(rendered: &str) -> Vec<&str> {
        rendered.lines().skip(2).collect()
    }

    #[test]
    fn empty_table_renders_one_placeholder_row() {
        let table = Table::new(&["Time", "Level", "Message"], "No log data found");
        let rendered = table.render();
        let rows = body(&rendered);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("No log data found"));
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut table = Table::new(&["ID"], "none");
        for id in ["30", "10", "20"] {
            table.push(vec![Cell::plain(id)]);
        }
        let rendered = table.render();
        let ids: Vec<&str> = body(&rendered).iter().map(|r| r.trim()).collect();
        assert_eq!(ids, vec!["30", "10", "20"]);
    }

    #[test]
    fn columns_are_aligned() {
        let mut table = Table::new(&["A", "B"], "none");
        table.push(vec![Cell::plain("long value"), Cell::plain("x")]);
        table.push(vec![Cell::plain("s"), Cell::plain("y")]);
        let rendered = table.render();
        let rows = body(&rendered);
        assert_eq!(rows[0].find('x'), rows[1].find('y'));
    }
}
