use crate::cli::ui::style::UiStyle;

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

/// Simple table model used for rendering read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }
}

/// Renders [`Table`] instances using simple padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render(table: &Table, style: &UiStyle) {
        for line in Self::lines(table, style) {
            println!("{line}");
        }
    }

    /// Produces the rendered lines; the last column is never padded.
    pub fn lines(table: &Table, style: &UiStyle) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &table.title {
            lines.push(style.apply_header_style(title));
        }

        if !table.columns.is_empty() {
            let total_width = table
                .columns
                .iter()
                .map(|col| col.width + 1)
                .sum::<usize>();
            let header = table
                .columns
                .iter()
                .map(|col| col.header.clone())
                .collect::<Vec<_>>();
            lines.push(style.apply_header_style(&Self::row_line(table, &header)));
            lines.push(style.horizontal_line(total_width));
        }

        for row in &table.rows {
            lines.push(Self::row_line(table, row));
        }
        lines
    }

    fn row_line(table: &Table, cells: &[String]) -> String {
        let mut line = String::new();
        for (idx, column) in table.columns.iter().enumerate() {
            if idx > 0 {
                line.push(' ');
            }
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            line.push_str(&format!("{:width$}", cell, width = column.width));
        }
        line.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_cells_to_column_width() {
        let mut table = Table::new(
            None::<String>,
            vec![TableColumn::new("ID", 4), TableColumn::new("Category", 8)],
        );
        table.add_row(vec!["0", "Food"]);
        table.add_row(vec!["12", ""]);

        let lines = TableRenderer::lines(&table, &UiStyle::with_color(false));

        assert_eq!(lines[0], "ID   Category");
        assert_eq!(lines[2], "0    Food");
        assert_eq!(lines[3], "12");
    }
}
