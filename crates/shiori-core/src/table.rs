//! `psql`-style terminal table for a catalog.

use unicode_width::UnicodeWidthStr;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
    cells: Vec<String>,
}

impl Column {
    fn new(header: &'static str, align: Align) -> Self {
        Self {
            header,
            align,
            cells: Vec::new(),
        }
    }

    fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.width())
            .chain(std::iter::once(self.header.width()))
            .max()
            .unwrap_or(0)
    }
}

/// Render the catalog with the main author only and a readable download
/// time. Widths account for wide (CJK) characters.
pub fn render_table(catalog: &Catalog, show_index: bool) -> String {
    let mut columns = Vec::with_capacity(7);
    if show_index {
        columns.push(Column::new("#", Align::Right));
    }
    columns.extend([
        Column::new("Title", Align::Left),
        Column::new("Score", Align::Right),
        Column::new("Status", Align::Left),
        Column::new("Chapters", Align::Right),
        Column::new("Author", Align::Left),
        Column::new("Download time (seconds)", Align::Left),
    ]);

    for (i, row) in catalog.rows().iter().enumerate() {
        let mut cells = Vec::with_capacity(columns.len());
        if show_index {
            cells.push(i.to_string());
        }
        cells.extend([
            row.title.clone(),
            row.score.to_string(),
            row.status.clone(),
            row.chapters.to_string(),
            row.main_author().to_string(),
            format_duration(row.estimated_download),
        ]);
        for (column, cell) in columns.iter_mut().zip(cells) {
            column.cells.push(cell);
        }
    }

    let widths: Vec<usize> = columns.iter().map(Column::width).collect();
    let border = rule(&widths, '+', '+');

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&line(
        columns.iter().map(|c| (c.header, c.align)),
        &widths,
    ));
    out.push_str(&rule(&widths, '|', '+'));
    for r in 0..catalog.len() {
        out.push_str(&line(
            columns.iter().map(|c| (c.cells[r].as_str(), c.align)),
            &widths,
        ));
    }
    out.push_str(&border);
    out
}

/// Whole seconds as `D days HH:MM:SS`. Rounds half to even; negative and
/// non-finite values count as zero.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.round_ties_even() as u64
    } else {
        0
    };
    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let secs = total % 60;
    format!("{days} days {hours:02}:{minutes:02}:{secs:02}")
}

fn rule(widths: &[usize], edge: char, joint: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("{edge}{}{edge}\n", segments.join(&joint.to_string()))
}

fn line<'a>(cells: impl Iterator<Item = (&'a str, Align)>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|((text, align), width)| format!(" {} ", pad(text, *width, align)))
        .collect();
    format!("|{}|\n", padded.join("|"))
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}
