#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(5)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad_cell(&truncate_text(header, *width), *width, false, 0))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).map_or("-", String::as_str);
                    let truncated = truncate_text(value, *width);
                    let numeric = looks_numeric(&truncated);
                    let visible = truncated.chars().count();
                    let cell = if options.color {
                        colorize_label(&truncated)
                    } else {
                        truncated
                    };
                    pad_cell(&cell, *width, numeric, visible)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns one character at a time until the row fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(5))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

/// `visible` is the printed width of `value` when it carries ANSI codes; 0 means
/// measure `value` itself.
fn pad_cell(value: &str, width: usize, numeric: bool, visible: usize) -> String {
    let len = if visible == 0 {
        value.chars().count()
    } else {
        visible
    };
    let pad = " ".repeat(width.saturating_sub(len));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

fn colorize_label(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "positive" | "success" | "ok" => Some("32"),
        "neutral" | "skipped" => Some("33"),
        "negative" | "error" => Some("31"),
        _ => None,
    };
    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}
