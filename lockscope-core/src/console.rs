use std::env;
use std::sync::OnceLock;

fn use_color() -> bool {
    static USE_COLOR: OnceLock<bool> = OnceLock::new();
    *USE_COLOR.get_or_init(|| env::var_os("NO_COLOR").is_none())
}

fn paint(code: &str, text: &str) -> String {
    if use_color() {
        format!("\u{1b}[{}m{}\u{1b}[0m", code, text)
    } else {
        text.to_string()
    }
}

fn dim(text: &str) -> String {
    paint("2", text)
}

fn bold(text: &str) -> String {
    paint("1", text)
}

fn yellow(text: &str) -> String {
    paint("33", text)
}

pub fn header(command: &str, version: &str) {
    eprintln!("{}", dim(&format!("lockscope {} v{}", command, version)));
    eprintln!();
}

pub fn warn(message: &str) {
    let tag = yellow("warn");
    eprintln!("{} {}", tag, message);
}

pub fn info(message: &str) {
    println!("{}", message);
}

pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    for line in render_table(headers, rows) {
        println!("{}", line);
    }
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx < widths.len() && cell.len() > widths[idx] {
                widths[idx] = cell.len();
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);

    let header_cells: Vec<&str> = headers.to_vec();
    lines.push(bold(&pad_row(&header_cells, &widths)));

    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(pad_row(&cells, &widths));
    }

    lines
}

fn pad_row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();

    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            line.push_str("  ");
        }

        let width = widths.get(idx).copied().unwrap_or(cell.len());
        if idx + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$}", cell, width = width));
        }
    }

    line
}
