//! Terminal painter for `ScreenView`

use colored::Colorize;
use std::fmt::Write;

use productos::view::{COLUMNS, EMPTY_STATE, LOADING};
use productos::ScreenView;

const TITLE: &str = "Products CRUD";
const ROW_ACTIONS: &str = "[edit] [delete]";

/// Render the whole screen: form card, then the product table
pub fn paint(view: &ScreenView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", TITLE.bold());
    let _ = writeln!(out);
    out.push_str(&paint_form(view));
    let _ = writeln!(out);
    out.push_str(&paint_table(view));

    out
}

fn paint_form(view: &ScreenView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.form_heading.cyan().bold());
    if let Some(banner) = &view.error_banner {
        let _ = writeln!(out, "  {}", banner.white().on_red());
    }

    let label_width = view
        .inputs
        .iter()
        .map(|i| i.label.chars().count())
        .max()
        .unwrap_or(0);
    for input in &view.inputs {
        let _ = writeln!(
            out,
            "  {} {}",
            format!("{:<width$}", format!("{}:", input.label), width = label_width + 1).dimmed(),
            input.value
        );
    }

    let mut buttons = format!("[{}]", view.submit_label).green().to_string();
    if view.show_cancel {
        buttons.push(' ');
        buttons.push_str(&"[Cancel edit]".dimmed().to_string());
    }
    let _ = writeln!(out, "  {}", buttons);

    out
}

/// Render the product table with its loading and empty-state lines
pub fn paint_table(view: &ScreenView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Product list".bold());
    if view.loading {
        let _ = writeln!(out, "{}", LOADING.yellow());
    }

    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &view.rows {
        for (i, cell) in row.cells().iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    widths[5] = widths[5].max(ROW_ACTIONS.len());

    let header = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(c, *w))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", header.bold());
    let _ = writeln!(out, "{}", "-".repeat(header.chars().count()).dimmed());

    for row in &view.rows {
        let cells = row
            .cells()
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join(" | ");
        let _ = writeln!(out, "{} | {}", cells, ROW_ACTIONS.dimmed());
    }

    if view.empty_state {
        let _ = writeln!(out, "{}", EMPTY_STATE.italic());
    }

    out
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
