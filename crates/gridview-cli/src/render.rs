//! Terminal rendering of the current page, the pagination footer, and the
//! selection action bar.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gridview_core::{BulkAction, BulkReport, TableController};
use gridview_model::{Payment, Record, RecordId, StatusValue, Task};

/// Ids listed in a bulk action notice before eliding the rest.
const NOTICE_ID_LIMIT: usize = 3;

/// A record shape that knows how to lay itself out as a table row.
pub trait TableRow: Record {
    /// Column headers, excluding the selection column.
    const COLUMNS: &'static [&'static str];

    /// Indices (into `COLUMNS`) of right-aligned numeric columns.
    const NUMERIC_COLUMNS: &'static [usize] = &[];

    /// Noun for notices ("payment", "task").
    const NOUN: &'static str;

    fn cells(&self) -> Vec<Cell>;
}

impl TableRow for Payment {
    const COLUMNS: &'static [&'static str] = &["ID", "Status", "Email", "Amount"];
    const NUMERIC_COLUMNS: &'static [usize] = &[3];
    const NOUN: &'static str = "payment";

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(self.id.as_str()),
            status_cell(self.status),
            Cell::new(&self.email),
            Cell::new(format_amount(self.amount)),
        ]
    }
}

impl TableRow for Task {
    const COLUMNS: &'static [&'static str] = &[
        "Task", "Title", "Status", "Priority", "Label", "Estimate", "Created",
    ];
    const NUMERIC_COLUMNS: &'static [usize] = &[5];
    const NOUN: &'static str = "task";

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::new(self.id.as_str()),
            Cell::new(&self.title),
            status_cell(self.status),
            Cell::new(self.priority.label()),
            dim_cell(self.label),
            Cell::new(format!("{:.2}h", self.estimated_hours)),
            dim_cell(self.created_at.format("%Y-%m-%d")),
        ]
    }
}

/// `$1,234.00` style formatting for whole currency units.
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}.00")
}

/// Render the current page with its footer and, when rows are selected, the
/// action bar.
pub fn render_page<R: TableRow>(controller: &TableController<R>, styled: bool) -> String {
    let mut table = Table::new();
    let mut header = vec![header_cell(page_checkbox(controller))];
    header.extend(R::COLUMNS.iter().map(|name| header_cell(*name)));
    table.set_header(header);
    apply_table_style(&mut table, styled);
    align_column(&mut table, 0, CellAlignment::Center);
    for index in R::NUMERIC_COLUMNS {
        align_column(&mut table, index + 1, CellAlignment::Right);
    }

    let rows = controller.visible_records();
    if rows.is_empty() {
        let mut empty = vec![Cell::new("")];
        empty.push(dim_cell("No results."));
        table.add_row(empty);
    }
    for row in rows {
        let mut cells = vec![Cell::new(checkbox(controller.is_selected(row.id())))];
        cells.extend(row.cells());
        table.add_row(cells);
    }

    let mut out = table.to_string();
    out.push('\n');
    out.push_str(&render_footer(controller));
    if let Some(bar) = render_action_bar::<R>(controller.selection().len()) {
        out.push('\n');
        out.push_str(&bar);
    }
    out
}

/// Selection count, rows-per-page selector, page indicator, and the
/// navigation buttons with the page-jump input.
pub fn render_footer<R: Record>(controller: &TableController<R>) -> String {
    let snapshot = controller.snapshot();
    let sizes = controller
        .options()
        .page_sizes
        .iter()
        .map(|size| {
            if *size == snapshot.page_size {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let nav = |enabled: bool, label: &str| {
        if enabled {
            label.to_string()
        } else {
            " ".repeat(label.chars().count())
        }
    };
    format!(
        "{} of {} row(s) selected.    Rows per page: {}    Page {} of {}    {} {} [{}] {} {}",
        snapshot.selected_count,
        snapshot.total_records,
        sizes,
        snapshot.page_number,
        snapshot.total_pages,
        nav(snapshot.can_previous_page, "«"),
        nav(snapshot.can_previous_page, "‹"),
        snapshot.draft,
        nav(snapshot.can_next_page, "›"),
        nav(snapshot.can_next_page, "»"),
    )
}

/// Floating action bar shown while rows are selected.
pub fn render_action_bar<R: Record>(selected: usize) -> Option<String> {
    if selected == 0 {
        return None;
    }
    let statuses = <R::Status as StatusValue>::ALL
        .iter()
        .map(StatusValue::wire_value)
        .collect::<Vec<_>>()
        .join("|");
    Some(format!(
        "({selected}) {} selected    status <{statuses}>    delete    clear",
        if selected == 1 { "row" } else { "rows" }
    ))
}

/// One-line notice describing a committed bulk action.
pub fn bulk_notice<R: TableRow>(report: &BulkReport) -> String {
    let mut ids = report
        .ids
        .iter()
        .take(NOTICE_ID_LIMIT)
        .map(RecordId::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if report.count() > NOTICE_ID_LIMIT {
        ids.push_str("...");
    }
    match &report.action {
        BulkAction::Delete => format!("Deleted {} {}(s): {ids}", report.count(), R::NOUN),
        BulkAction::SetStatus { status } => format!(
            "Updated {} {}(s) to status {status}: {ids}",
            report.count(),
            R::NOUN
        ),
    }
}

/// Table of the statuses a bulk status change accepts.
pub fn render_statuses<S: StatusValue>(styled: bool) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Value"), header_cell("Label")]);
    apply_table_style(&mut table, styled);
    for status in S::ALL {
        table.add_row(vec![status_cell(*status), dim_cell(status.label())]);
    }
    table.to_string()
}

fn page_checkbox<R: Record>(controller: &TableController<R>) -> &'static str {
    if controller.is_page_fully_selected() {
        "[x]"
    } else if controller.is_page_partially_selected() {
        "[-]"
    } else {
        "[ ]"
    }
}

fn checkbox(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}

fn status_cell<S: StatusValue>(status: S) -> Cell {
    let color = match status.wire_value() {
        "success" | "done" => Color::Green,
        "failed" | "canceled" => Color::Red,
        "processing" | "in-progress" => Color::Yellow,
        _ => Color::Grey,
    };
    Cell::new(status.wire_value()).fg(color)
}

fn header_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string())
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table, styled: bool) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if !styled {
        table.force_no_tty();
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
