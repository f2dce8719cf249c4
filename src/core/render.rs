use crate::core::tracker::{TableView, TrackerView};
use crate::domain::ledger::{PayeeTotal, Settlement};
use crate::domain::model::Expense;
use crate::utils::error::Result;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

pub const TITLE: &str = "Expense Tracker";

/// Amounts print like the browser prints numbers: `10`, `2.5`.
pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}

pub fn render_view(view: &TrackerView) -> String {
    match view {
        TrackerView::Loading => "Loading...".to_string(),
        TrackerView::Alert(message) => format!("⚠️  {}", message),
        TrackerView::Table(table) => render_table(table).to_string(),
    }
}

pub fn render_page(view: &TrackerView) -> String {
    format!("{}\n{}\n{}", TITLE, "=".repeat(TITLE.len()), render_view(view))
}

fn amount_cell(amount: f64) -> Cell {
    Cell::new(format_amount(amount)).set_alignment(CellAlignment::Right)
}

fn label_cell(label: String) -> Cell {
    Cell::new(label).set_alignment(CellAlignment::Right)
}

pub fn render_table(view: &TableView) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        ["#", "Payee", "Description", "Date", "Amount"]
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );

    for row in &view.item_rows {
        table.add_row(vec![
            Cell::new(row.index),
            Cell::new(&row.payee_name),
            Cell::new(&row.product),
            Cell::new(row.set_date.format("%Y-%m-%d")),
            amount_cell(row.price),
        ]);
    }

    // 表格沒有跨欄，摘要列的標籤放在 Date 欄
    for total in &view.summary_rows {
        table.add_row(vec![
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            label_cell(format!("{} Paid", total.name)),
            amount_cell(total.total),
        ]);
    }

    if let Some(debt) = &view.debt_row {
        table.add_row(vec![
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            label_cell(format!("{} Owes", debt.debtor)),
            amount_cell(debt.amount),
        ]);
    }

    table
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub items: &'a [Expense],
    pub totals: Vec<PayeeTotal>,
    pub settlement: Option<Settlement>,
}

pub fn render_json(report: &JsonReport<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
