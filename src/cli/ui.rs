use crate::core::{ConversionState, Side};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Value,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Amount cell; the active (source) field is bold, the derived one green.
fn amount_cell(text: &str, active: bool) -> Cell {
    let cell = if text.is_empty() {
        Cell::new("(empty)").fg(Color::DarkGrey)
    } else if active {
        Cell::new(text).add_attribute(Attribute::Bold)
    } else {
        Cell::new(text).fg(Color::Green)
    };
    cell.set_alignment(CellAlignment::Right)
}

/// Renders both fields of the converter as a table.
pub fn state_table(state: &ConversionState) -> String {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Currency"),
        header_cell("Amount"),
        header_cell("Role"),
    ]);

    for side in [Side::A, Side::B] {
        let active = state.active == side;
        let role = if active {
            Cell::new("source").add_attribute(Attribute::Bold)
        } else {
            Cell::new("derived").fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(side.to_string()),
            Cell::new(state.currency(side)),
            amount_cell(state.amount(side), active),
            role,
        ]);
    }

    table.to_string()
}
