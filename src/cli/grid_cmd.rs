//! Seat map and count commands
//!
//! Both are read-only reports over the inventory; the shell reuses them on
//! its `map` and `count` commands.

use serde_json::json;

use super::output::Output;
use crate::domain::SeatInventory;

/// Prints the seat map: column header, one line of tag symbols per row,
/// legend
pub fn map(output: &Output, inventory: &SeatInventory) {
    if output.is_json() {
        output.data(&inventory.snapshot());
    } else {
        output.text(&render_map(inventory));
    }
}

/// Prints the number of currently available seats
pub fn count(output: &Output, inventory: &SeatInventory) {
    let available = inventory.available_count();
    let total = inventory.layout().seat_count();

    if output.is_json() {
        output.data(&json!({
            "available": available,
            "total": total,
        }));
    } else {
        output.success(&format!("{} of {} seats available", available, total));
    }
}

fn render_map(inventory: &SeatInventory) -> String {
    let layout = inventory.layout();
    let ncols = layout.columns().len();
    let mut lines = Vec::with_capacity(layout.rows() as usize + 3);

    let labels: Vec<String> = layout.columns().iter().map(|c| c.to_string()).collect();
    lines.push(format!("{:>4}  {}", "", labels.join(" ")));

    let snapshot = inventory.snapshot();
    for row_seats in snapshot.chunks(ncols) {
        let Some(first) = row_seats.first() else {
            continue;
        };
        let symbols: Vec<String> = row_seats
            .iter()
            .map(|s| s.tag.symbol().to_string())
            .collect();
        lines.push(format!("{:>4}  {}", first.seat.row, symbols.join(" ")));
    }

    lines.push(String::new());
    lines.push("F free   R reserved   X aisle   S storage".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CabinLayout, Passenger, SeatId};

    #[test]
    fn map_renders_header_rows_and_legend() {
        let mut inventory = SeatInventory::new(CabinLayout::new(2, "AXB", 'X').unwrap());
        inventory
            .book(SeatId::new(2, 'A'), Passenger::new("P1", "Ada", "Lovelace"))
            .unwrap();

        let rendered = render_map(&inventory);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "      A X B");
        assert_eq!(lines[1], "   1  F X S");
        assert_eq!(lines[2], "   2  R X F");
        assert_eq!(lines[4], "F free   R reserved   X aisle   S storage");
    }

    #[test]
    fn default_map_has_one_line_per_row() {
        let inventory = SeatInventory::default();
        let rendered = render_map(&inventory);

        // header + 80 rows + blank + legend
        assert_eq!(rendered.lines().count(), 83);
    }
}
