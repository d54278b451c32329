//! Interactive booking session
//!
//! The session keeps one in-memory cabin and reads line commands from
//! stdin until an exit directive (or end of input). Every failure is a
//! recoverable message; the loop always continues.

use std::io::{self, BufRead, Write};
use std::str::SplitWhitespace;

use anyhow::Result;
use serde_json::json;

use super::grid_cmd;
use super::output::Output;
use crate::domain::{Availability, Passenger, SeatId, SeatInventory};

const PROMPT: &str = "cabin> ";

/// Runs the interactive session over stdin
pub fn run(output: &Output, inventory: &mut SeatInventory) -> Result<()> {
    output.text(&format!(
        "Cabin booking session ({} rows, columns {}). Type 'help' for commands.",
        inventory.layout().rows(),
        inventory
            .layout()
            .columns()
            .iter()
            .collect::<String>()
    ));

    let stdin = io::stdin();
    session(output, inventory, stdin.lock())
}

/// Reads and dispatches line commands until an exit directive or EOF
fn session(output: &Output, inventory: &mut SeatInventory, reader: impl BufRead) -> Result<()> {
    prompt(output)?;
    for line in reader.lines() {
        let line = line?;
        if !dispatch(output, inventory, &line) {
            return Ok(());
        }
        prompt(output)?;
    }
    Ok(())
}

fn prompt(output: &Output) -> Result<()> {
    if output.is_text() {
        print!("{}", PROMPT);
        io::stdout().flush()?;
    }
    Ok(())
}

/// Executes one command line; returns false on an exit directive
fn dispatch(output: &Output, inventory: &mut SeatInventory, line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return true;
    };

    match command.to_ascii_lowercase().as_str() {
        "help" | "?" => help(output),
        "check" => check(output, inventory, &mut words),
        "book" => book(output, inventory, &mut words),
        "release" | "free" => release(output, inventory, &mut words),
        "map" | "status" => grid_cmd::map(output, inventory),
        "count" => grid_cmd::count(output, inventory),
        "bookings" => bookings(output, inventory),
        "audit" => audit(output, inventory),
        "quit" | "exit" => {
            output.text("Session closed.");
            return false;
        }
        other => {
            output.error(&format!(
                "Unknown command '{}'. Type 'help' for the command list.",
                other
            ));
        }
    }
    true
}

fn help(output: &Output) {
    output.text(
        "Commands:\n  \
         check <seat>                              Availability of a seat (e.g. check 12C)\n  \
         book <seat> <passport> <first> <last>     Book a free seat\n  \
         release <seat>                            Release a reserved seat\n  \
         map                                       Show the seat map\n  \
         count                                     Show how many seats are available\n  \
         bookings                                  List active bookings\n  \
         audit                                     Verify the seat/ledger link\n  \
         quit                                      Close the session",
    );
}

fn check(output: &Output, inventory: &SeatInventory, args: &mut SplitWhitespace) {
    let Some(seat) = parse_seat(output, args.next()) else {
        return;
    };

    match inventory.availability(seat) {
        Ok(availability) => {
            if output.is_json() {
                output.data(&json!({
                    "seat": seat.to_string(),
                    "status": availability.label(),
                }));
                return;
            }
            match availability {
                Availability::Available => {
                    output.success(&format!("Seat {} is available", seat));
                }
                Availability::Reserved => {
                    output.success(&format!("Seat {} is reserved", seat));
                }
                Availability::Unbookable(blockage) => {
                    output.success(&format!("Seat {} cannot be booked ({})", seat, blockage));
                }
            }
        }
        Err(e) => output.error(&e.to_string()),
    }
}

fn book(output: &Output, inventory: &mut SeatInventory, args: &mut SplitWhitespace) {
    let Some(seat) = parse_seat(output, args.next()) else {
        return;
    };

    let (Some(passport), Some(first_name)) = (args.next(), args.next()) else {
        output.error("Usage: book <seat> <passport> <first-name> <last-name>");
        return;
    };
    let last_name = args.collect::<Vec<&str>>().join(" ");
    if last_name.is_empty() {
        output.error("Usage: book <seat> <passport> <first-name> <last-name>");
        return;
    }

    let passenger = Passenger::new(passport, first_name, last_name);
    match inventory.book(seat, passenger) {
        Ok(reference) => {
            if output.is_json() {
                output.data(&json!({
                    "seat": seat.to_string(),
                    "reference": reference.as_str(),
                }));
            } else {
                output.success(&format!("Booked seat {} (reference {})", seat, reference));
            }
        }
        Err(e) => output.error(&e.to_string()),
    }
}

fn release(output: &Output, inventory: &mut SeatInventory, args: &mut SplitWhitespace) {
    let Some(seat) = parse_seat(output, args.next()) else {
        return;
    };

    match inventory.release(seat) {
        Ok(booking) => {
            if output.is_json() {
                output.data(&json!({
                    "seat": seat.to_string(),
                    "reference": booking.reference.as_str(),
                }));
            } else {
                output.success(&format!(
                    "Released seat {} (reference {})",
                    seat, booking.reference
                ));
            }
        }
        Err(e) => output.error(&e.to_string()),
    }
}

fn bookings(output: &Output, inventory: &SeatInventory) {
    let all = inventory.bookings();

    if output.is_json() {
        output.data(&all);
        return;
    }
    if all.is_empty() {
        output.text("No active bookings.");
        return;
    }
    for booking in all {
        output.text(&format!(
            "{}  {:>4}  {} ({})",
            booking.reference,
            booking.seat.to_string(),
            booking.passenger.full_name(),
            booking.passenger.passport
        ));
    }
}

fn audit(output: &Output, inventory: &SeatInventory) {
    match inventory.audit() {
        Ok(()) => output.success("Seat grid and booking ledger agree."),
        Err(e) => output.error(&e.to_string()),
    }
}

fn parse_seat(output: &Output, arg: Option<&str>) -> Option<SeatId> {
    let Some(raw) = arg else {
        output.error("Expected a seat like '12C'");
        return None;
    };
    match raw.parse() {
        Ok(seat) => Some(seat),
        Err(e) => {
            output.error(&format!("{}", e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::OutputFormat;
    use crate::domain::{Availability, CabinLayout};
    use std::io::Cursor;

    fn quiet_output() -> Output {
        Output::new(OutputFormat::Text, false)
    }

    fn small_inventory() -> SeatInventory {
        SeatInventory::new(CabinLayout::new(5, "ABX", 'X').unwrap())
    }

    fn run_session(inventory: &mut SeatInventory, script: &str) {
        let output = quiet_output();
        session(&output, inventory, Cursor::new(script.to_string())).unwrap();
    }

    #[test]
    fn book_command_reserves_the_seat() {
        let mut inventory = small_inventory();
        run_session(&mut inventory, "book 1A P1234567 Ada Lovelace\n");

        assert_eq!(
            inventory.availability("1A".parse().unwrap()),
            Ok(Availability::Reserved)
        );
        let booking = inventory.booking_at("1A".parse().unwrap()).unwrap();
        assert_eq!(booking.passenger.full_name(), "Ada Lovelace");
    }

    #[test]
    fn multi_word_last_names_are_joined() {
        let mut inventory = small_inventory();
        run_session(&mut inventory, "book 1A P1 Ada da Silva\n");

        let booking = inventory.booking_at("1A".parse().unwrap()).unwrap();
        assert_eq!(booking.passenger.last_name, "da Silva");
    }

    #[test]
    fn release_command_frees_the_seat() {
        let mut inventory = small_inventory();
        run_session(
            &mut inventory,
            "book 2B P1234567 Ada Lovelace\nrelease 2B\n",
        );

        assert_eq!(
            inventory.availability("2B".parse().unwrap()),
            Ok(Availability::Available)
        );
        assert!(inventory.bookings().is_empty());
    }

    #[test]
    fn quit_stops_processing_further_lines() {
        let mut inventory = small_inventory();
        run_session(&mut inventory, "quit\nbook 1A P1 Ada Lovelace\n");

        assert_eq!(
            inventory.availability("1A".parse().unwrap()),
            Ok(Availability::Available)
        );
    }

    #[test]
    fn failed_commands_keep_the_session_alive() {
        let mut inventory = small_inventory();
        run_session(
            &mut inventory,
            "book 3X P1 Ada Lovelace\nrelease 1A\nnonsense\nbook 1B P2 Grace Hopper\n",
        );

        assert_eq!(
            inventory.availability("1B".parse().unwrap()),
            Ok(Availability::Reserved)
        );
        assert_eq!(inventory.audit(), Ok(()));
    }

    #[test]
    fn blank_lines_and_case_are_tolerated() {
        let mut inventory = small_inventory();
        run_session(&mut inventory, "\n\nBOOK 1a P1 Ada Lovelace\n");

        assert_eq!(
            inventory.availability("1A".parse().unwrap()),
            Ok(Availability::Reserved)
        );
    }
}
