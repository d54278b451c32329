//! CLI integration tests for Cabin
//!
//! These tests drive the real binary: layout resolution through flags and
//! config files, the one-shot report commands, and full interactive
//! sessions piped through stdin.

use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get a command instance for the cabin binary
fn cabin_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("cabin"))
}

// =============================================================================
// Map and Count Tests
// =============================================================================

#[test]
fn test_map_shows_default_grid() {
    cabin_cmd()
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("A B C X D E F"))
        .stdout(predicate::str::contains("   1  F F F X F F F"))
        .stdout(predicate::str::contains("  80  F F F X F F F"))
        .stdout(predicate::str::contains("F free   R reserved   X aisle   S storage"));
}

#[test]
fn test_map_marks_rear_storage_block() {
    cabin_cmd()
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("  76  F F F X F F F"))
        .stdout(predicate::str::contains("  77  F F F X S S S"))
        .stdout(predicate::str::contains("  79  F F F X S S S"))
        .stdout(predicate::str::contains("  80  F F F X F F F"));
}

#[test]
fn test_count_reports_available_seats() {
    cabin_cmd()
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("471 of 560 seats available"));
}

#[test]
fn test_count_json_format() {
    cabin_cmd()
        .args(["count", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"available\":471,\"total\":560}"));
}

#[test]
fn test_map_json_format_lists_seats() {
    cabin_cmd()
        .args(["map", "--format", "json", "--rows", "1", "--cols", "AX"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"seat\":\"1A\",\"tag\":\"free\"}"))
        .stdout(predicate::str::contains("{\"seat\":\"1X\",\"tag\":\"aisle\"}"));
}

// =============================================================================
// Layout Resolution Tests
// =============================================================================

#[test]
fn test_layout_flags_override_defaults() {
    cabin_cmd()
        .args(["map", "--rows", "5", "--cols", "ABX"])
        .assert()
        .success()
        .stdout(predicate::str::contains("      A B X"))
        .stdout(predicate::str::contains("   5  F F X"));
}

#[test]
fn test_layout_from_config_file() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "rows = 2\ncolumns = \"AXB\"\naisle = \"X\"").unwrap();

    cabin_cmd()
        .arg("map")
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("   1  F X S"))
        .stdout(predicate::str::contains("   2  F X F"));
}

#[test]
fn test_flags_override_config_file() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "rows = 2\ncolumns = \"AXB\"\naisle = \"X\"").unwrap();

    cabin_cmd()
        .args(["count", "--rows", "10"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        // 10 rows x AXB: 30 seats - 10 aisle - 3 storage (rows 7-9, col B)
        .stdout(predicate::str::contains("17 of 30 seats available"));
}

#[test]
fn test_invalid_layout_fails() {
    cabin_cmd()
        .args(["map", "--cols", "ABC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Aisle marker"));
}

#[test]
fn test_missing_config_file_fails() {
    cabin_cmd()
        .args(["map", "--config", "/nonexistent/cabin.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read cabin config"));
}

// =============================================================================
// Interactive Session Tests
// =============================================================================

#[test]
fn test_shell_book_check_release_round_trip() {
    cabin_cmd()
        .arg("shell")
        .write_stdin("check 1A\nbook 1A P1234567 Ada Lovelace\ncheck 1A\nrelease 1A\ncheck 1A\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seat 1A is available"))
        .stdout(predicate::str::contains("Booked seat 1A (reference "))
        .stdout(predicate::str::contains("Seat 1A is reserved"))
        .stdout(predicate::str::contains("Released seat 1A (reference "));
}

#[test]
fn test_shell_is_the_default_command() {
    cabin_cmd()
        .write_stdin("count\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("471 of 560 seats available"))
        .stdout(predicate::str::contains("Session closed."));
}

#[test]
fn test_shell_rejects_unbookable_and_keeps_going() {
    cabin_cmd()
        .arg("shell")
        .write_stdin("book 3X P1 Ada Lovelace\nbook 77D P1 Ada Lovelace\nbook 1A P1 Ada Lovelace\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Seat 3X cannot be booked (aisle)"))
        .stderr(predicate::str::contains("Seat 77D cannot be booked (storage)"))
        .stdout(predicate::str::contains("Booked seat 1A"));
}

#[test]
fn test_shell_reports_out_of_range_seats() {
    cabin_cmd()
        .arg("shell")
        .write_stdin("check 81A\nbook 1Z P1 Ada Lovelace\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Seat 81A is outside the cabin layout"))
        .stderr(predicate::str::contains("Seat 1Z is outside the cabin layout"));
}

#[test]
fn test_shell_double_booking_and_double_release() {
    cabin_cmd()
        .arg("shell")
        .write_stdin(
            "book 2B P1 Ada Lovelace\nbook 2B P2 Grace Hopper\nrelease 2B\nrelease 2B\nquit\n",
        )
        .assert()
        .success()
        .stderr(predicate::str::contains("Seat 2B is already reserved"))
        .stderr(predicate::str::contains("Seat 2B is not reserved"));
}

#[test]
fn test_shell_bookings_listing() {
    cabin_cmd()
        .arg("shell")
        .write_stdin("bookings\nbook 4C P7654321 Grace Hopper\nbookings\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active bookings."))
        .stdout(predicate::str::contains("Grace Hopper (P7654321)"));
}

#[test]
fn test_shell_audit_passes_after_bookings() {
    cabin_cmd()
        .arg("shell")
        .write_stdin("book 1A P1 Ada Lovelace\nbook 2B P2 Grace Hopper\nrelease 1A\naudit\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seat grid and booking ledger agree."));
}

#[test]
fn test_shell_json_format() {
    cabin_cmd()
        .args(["shell", "--format", "json"])
        .write_stdin("book 1A P1 Ada Lovelace\ncheck 1A\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"seat\":\"1A\""))
        .stdout(predicate::str::contains("\"status\":\"reserved\""));
}

#[test]
fn test_shell_map_reflects_bookings() {
    cabin_cmd()
        .args(["shell", "--rows", "1", "--cols", "AXB"])
        .write_stdin("book 1A P1 Ada Lovelace\nmap\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("   1  R X F"));
}

#[test]
fn test_shell_survives_unknown_commands() {
    cabin_cmd()
        .arg("shell")
        .write_stdin("teleport 1A\nhelp\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command 'teleport'"))
        .stdout(predicate::str::contains("release <seat>"));
}
