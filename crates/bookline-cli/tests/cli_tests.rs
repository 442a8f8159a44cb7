use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn bookline_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bookline").expect("Failed to find bookline binary");
    cmd.arg("--no-color");
    cmd
}

/// Book the 10:00 slot with provider 1 and return the command output.
fn book_ten_oclock(db_arg: &str) -> assert_cmd::assert::Assert {
    bookline_cmd()
        .args([
            "--database-file",
            db_arg,
            "reservation",
            "create",
            "2024-01-10T10:00:00Z",
            "--service",
            "1",
            "--provider",
            "1",
            "--name",
            "John Doe",
            "--email",
            "john@example.com",
        ])
        .assert()
}

#[test]
fn test_cli_list_services() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    bookline_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "services"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Services"))
        .stdout(predicate::str::contains("Swedish Massage"))
        .stdout(predicate::str::contains("Hot Stone Massage"));
}

#[test]
fn test_cli_list_providers() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    bookline_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "providers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Providers"))
        .stdout(predicate::str::contains("Jane Smith"))
        .stdout(predicate::str::contains("Specialties:"));
}

#[test]
fn test_cli_slots_on_fresh_day() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    bookline_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "slots",
            "2024-01-10",
            "--provider",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available slots on 2024-01-10"))
        .stdout(predicate::str::contains("2024-01-10 09:00"))
        .stdout(predicate::str::contains("2024-01-10 16:00"));
}

#[test]
fn test_cli_slots_rejects_bad_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    bookline_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "slots",
            "next tuesday",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));
}

#[test]
fn test_cli_create_reservation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    book_ten_oclock(db_path.to_str().unwrap())
        .success()
        .stdout(predicate::str::contains("Created reservation with ID: 1"))
        .stdout(predicate::str::contains("Swedish Massage"))
        .stdout(predicate::str::contains("John Doe"));
}

#[test]
fn test_cli_double_booking_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    book_ten_oclock(db_arg).success();
    book_ten_oclock(db_arg)
        .failure()
        .stderr(predicate::str::contains("already booked"));
}

#[test]
fn test_cli_booked_slot_leaves_listing() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    book_ten_oclock(db_arg).success();

    bookline_cmd()
        .args([
            "--database-file",
            db_arg,
            "slots",
            "2024-01-10",
            "--provider",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-10 10:00").not())
        .stdout(predicate::str::contains("2024-01-10 11:00"));
}

#[test]
fn test_cli_list_and_show_reservation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    book_ten_oclock(db_arg).success();

    bookline_cmd()
        .args(["--database-file", db_arg, "reservation", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Reservations"))
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("confirmed"));

    bookline_cmd()
        .args(["--database-file", db_arg, "reservation", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Reservation 1"))
        .stdout(predicate::str::contains("john@example.com"));
}

#[test]
fn test_cli_show_unknown_reservation_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    bookline_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "reservation",
            "show",
            "99",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_update_phone() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    book_ten_oclock(db_arg).success();

    bookline_cmd()
        .args([
            "--database-file",
            db_arg,
            "reservation",
            "update",
            "1",
            "--phone",
            "555-0100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated reservation with ID: 1"))
        .stdout(predicate::str::contains("555-0100"));
}

#[test]
fn test_cli_cancel_frees_slot() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    book_ten_oclock(db_arg).success();

    bookline_cmd()
        .args(["--database-file", db_arg, "reservation", "cancel", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled reservation 1"));

    bookline_cmd()
        .args([
            "--database-file",
            db_arg,
            "slots",
            "2024-01-10",
            "--provider",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-10 10:00"));
}

#[test]
fn test_cli_cancelled_cannot_be_reconfirmed() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    book_ten_oclock(db_arg).success();

    bookline_cmd()
        .args(["--database-file", db_arg, "reservation", "cancel", "1"])
        .assert()
        .success();

    bookline_cmd()
        .args([
            "--database-file",
            db_arg,
            "reservation",
            "update",
            "1",
            "--status",
            "confirmed",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("status"));
}

#[test]
fn test_cli_complete_reservation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    book_ten_oclock(db_arg).success();

    bookline_cmd()
        .args(["--database-file", db_arg, "reservation", "complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("completed"));
}

#[test]
fn test_cli_delete_reservation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    book_ten_oclock(db_arg).success();

    bookline_cmd()
        .args(["--database-file", db_arg, "reservation", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted reservation"));

    bookline_cmd()
        .args(["--database-file", db_arg, "reservation", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reservations found."));
}

#[test]
fn test_cli_custom_business_hours() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    bookline_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "--open-hour",
            "8",
            "--close-hour",
            "12",
            "slots",
            "2024-01-10",
            "--provider",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-10 08:00"))
        .stdout(predicate::str::contains("2024-01-10 11:00"))
        .stdout(predicate::str::contains("2024-01-10 12:00").not());
}

#[test]
fn test_cli_default_lists_reservations() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    bookline_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reservations found."));
}
