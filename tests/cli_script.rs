mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use regex::Regex;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("budget_pulse_cli").unwrap();
    cmd.env("BUDGET_PULSE_CLI_SCRIPT", "1")
        .env("BUDGET_PULSE_TODAY", "2024-03-15")
        .env("BUDGET_PULSE_HOME", common::temp_dir())
        .env("RUST_LOG", "off")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn script_mode_reports_kpis_for_sample_entries() {
    cli()
        .write_stdin("kpis\nexit\n")
        .assert()
        .success()
        .stdout(contains("Total income    : $3,200.00"))
        .stdout(contains("Total expenses  : $1,945.76"))
        .stdout(contains("Amount saved    : $1,254.24"))
        .stdout(contains("Rent/Mortgage"));
}

#[test]
fn script_mode_adds_entries_and_switches_periods() {
    cli()
        .write_stdin(
            "add 2024-02-10 fixed Utilities 120 \"Power bill\"\npreset last_month\nlist\nexit\n",
        )
        .assert()
        .success()
        .stdout(contains("Added"))
        .stdout(contains("Last month: Feb 1, 2024 to Feb 29, 2024 (29 days)"))
        .stdout(contains("Power bill"));
}

#[test]
fn custom_range_adjustments_are_reported() {
    cli()
        .write_stdin("range 2024-03-10 2024-04-20\nexit\n")
        .assert()
        .success()
        .stderr(contains("end date reset to today"))
        .stdout(contains("Mar 10, 2024 to Mar 15, 2024"));
}

#[test]
fn custom_range_adjustment_is_reported_once_with_logging_on() {
    let output = cli()
        .env("RUST_LOG", "budget_pulse=debug")
        .write_stdin("range 2024-03-10 2024-04-20\nexit\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let mut combined = String::from_utf8(output.stdout).unwrap();
    combined.push_str(&String::from_utf8(output.stderr).unwrap());
    assert_eq!(combined.matches("end date reset to today").count(), 1);
}

#[test]
fn config_currency_and_locale_persist_between_runs() {
    let home = common::temp_dir();
    cli()
        .env("BUDGET_PULSE_HOME", &home)
        .write_stdin("config set currency EUR\nconfig set locale de-DE\nexit\n")
        .assert()
        .success()
        .stdout(contains("Saved currency = EUR."));
    cli()
        .env("BUDGET_PULSE_HOME", &home)
        .write_stdin("kpis\nexit\n")
        .assert()
        .success()
        .stdout(contains("Total income    : €3.200,00"))
        .stdout(contains("Amount saved    : €1.254,24"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    cli()
        .write_stdin("kpsi\nexit\n")
        .assert()
        .success()
        .stderr(contains("Unknown command `kpsi`"))
        .stdout(contains("Did you mean `kpis`?"));
}

#[test]
fn save_and_load_round_trip_through_files() {
    let dir = common::temp_dir();
    let path = dir.join("snapshot.json");
    let script = format!(
        "seed-demo 12\nsave {path}\nclear\nload {path}\nlist all\nexit\n",
        path = path.display()
    );
    cli()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Seeded 12 demo entries."))
        .stdout(contains("Loaded 12 entries"))
        .stdout(contains("12 entries"));
    assert!(path.exists());
}

#[test]
fn version_prints_build_metadata() {
    cli()
        .write_stdin("version\n")
        .assert()
        .success()
        .stdout(contains("Budget Pulse").and(contains("Build hash")));
}

#[test]
fn list_rows_lead_with_short_ids_and_readable_dates() {
    let output = cli().write_stdin("list\n").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let row = Regex::new(r"(?m)^  [0-9a-f]{8}  Mar 1[345], 2024  ").unwrap();
    assert_eq!(row.find_iter(&stdout).count(), 3);
}
