//! End-to-end tests of the `dualcurve` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const JOINT_MARKET: &str = r#"
base_date = "2018-07-16"

[[instruments]]
type = "deposit"
notional = 1e6
tenor_months = 3
rate = 0.015

[[instruments]]
type = "future"
year = 2019
month = 12
price = 98.40

[[instruments]]
type = "swap"
notional = 1e6
tenor_months = 12
rate = 0.025

[[instruments]]
type = "swap"
notional = 1e6
tenor_months = 60
rate = 0.03

[[instruments]]
type = "basis_swap"
notional = 1e6
tenor_months = 3
spread = 0.0005

[[instruments]]
type = "basis_swap"
notional = 1e6
tenor_months = 24
spread = 0.002

[[instruments]]
type = "basis_swap"
notional = 1e6
tenor_months = 60
spread = 0.003
"#;

fn market_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn dualcurve() -> Command {
    let mut cmd = Command::cargo_bin("dualcurve").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_strip_joint_table() {
    let file = market_file(JOINT_MARKET, ".toml");

    dualcurve()
        .args(["strip", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Projection curve"))
        .stdout(predicate::str::contains("Discounting curve"))
        .stdout(predicate::str::contains("2023-07-18"))
        .stdout(predicate::str::contains("ED Dec2019"))
        .stderr(predicate::str::contains("All 7 instruments reprice"));
}

#[test]
fn test_strip_joint_json() {
    let file = market_file(JOINT_MARKET, ".toml");

    let output = dualcurve()
        .args(["--format", "json", "strip", "--file"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["base_date"], "2018-07-16");
    assert_eq!(json["valid"], true);
    assert_eq!(json["curves"][0]["name"], "Projection");
    assert_eq!(json["curves"][0]["curve"]["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(json["curves"][1]["curve"]["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(json["repricing"].as_array().unwrap().len(), 7);
    assert!(json.get("valuation").is_none());
}

#[test]
fn test_strip_single_json_file() {
    let market = r#"{
        "base_date": "2018-07-16",
        "instruments": [
            {"type": "deposit", "notional": 1e6, "tenor_months": 3, "rate": 0.015},
            {"type": "swap", "notional": 1e6, "tenor_months": 12, "rate": 0.025},
            {"type": "swap", "notional": 1e6, "tenor_months": 60, "rate": 0.03}
        ]
    }"#;
    let file = market_file(market, ".json");

    dualcurve()
        .args(["--quiet", "strip", "--single", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2019-07-18"))
        .stdout(predicate::str::contains("Single curve").not());
}

#[test]
fn test_single_rejects_basis_swaps() {
    let file = market_file(JOINT_MARKET, ".toml");

    dualcurve()
        .args(["strip", "--single", "--file"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("basis swaps"));
}

#[test]
fn test_bad_market_files() {
    let file = market_file("base_date = \"2018-07-16\"\ninstruments = []\n", ".toml");
    dualcurve()
        .args(["strip", "--file"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no inputs"));

    let file = market_file(JOINT_MARKET, ".yaml");
    dualcurve()
        .args(["strip", "--file"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));

    dualcurve()
        .args(["strip", "--file", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}

#[test]
fn test_sample_values_forward_swap() {
    let output = dualcurve()
        .args(["--format", "json", "sample"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["base_date"], "2018-07-27");
    assert_eq!(json["valid"], true);
    assert_eq!(json["curves"][0]["curve"]["nodes"].as_array().unwrap().len(), 17);
    assert_eq!(json["curves"][1]["curve"]["nodes"].as_array().unwrap().len(), 10);

    let valuation = &json["valuation"];
    assert_eq!(valuation["start_date"], "2020-07-31");
    assert_eq!(valuation["notional"], -50_000_000.0);
    let pv = valuation["present_value"].as_f64().unwrap();
    assert!(pv.is_finite() && pv.abs() < 2e6, "pv = {pv}");
}

#[test]
fn test_sample_table() {
    dualcurve()
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valuation"))
        .stdout(predicate::str::contains("Present value"));
}
