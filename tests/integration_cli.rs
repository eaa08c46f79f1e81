#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn decode_prints_fields_in_order() {
    let mut cmd = Command::cargo_bin("fnd").unwrap();
    cmd.args(["decode", "123456_CompanyA_20201214_1_1.xml"]);
    cmd.assert().success().stdout(
        predicate::str::contains("The CompanyCode is 123456\nThe CompanyName is CompanyA\n")
            .and(predicate::str::contains("The Date is 20201214"))
            .and(predicate::str::ends_with("The FileExtension is xml\n")),
    );
}

#[test]
fn decode_json() {
    let mut cmd = Command::cargo_bin("fnd").unwrap();
    cmd.args([
        "decode",
        "123456_CompanyA_20201214_1_1.xml",
        "--format",
        "json",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"CompanyCode":"123456","CompanyName":"CompanyA""#));
}

#[test]
fn decode_mismatch_fails() {
    let mut cmd = Command::cargo_bin("fnd").unwrap();
    cmd.args(["decode", "12345_CompanyA_20201214_1_1.xml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn anchored_rejects_prefix() {
    let mut cmd = Command::cargo_bin("fnd").unwrap();
    cmd.args(["decode", "x/123456_CompanyA_20201214_1_1.xml", "--anchored"]);
    cmd.assert().failure();
}

#[test]
fn schema_lists_rule() {
    let mut cmd = Command::cargo_bin("fnd").unwrap();
    cmd.args(["schema"]);
    cmd.assert().success().stdout(
        predicate::str::contains("CompanyCode: 6 x digit")
            .and(predicate::str::contains("rule: (?P<CompanyCode>[0-9]{6})_")),
    );
}

#[test]
fn schema_json_describes_shapes() {
    let mut cmd = Command::cargo_bin("fnd").unwrap();
    cmd.args(["schema", "--format", "json"]);
    cmd.assert().success().stdout(
        predicate::str::contains(r#""name": "CompanyCode""#)
            .and(predicate::str::contains(r#""kind": "digit""#))
            .and(predicate::str::contains(r#""exactly": 6"#)),
    );
}
