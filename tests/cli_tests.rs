use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_poseidon2_hash2"))
}

#[test]
fn prints_decimal_digest() {
    let out = bin().args(["0", "0"]).output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap().trim(),
        "21177166670744647784289648293577786481357446166129397094207318338605633126018"
    );
}

#[test]
fn rejects_negative_input() {
    let out = bin().args(["-1", "0"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid field element"), "{stderr}");
}

#[test]
fn rejects_wrong_argument_count() {
    for args in [&["1"][..], &["1", "2", "3"][..]] {
        let out = bin().args(args).output().unwrap();
        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8(out.stderr).unwrap().starts_with("usage:"));
    }
}
