use std::process::{Command, Output};

fn newcal(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_newcal"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn gregorian_prints_summary_and_grid() {
    let out = newcal(&["-g", "2023-01-01"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!("2023-01-01 is Earth, 12 Early Winter, 2023", lines[0]);
    assert_eq!(11, lines.len());
    assert!(lines[7].contains("|  *12* |"));
}

#[test]
fn unix_prints_summary() {
    let out = newcal(&["--unix", "-86400"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("-86400 is Venus, 11 Early Winter, 1970\n"));
}

#[test]
fn weekless_days_print_only_summary() {
    let out = newcal(&["-g", "2024-02-29"]);
    assert!(out.status.success());
    assert_eq!("2024-02-29 is Leap Day, 2024\n", String::from_utf8(out.stdout).unwrap());

    let out = newcal(&["-g", "2023-01-26"]);
    assert_eq!(
        "2023-01-26 is 37 Mid Winter, 2023\n",
        String::from_utf8(out.stdout).unwrap()
    );
}

#[test]
fn today_without_options() {
    let out = newcal(&[]);
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().starts_with("Today is "));
}

#[test]
fn errors_print_nothing_to_stdout() {
    for args in [
        &["-g", "2023-02-30"][..],
        &["-u", "soon"][..],
        &["-g", "2023-01-01", "-u", "0"][..],
        &["2023-01-01"][..],
    ] {
        let out = newcal(args);
        assert!(!out.status.success(), "{args:?}");
        assert!(out.stdout.is_empty(), "{args:?}");
        assert!(!out.stderr.is_empty(), "{args:?}");
    }
}

#[test]
fn positional_arguments_are_invalid_arguments() {
    let out = newcal(&["2023-01-01"]);
    assert_eq!(Some(1), out.status.code());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("invalid arguments: unexpected arguments: 2023-01-01"), "{stderr}");
}

#[test]
fn label_keeps_the_typed_date() {
    let out = newcal(&["-g", "02023-01-26"]);
    assert!(out.status.success());
    assert_eq!(
        "02023-01-26 is 37 Mid Winter, 2023\n",
        String::from_utf8(out.stdout).unwrap()
    );
}
