use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;
use std::fs;

const LONG_DECK: &str = "Hearts,5\nSpades,3\nClubs,9\nDiamonds,12\nHearts,7\nSpades,8\nClubs,2\nDiamonds,4\n";

fn rows(path: &std::path::Path) -> usize {
    fs::read_to_string(path)
        .expect("read results")
        .lines()
        .skip(1)
        .filter(|l| !l.trim().is_empty())
        .count()
}

#[test]
fn env_round_limit_stops_after_one_round() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let input = tfm.create_file("deck.csv", LONG_DECK).expect("write deck");
    let output = tfm.path("rounds.csv");
    let res = cli.run_with_env(
        &[input.to_str().unwrap(), output.to_str().unwrap()],
        &[("WARSIM_MAX_ROUNDS", "1")],
    );

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(rows(&output), 1);
    assert!(res.stdout.contains("Game Over after 1 rounds."));
}

#[test]
fn file_round_limit_applies() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let input = tfm.create_file("deck.csv", LONG_DECK).expect("write deck");
    let cfg = tfm
        .create_file("warsim.toml", "max_rounds = 2\n")
        .expect("write config");
    let output = tfm.path("rounds.csv");
    let res = cli.run_with_env(
        &[input.to_str().unwrap(), output.to_str().unwrap()],
        &[("WARSIM_CONFIG", cfg.to_str().unwrap())],
    );

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(rows(&output), 2);
}

#[test]
fn env_overrides_file() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let input = tfm.create_file("deck.csv", LONG_DECK).expect("write deck");
    let cfg = tfm
        .create_file("warsim.toml", "max_rounds = 2\n")
        .expect("write config");
    let output = tfm.path("rounds.csv");
    let res = cli.run_with_env(
        &[input.to_str().unwrap(), output.to_str().unwrap()],
        &[
            ("WARSIM_CONFIG", cfg.to_str().unwrap()),
            ("WARSIM_MAX_ROUNDS", "1"),
        ],
    );

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(rows(&output), 1);
}

#[test]
fn invalid_env_value_is_rejected() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let input = tfm.create_file("deck.csv", LONG_DECK).expect("write deck");
    let output = tfm.path("rounds.csv");
    let res = cli.run_with_env(
        &[input.to_str().unwrap(), output.to_str().unwrap()],
        &[("WARSIM_MAX_ROUNDS", "lots")],
    );

    assert_eq!(res.exit_code, 1);
    assert!(
        res.stderr.contains("Invalid configuration"),
        "stderr={}",
        res.stderr
    );
    assert!(!output.exists());
}

#[test]
fn unknown_config_key_is_rejected() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let input = tfm.create_file("deck.csv", LONG_DECK).expect("write deck");
    let cfg = tfm
        .create_file("warsim.toml", "rounds = 5\n")
        .expect("write config");
    let output = tfm.path("rounds.csv");
    let res = cli.run_with_env(
        &[input.to_str().unwrap(), output.to_str().unwrap()],
        &[("WARSIM_CONFIG", cfg.to_str().unwrap())],
    );

    assert_eq!(res.exit_code, 1);
    assert!(res.stderr.contains("Invalid configuration"));
}

#[test]
fn disabling_repeat_detection_needs_a_round_limit_to_stop_cycles() {
    let cli = CliRunner::new().expect("cli runner");
    let tfm = TempFileManager::new().expect("temp dir");
    let input = tfm
        .create_file("deck.csv", "Hearts,1\nSpades,2\nClubs,2\nDiamonds,1\n")
        .expect("write deck");
    let output = tfm.path("rounds.csv");
    let res = cli.run_with_env(
        &[input.to_str().unwrap(), output.to_str().unwrap()],
        &[("WARSIM_DETECT_REPEATS", "false"), ("WARSIM_MAX_ROUNDS", "10")],
    );

    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(rows(&output), 10);
    assert!(res.stdout.contains("It's a Tie!"));
}
