//! Integration tests for primelist

mod properties;

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Run against a config path that does not exist so defaults apply
    fn primelist(dir: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("primelist");
        cmd.env("PRIMELIST_CONFIG", dir.path().join("config.toml"));
        cmd
    }

    #[test]
    fn help_displays() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Prime number generation"));
    }

    #[test]
    fn version_displays() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("primelist"));
    }

    #[test]
    fn first_ten() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["first", "10"])
            .assert()
            .success()
            .stdout("2, 3, 5, 7, 11, 13, 17, 19, 23, 29\n");
    }

    #[test]
    fn first_zero_fails() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["first", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument count"));
    }

    #[test]
    fn upto_thirty() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["upto", "30"])
            .assert()
            .success()
            .stdout("2, 3, 5, 7, 11, 13, 17, 19, 23, 29\n");
    }

    #[test]
    fn upto_one_fails_with_hint() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["upto", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument bound"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn zero_capacity_fails() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["upto", "30", "--capacity", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument capacity"));
    }

    #[test]
    fn upto_json() {
        let dir = TempDir::new().unwrap();
        let output = primelist(&dir)
            .args(["upto", "20", "--format", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["mode"], "bound");
        assert_eq!(report["count"], 8);
        assert_eq!(report["highest"], 19);
        assert_eq!(report["primes"][7], 19);
    }

    #[test]
    fn first_table() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["first", "3", "--format", "table"])
            .assert()
            .success()
            .stdout(predicate::str::contains("PRIME"))
            .stdout(predicate::str::contains("3 prime(s), highest 5"));
    }

    #[test]
    fn upto_over_sieve_limit_fails() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["upto", "100000000000000"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument bound"))
            .stderr(predicate::str::contains("sieve_limit"));
    }

    #[test]
    fn unallocatable_capacity_fails() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["first", "5", "--capacity", "18446744073709551615"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument capacity"));
    }

    #[test]
    fn check_rejects_huge_range() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["check", "0-18446744073709551615"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid argument numbers"));
    }

    #[test]
    fn nth_prime() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["nth", "100"])
            .assert()
            .success()
            .stdout("541\n");
    }

    #[test]
    fn next_primes() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["next", "100", "-n", "3"])
            .assert()
            .success()
            .stdout("101\n103\n107\n");
    }

    #[test]
    fn check_mixed_specs() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["check", "100", "97", "8-10"])
            .assert()
            .success()
            .stdout("8 composite\n9 composite\n10 composite\n97 prime\n100 composite\n");
    }

    #[test]
    fn check_without_cache() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["check", "2", "1000000007", "--no-cache"])
            .assert()
            .success()
            .stdout("2 prime\n1000000007 prime\n");
    }

    #[test]
    fn check_rejects_bad_range() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["check", "20-10"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("is empty"));
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[generation]"));
    }

    #[test]
    fn config_set_changes_default_format() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["config", "set", "output.format", "json"])
            .assert()
            .success();

        primelist(&dir)
            .args(["first", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"count\": 2"));
    }

    #[test]
    fn config_set_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }

    #[test]
    fn invalid_config_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[output]\nformat = \"xml\"\n").unwrap();
        primelist(&dir)
            .args(["first", "2"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn zero_capacity_config_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[generation]\ninitial_capacity = 0\n",
        )
        .unwrap();
        primelist(&dir)
            .args(["check", "97"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("initial_capacity"))
            .stderr(predicate::str::contains("config init --force"));
    }

    #[test]
    fn config_init_writes_file() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration initialized"));
        assert!(dir.path().join("config.toml").exists());

        primelist(&dir)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--force"));
    }

    #[test]
    fn check_table_lines_up() {
        let dir = TempDir::new().unwrap();
        primelist(&dir)
            .args(["check", "4", "7", "--format", "table"])
            .assert()
            .success()
            .stdout(predicate::str::contains("NUMBER"))
            .stdout(predicate::str::contains("1 of 2 number(s) prime"));
    }
}
