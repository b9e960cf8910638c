use std::process::{Command, Output};

fn whodat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_whodat"))
        .args(args)
        .env_remove("WHODAT_CATALOG_URL")
        .output()
        .expect("spawn whodat")
}

#[test]
fn price_prints_the_final_price() {
    let out = whodat(&["price", "100", "10", "5"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Final Price: $190.00"), "{stdout}");
}

#[test]
fn price_json_uses_camel_case_keys() {
    let out = whodat(&["price", "100", "10", "5", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["initialCost"], 105.0);
    assert_eq!(v["finalPrice"], 190.0);
}

#[test]
fn usage_errors_exit_with_one_and_a_message() {
    for args in [&["dance"][..], &["price", "1", "2"][..], &["guess", "--seed", "x"][..]] {
        let out = whodat(args);
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.starts_with("error: "), "{stderr}");
        assert!(stderr.contains("Usage: whodat"), "{stderr}");
    }
}

#[test]
fn help_succeeds() {
    let out = whodat(&["help"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Commands:"));
}
