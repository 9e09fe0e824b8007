use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("serverwidget_cli").unwrap();
    cmd.env("SERVERWIDGET_HOME", home.path())
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn get_prints_the_read_form() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["get", "6"])
        .assert()
        .success()
        .stdout(contains("\"kind\": \"form\""))
        .stdout(contains("custpage_comments"))
        .stdout(contains("Foo Bar"));
}

#[test]
fn post_prints_the_success_form() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["post", "6", "Hello", "there"])
        .assert()
        .success()
        .stdout(contains("Customer Id 6 was saved successfully."));
}

#[test]
fn unknown_customer_renders_an_error_form() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["get", "99"])
        .assert()
        .success()
        .stdout(contains("custpage_error"))
        .stdout(contains("customer record `99` was not found"));
}

#[test]
fn bad_usage_fails() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["delete", "6"])
        .assert()
        .failure()
        .stderr(contains("Usage: serverwidget_cli"))
        .stderr(contains("unknown command `delete`"));
}
