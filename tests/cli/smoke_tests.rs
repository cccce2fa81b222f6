use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

use crate::common::{posts, users};

fn feedjoin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_feedjoin"));
    cmd.env_remove("RUST_LOG")
        .env_remove("FEEDJOIN_BASE_URL")
        .env_remove("FEEDJOIN_TIMEOUT_SECS");
    cmd
}

#[test]
fn shows_help() {
    feedjoin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("feedjoin"));
}

#[test]
fn help_lists_option_groups() {
    feedjoin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetch, sort and join JSON collections"))
        .stdout(predicate::str::contains("Connection:"))
        .stdout(predicate::str::contains("Output:"));
}

#[test]
fn prints_a_month_name() {
    let output = feedjoin().arg("random-month").output().expect("runs");
    assert!(output.status.success());

    let month: Value = serde_json::from_slice(&output.stdout).expect("json string");
    let names = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September", "October",
        "November", "December",
    ];
    assert!(names.contains(&month.as_str().expect("string")));
}

#[test]
fn joins_users_with_posts() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(200).json_body(users());
    });
    server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200).json_body(posts());
    });

    let output = feedjoin()
        .args(["joined", "users-with-posts", "--compact", "--base-url", &server.base_url()])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(value[0]["name"], "Leanne Graham");
    assert_eq!(value[0]["posts"].as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["posts"].as_array().map(Vec::len), Some(1));
}

#[test]
fn sorted_prints_empty_array_on_server_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/albums");
        then.status(503);
    });

    feedjoin()
        .args(["sorted", "albums", "--compact", "--base-url", &server.base_url()])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn join_failure_exits_non_zero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/posts");
        then.status(200).json_body(posts());
    });

    feedjoin()
        .args(["joined", "users-with-posts", "--base-url", &server.base_url()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch users with posts:"));
}
