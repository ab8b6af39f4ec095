use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;

fn check_cmd(server: &MockServer, key_command: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("keysync");
    for var in [
        "KEYSYNC_API_URL",
        "KEYSYNC_TOKEN",
        "KEYSYNC_KEY_COMMAND",
        "KEYSYNC_LOOKUP",
        "KEYSYNC_KEY_TITLE",
    ] {
        cmd.env_remove(var);
    }
    cmd.args([
        "check",
        "--api-url",
        &server.base_url(),
        "--token",
        "sekrit",
        "--key-command",
        key_command,
    ]);
    cmd
}

#[test]
fn check_reports_uploaded_key() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/user/keys");
        then.status(200)
            .json_body(json!([{"key": "foo"}, {"key": "bar"}]));
    });

    check_cmd(&server, "echo bar")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Public SSH key is already uploaded!",
        ));

    list.assert();
}

#[test]
fn check_exits_nonzero_when_key_is_absent() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/user/keys");
        then.status(200).json_body(json!([{"key": "foo"}]));
    });

    check_cmd(&server, "echo bar")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("not uploaded yet"));
}

#[test]
fn check_never_uploads() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/user/keys");
        then.status(200).json_body(json!([]));
    });
    let create = server.mock(|when, then| {
        when.method(POST).path("/user/keys");
        then.status(201).json_body(json!({"key": "bar"}));
    });

    check_cmd(&server, "echo bar").assert().failure();

    create.assert_hits(0);
}

#[test]
fn check_propagates_query_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/user/keys");
        then.status(401).body("bad credentials");
    });

    check_cmd(&server, "echo bar")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Remote key lookup failed"))
        .stderr(predicate::str::contains("401"));
}
