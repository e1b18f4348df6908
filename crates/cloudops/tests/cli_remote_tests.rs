//! End-to-end command tests against a mock server
//!
//! The REST service endpoints in the profile point at the mock server and the
//! profile is anonymous, so the binary makes real HTTP calls without leaving
//! localhost. Storage restores go over gRPC and are not covered here.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERSION_PATH: &str = "/v1/projects/p1/locations/global/parameters/param1/versions/v1";

struct TestEnv {
    _dir: TempDir,
    config_path: String,
}

fn setup(server: &MockServer) -> TestEnv {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    let uri = server.uri();
    std::fs::write(
        &config_path,
        format!(
            r#"default_profile = "test"

[profiles.test]
anonymous = true

[profiles.test.endpoints]
parameter_manager = "{uri}"
service_directory = "{uri}"
"#
        ),
    )
    .unwrap();
    TestEnv {
        config_path: config_path.display().to_string(),
        _dir: dir,
    }
}

fn cloudops(env: &TestEnv) -> Command {
    let mut cmd = Command::cargo_bin("cloudops").unwrap();
    cmd.env_remove("CLOUDOPS_PROFILE")
        .env_remove("RUST_LOG")
        .args(["--config-file", &env.config_path]);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_version_prints_state_and_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VERSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/p1/locations/global/parameters/param1/versions/v1",
            "payload": { "data": "eyJkYiI6ICJwcm9kIn0=" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let env = setup(&server);
    cloudops(&env)
        .args(["parameter-manager", "get-version", "p1", "param1", "v1"])
        .assert()
        .success()
        .stdout(
            "Found parameter version projects/p1/locations/global/parameters/param1/versions/v1 \
             with state enabled\nPayload: {\"db\": \"prod\"}\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_disabled_version_omits_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VERSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/p1/locations/global/parameters/param1/versions/v1",
            "disabled": true
        })))
        .mount(&server)
        .await;

    let env = setup(&server);
    cloudops(&env)
        .args(["pm", "get-version", "p1", "param1", "v1"])
        .assert()
        .success()
        .stdout(
            "Found parameter version projects/p1/locations/global/parameters/param1/versions/v1 \
             with state disabled\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_disable_version() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(VERSION_PATH))
        .and(query_param("updateMask", "disabled"))
        .and(body_partial_json(json!({
            "name": "projects/p1/locations/global/parameters/param1/versions/v1",
            "disabled": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/p1/locations/global/parameters/param1/versions/v1",
            "disabled": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let env = setup(&server);
    cloudops(&env)
        .args(["parameter-manager", "disable-version", "p1", "param1", "v1"])
        .assert()
        .success()
        .stdout("Disabled parameter version v1 for parameter param1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_version_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VERSION_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": 404,
                "message": "Parameter version not found",
                "status": "NOT_FOUND"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let env = setup(&server);
    cloudops(&env)
        .args(["parameter-manager", "get-version", "p1", "param1", "v1"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Parameter version not found"))
        .stderr(predicate::str::contains("NOT_FOUND"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_namespace() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/projects/p1/locations/us-east1/namespaces"))
        .and(query_param("namespaceId", "ns1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/p1/locations/us-east1/namespaces/ns1",
            "uid": "1234"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let env = setup(&server);
    cloudops(&env)
        .args(["service-directory", "create-namespace", "p1", "us-east1", "ns1"])
        .assert()
        .success()
        .stdout("Created Namespace: projects/p1/locations/us-east1/namespaces/ns1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_existing_namespace_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/projects/p1/locations/us-east1/namespaces"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": {
                "code": 409,
                "message": "Namespace already exists",
                "status": "ALREADY_EXISTS"
            }
        })))
        .mount(&server)
        .await;

    let env = setup(&server);
    cloudops(&env)
        .args(["sd", "create-namespace", "p1", "us-east1", "ns1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Namespace already exists"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_version_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VERSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/p1/locations/global/parameters/param1/versions/v1",
            "payload": { "data": "aGVsbG8=" }
        })))
        .mount(&server)
        .await;

    let env = setup(&server);
    let output = cloudops(&env)
        .args(["-o", "json", "pm", "get-version", "p1", "param1", "v1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["parameter_version"]["disabled"], false);
    assert_eq!(value["parameter_version"]["payload"]["data"], "aGVsbG8=");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_suggests_adc() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(VERSION_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": 401,
                "message": "Invalid Credentials",
                "status": "UNAUTHENTICATED"
            }
        })))
        .mount(&server)
        .await;

    let env = setup(&server);
    cloudops(&env)
        .args(["pm", "get-version", "p1", "param1", "v1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Remote call failed"))
        .stderr(predicate::str::contains("Invalid Credentials"))
        .stderr(predicate::str::contains("gcloud auth application-default login"));
}
