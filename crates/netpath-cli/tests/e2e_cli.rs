//! E2E tests for the `netpath` binary.
//!
//! Each test runs the binary as a subprocess. Output mode is always pinned
//! with `--format` (or `FORMAT`) because stdout is piped under `cargo test`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the `netpath` binary with logging silenced.
fn netpath() -> Command {
    let mut cmd = Command::cargo_bin("netpath").expect("netpath binary must exist");
    cmd.env("NETPATH_LOG", "error");
    cmd.env_remove("FORMAT");
    cmd
}

/// Run `netpath` with `--format json` and parse stdout.
fn run_json(args: &[&str]) -> Value {
    let output = netpath()
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("netpath should not crash");
    assert!(
        output.status.success(),
        "netpath {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

const BOOK_CLUB: &str = r#"
name = "Book club"
description = "Who recommends books to whom"

[[nodes]]
id = "ana"
name = "Ana"

[[nodes]]
id = "ben"
name = "Ben"

[[nodes]]
id = "cy"
name = "Cy"

[[nodes]]
id = "dee"
name = "Dee"

[[edges]]
source = "ana"
target = "ben"

[[edges]]
source = "ben"
target = "cy"
"#;

fn write_definition(dir: &TempDir, file: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, content).expect("write definition");
    path
}

// ---------------------------------------------------------------------------
// networks
// ---------------------------------------------------------------------------

#[test]
fn networks_lists_all_samples() {
    let json = run_json(&["networks"]);
    let rows = json.as_array().expect("array of networks");
    let keys: Vec<&str> = rows.iter().filter_map(|r| r["key"].as_str()).collect();
    assert_eq!(keys, vec!["social", "organization", "star"]);
    assert_eq!(rows[0]["nodes"], 20);
    assert_eq!(rows[0]["edges"], 51);
    assert_eq!(rows[2]["edges"], 14);
}

#[test]
fn networks_text_is_tab_separated() {
    netpath()
        .args(["networks", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("star\t11\t14\tStar Network Topology"));
}

// ---------------------------------------------------------------------------
// path
// ---------------------------------------------------------------------------

#[test]
fn path_through_star_hub() {
    let json = run_json(&["--network", "star", "path", "node1", "node3"]);
    assert_eq!(json["found"], true);
    assert_eq!(json["hops"], 2);
    assert_eq!(json["path"], serde_json::json!(["node1", "hub", "node3"]));
    assert_eq!(
        json["names"],
        serde_json::json!(["Node 1", "Central Hub", "Node 3"])
    );
}

#[test]
fn path_text_output_uses_arrows() {
    netpath()
        .args(["-n", "star", "path", "node1", "node2", "--format", "text"])
        .assert()
        .success()
        .stdout("node1 -> node2 (1 hops)\n");
}

#[test]
fn path_to_self_is_empty() {
    let json = run_json(&["-n", "star", "path", "hub", "hub"]);
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
    assert!(json.get("hops").is_none());
}

#[test]
fn path_between_components_reports_no_path() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_definition(&dir, "club.toml", BOOK_CLUB);

    netpath()
        .arg("--file")
        .arg(&file)
        .args(["path", "ana", "dee", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path between ana and dee"));
}

#[test]
fn path_with_unknown_node_fails() {
    netpath()
        .args(["-n", "star", "path", "node1", "ghost", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown_node"))
        .stderr(predicate::str::contains("ghost"));
}

// ---------------------------------------------------------------------------
// centrality
// ---------------------------------------------------------------------------

#[test]
fn centrality_top_ranks_hub_first() {
    let json = run_json(&["-n", "star", "centrality", "--top", "3"]);
    let nodes = json["nodes"].as_array().expect("nodes array");
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0]["id"], "hub");
    assert_eq!(nodes[0]["degree"], 10);
    assert_eq!(nodes[0]["score"], 1.0);
    assert_eq!(nodes[1]["score"], 0.2);
}

#[test]
fn centrality_default_network_is_social() {
    let json = run_json(&["centrality", "--top", "5"]);
    assert_eq!(json["network"], "Social Media Network");
    let ids: Vec<&str> = json["nodes"]
        .as_array()
        .expect("nodes array")
        .iter()
        .filter_map(|n| n["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["alice", "charlie", "frank", "grace", "mia"]);
}

// ---------------------------------------------------------------------------
// communities
// ---------------------------------------------------------------------------

#[test]
fn communities_fall_back_to_degree_buckets_on_star() {
    let json = run_json(&["-n", "star", "communities"]);
    assert_eq!(json["strategy"], "degree_buckets");
    assert_eq!(json["community_count"], 3);
    assert_eq!(json["assignments"].as_array().map(Vec::len), Some(11));
}

#[test]
fn communities_use_components_for_disconnected_files() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_definition(&dir, "club.toml", BOOK_CLUB);

    netpath()
        .arg("-f")
        .arg(&file)
        .args(["communities", "--format", "text"])
        .assert()
        .success()
        .stdout("0\tana ben cy\n1\tdee\n");
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_for_star() {
    let json = run_json(&["-n", "star", "stats"]);
    assert_eq!(json["node_count"], 11);
    assert_eq!(json["edge_count"], 14);
    assert_eq!(json["max_degree"], 10);
    assert_eq!(json["component_count"], 1);
    assert_eq!(json["isolated_count"], 0);
    assert!(
        json["content_hash"]
            .as_str()
            .is_some_and(|h| h.starts_with("blake3:"))
    );
}

#[test]
fn stats_from_json_definition() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_definition(
        &dir,
        "pair.json",
        r#"{"name":"Pair","nodes":[{"id":"a","name":"A"},{"id":"b","name":"B"}],"edges":[{"source":"a","target":"b"}]}"#,
    );

    let output = netpath()
        .arg("--file")
        .arg(&file)
        .args(["stats", "--format", "json"])
        .output()
        .expect("netpath should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["network"], "Pair");
    assert_eq!(json["node_count"], 2);
    assert_eq!(json["density"], 1.0);
}

// ---------------------------------------------------------------------------
// Errors and output selection
// ---------------------------------------------------------------------------

#[test]
fn unknown_network_fails_with_code() {
    netpath()
        .args(["--network", "mesh", "stats", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E2001"));
}

#[test]
fn dangling_edge_in_file_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_definition(
        &dir,
        "bad.toml",
        "name = \"Bad\"\n[[nodes]]\nid = \"a\"\nname = \"A\"\n[[edges]]\nsource = \"a\"\ntarget = \"zed\"\n",
    );

    netpath()
        .arg("--file")
        .arg(&file)
        .args(["stats", "--format", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zed"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_definition(&dir, "net.yaml", "name: nope\n");

    netpath()
        .arg("--file")
        .arg(&file)
        .args(["stats", "--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E3002"));
}

#[test]
fn format_env_selects_json() {
    let output = netpath()
        .env("FORMAT", "json")
        .args(["-n", "organization", "stats"])
        .output()
        .expect("netpath should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["node_count"], 14);
}

#[test]
fn json_alias_flag_works() {
    let output = netpath()
        .args(["-n", "star", "stats", "--json"])
        .output()
        .expect("netpath should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["edge_count"], 14);
}

#[test]
fn pretty_output_has_sections() {
    netpath()
        .args(["-n", "star", "stats", "--format", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Star Network Topology"))
        .stdout(predicate::str::contains("Max degree:    10"));
}
