//! Integration tests for the graphwalk CLI
//!
//! These tests run the graphwalk binary against network files written to a
//! temporary directory.

mod common;

use common::{graphwalk, write_network, CHAIN, ROADS, SPLIT};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    graphwalk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphwalk"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("mst"));
}

#[test]
fn test_path_help_lists_metrics() {
    graphwalk()
        .args(["path", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[possible values: total, bottleneck]"));
}

#[test]
fn test_version_flag() {
    graphwalk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk"));
}

// ============================================================================
// Happy paths
// ============================================================================

#[test]
fn test_info() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("info")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("vertices: 5 (declared 5)"))
        .stdout(predicate::str::contains("edges: 12 directed records"))
        .stdout(predicate::str::contains("target: 5"))
        .stdout(predicate::str::contains("disconnected: no"));
}

#[test]
fn test_adjacency_listing() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("adjacency")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Adjacency list for the network with weights:\n",
        ))
        .stdout(predicate::str::contains("1 ---> [ 2 7, 3 9 ]"))
        .stdout(predicate::str::contains("5 ---> [ 4 6 ]"));
}

#[test]
fn test_bfs_and_dfs_orders() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("bfs")
        .arg(&file)
        .args(["--from", "5"])
        .assert()
        .success()
        .stdout("5 4 2 3 1\n");

    graphwalk()
        .arg("dfs")
        .arg(&file)
        .args(["--from", "5"])
        .assert()
        .success()
        .stdout("5 4 2 1 3\n");
}

#[test]
fn test_path_defaults_to_file_target() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("path")
        .arg(&file)
        .args(["--from", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("route 1 -> 5 (total)"))
        .stdout(predicate::str::contains(
            "  1 -> 3 (9)\n  3 -> 4 (11)\n  4 -> 5 (6)\n",
        ))
        .stdout(predicate::str::contains("total: 26"))
        .stdout(predicate::str::contains("highest: 11"));
}

#[test]
fn test_path_bottleneck_json() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    let output = graphwalk()
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["--from", "1", "--to", "4", "--metric", "bottleneck"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["metric"], "bottleneck");
    assert_eq!(json["from"], 1);
    assert_eq!(json["to"], 4);
    assert_eq!(json["highest"], 11.0);
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0]["source"], 1);
    assert_eq!(edges[0]["destination"], 3);
    assert_eq!(edges[1]["weight"], 11.0);
}

#[test]
fn test_paths_count() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("paths")
        .arg(&file)
        .args(["--from", "1", "--to", "5"])
        .assert()
        .success()
        .stdout("4 simple paths from 1 to 5\n");

    graphwalk()
        .arg("--quiet")
        .arg("paths")
        .arg(&file)
        .args(["--from", "1", "--to", "5"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_cycle_and_topo_on_undirected_network() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("cycle")
        .arg(&file)
        .args(["--from", "1"])
        .assert()
        .success()
        .stdout("cycle reachable from 1: yes\n");

    graphwalk()
        .arg("topo")
        .arg(&file)
        .assert()
        .success()
        .stdout("cyclic\n");
}

#[test]
fn test_cycle_and_topo_on_directed_chain() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "chain.txt", CHAIN);

    graphwalk()
        .args(["topo", "--directed"])
        .arg(&file)
        .assert()
        .success()
        .stdout("1 2 3\n");

    graphwalk()
        .arg("cycle")
        .arg(&file)
        .args(["--from", "1", "--directed"])
        .assert()
        .success()
        .stdout("cycle reachable from 1: no\n");

    // The same file read two-way still has a cycle on every edge.
    graphwalk()
        .arg("topo")
        .arg(&file)
        .assert()
        .success()
        .stdout("cyclic\n");
}

#[test]
fn test_directed_edges_only_reach_forward() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "chain.txt", CHAIN);

    graphwalk()
        .args(["--directed", "bfs"])
        .arg(&file)
        .args(["--from", "2"])
        .assert()
        .success()
        .stdout("2 3\n");
}

#[test]
fn test_topo_without_edges() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "empty.txt", "0 0\n1\n");

    let output = graphwalk()
        .args(["topo", "--format", "json"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["acyclic"], true);
    assert!(json["order"].as_array().unwrap().is_empty());
}

#[test]
fn test_mst() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("mst")
        .arg(&file)
        .assert()
        .success()
        .stdout("1 - 2 (7)\n1 - 3 (9)\n3 - 4 (11)\n4 - 5 (6)\ntotal: 33\n");
}

#[test]
fn test_mst_json_on_split_network() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "split.txt", SPLIT);

    let output = graphwalk()
        .args(["--format", "json", "mst"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 1.0);
    assert_eq!(json["spanning"], false);
    assert_eq!(json["edges"].as_array().unwrap().len(), 1);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_sets_default_format() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);
    let config = write_network(dir.path(), "graphwalk.toml", "[output]\nformat = \"json\"\n");

    let output = graphwalk()
        .arg("--config")
        .arg(&config)
        .arg("info")
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertices"], 5);
    assert_eq!(json["disconnected"], false);
}

#[test]
fn test_format_flag_beats_config() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);
    let config = write_network(dir.path(), "graphwalk.toml", "[output]\nformat = \"json\"\n");

    graphwalk()
        .env("GRAPHWALK_CONFIG", &config)
        .args(["--format", "human", "bfs"])
        .arg(&file)
        .args(["--from", "1"])
        .assert()
        .success()
        .stdout("1 2 3 4 5\n");
}

#[test]
fn test_path_count_limit_exit_code_2() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);
    let config = write_network(
        dir.path(),
        "graphwalk.toml",
        "[limits]\nmax_path_count_vertices = 3\n",
    );

    graphwalk()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .arg(&file)
        .args(["--from", "1", "--to", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("limit exceeded: 5 (max 3)"));
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);
    let config = write_network(dir.path(), "graphwalk.toml", "[limits\n");

    graphwalk()
        .arg("--config")
        .arg(&config)
        .arg("info")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_vertex_exit_code_2() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("bfs")
        .arg(&file)
        .args(["--from", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("vertex not in graph: 9"));
}

#[test]
fn test_unknown_destination_exit_code_2() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("path")
        .arg(&file)
        .args(["--from", "1", "--to", "42"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_format_exit_code_2() {
    graphwalk()
        .args(["--format", "xml", "info", "roads.txt"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_argument_json_envelope() {
    graphwalk()
        .args(["--format", "json", "bfs", "roads.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_unreached_target_exit_code_3() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "split.txt", SPLIT);

    graphwalk()
        .arg("path")
        .arg(&file)
        .args(["--from", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "destination not reached from start: 4",
        ));
}

#[test]
fn test_malformed_network_exit_code_3() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "bad.txt", "2 2\n1 2 1\n1 x 3\n2\n");

    graphwalk()
        .arg("info")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("at line 3: invalid vertex id: x"));
}

#[test]
fn test_missing_file_exit_code_1() {
    let dir = tempdir().unwrap();

    graphwalk()
        .arg("info")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    let output = graphwalk()
        .args(["--format", "json", "cycle"])
        .arg(&file)
        .args(["--from", "7"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 2);
    assert_eq!(json["error"]["type"], "unknown_vertex");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();
    let file = write_network(dir.path(), "roads.txt", ROADS);

    graphwalk()
        .arg("--quiet")
        .arg("bfs")
        .arg(&file)
        .args(["--from", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}
