use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Five junctions joined by six roads; target junction 5
#[allow(dead_code)]
pub const ROADS: &str = "5 6\n1 2 7\n1 3 9\n2 3 10\n2 4 15\n3 4 11\n4 5 6\n5\n";

/// Two separate roads; junction 4 cannot be reached from 1
#[allow(dead_code)]
pub const SPLIT: &str = "4 2\n1 2 1\n3 4 1\n4\n";

/// Two roads in a line, 1 to 2 to 3; target junction 3
#[allow(dead_code)]
pub const CHAIN: &str = "3 2\n1 2 1\n2 3 1\n3\n";

pub fn graphwalk() -> Command {
    cargo_bin_cmd!("graphwalk")
}

#[allow(dead_code)]
pub fn write_network(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write network file");
    path
}
