//! Loader for the plain-text network format
//!
//! ```text
//! <vertexCount> <edgeCount>
//! <vertexA> <vertexB> [<weight>]   (edgeCount lines)
//! <targetVertex>
//! ```
//!
//! Vertex ids are unsigned integers. Every edge line adds an edge of the
//! requested kind, undirected unless asked otherwise, creating its
//! endpoints on first sight. A missing weight is `Edge::DEFAULT_WEIGHT`.
//! Blank lines are skipped.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, EdgeKind, Graph};
use crate::trace_time;

/// A graph read from a network file together with its header and target
#[derive(Debug, Clone)]
pub struct Network {
    pub graph: Graph<u32>,
    /// Vertex named on the final line of the file
    pub target: u32,
    /// Vertex count announced in the header
    pub declared_vertices: usize,
    /// Edge count announced in the header
    pub declared_edges: usize,
}

/// Which part of the file the parser expects next
enum Section {
    Header,
    Edges { remaining: usize },
    Target,
    Done,
}

impl Network {
    /// Read and parse a network file of undirected edges
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(path, EdgeKind::Undirected)
    }

    /// Read and parse a network file, adding every edge line as `kind`
    #[tracing::instrument(fields(path = %path.display()))]
    pub fn load_with(path: &Path, kind: EdgeKind) -> Result<Self> {
        let start = Instant::now();
        let content = fs::read_to_string(path)?;
        let network = Self::parse_with(path, &content, kind)?;
        trace_time!(start, "network_load", vertices = network.graph.vertex_count());
        Ok(network)
    }

    /// Parse network text of undirected edges
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        Self::parse_with(path, content, EdgeKind::Undirected)
    }

    /// Parse network text, adding every edge line as `kind`.
    ///
    /// `path` is only used in error messages.
    pub fn parse_with(path: impl Into<PathBuf>, content: &str, kind: EdgeKind) -> Result<Self> {
        let path = path.into();
        let mut graph = Graph::new();
        let mut declared = (0usize, 0usize);
        let mut target = None;
        let mut section = Section::Header;
        let mut last_line = 0;

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            last_line = line_no;
            let fields: Vec<&str> = line.split_whitespace().collect();

            section = match section {
                Section::Header => {
                    expect_fields(&path, line_no, &fields, 2)?;
                    let vertices = parse_field(&path, line_no, fields[0], "vertex count")?;
                    let edges = parse_field(&path, line_no, fields[1], "edge count")?;
                    declared = (vertices, edges);
                    if edges == 0 {
                        Section::Target
                    } else {
                        Section::Edges { remaining: edges }
                    }
                }
                Section::Edges { remaining } => {
                    if !(2..=3).contains(&fields.len()) {
                        return Err(GraphError::invalid_network(
                            &path,
                            line_no,
                            format!("expected 2 or 3 fields, found {}", fields.len()),
                        ));
                    }
                    let a: u32 = parse_field(&path, line_no, fields[0], "vertex id")?;
                    let b: u32 = parse_field(&path, line_no, fields[1], "vertex id")?;
                    let weight = match fields.get(2) {
                        Some(field) => parse_weight(&path, line_no, field)?,
                        None => Edge::<u32>::DEFAULT_WEIGHT,
                    };
                    let a = graph.create_vertex(a);
                    let b = graph.create_vertex(b);
                    graph.add(kind, &a, &b, weight)?;
                    if remaining == 1 {
                        Section::Target
                    } else {
                        Section::Edges {
                            remaining: remaining - 1,
                        }
                    }
                }
                Section::Target => {
                    expect_fields(&path, line_no, &fields, 1)?;
                    target = Some(parse_field(&path, line_no, fields[0], "target vertex")?);
                    Section::Done
                }
                Section::Done => {
                    return Err(GraphError::invalid_network(
                        &path,
                        line_no,
                        "unexpected content after the target line",
                    ));
                }
            };
        }

        let target = finish(&path, last_line + 1, section, target, declared.1)?;

        if graph.vertex_count() != declared.0 {
            tracing::warn!(
                declared = declared.0,
                found = graph.vertex_count(),
                "vertex count in header does not match edges"
            );
        }

        Ok(Network {
            graph,
            target,
            declared_vertices: declared.0,
            declared_edges: declared.1,
        })
    }
}

/// Check that the input ended right after the target line
fn finish(
    path: &Path,
    line: usize,
    section: Section,
    target: Option<u32>,
    declared_edges: usize,
) -> Result<u32> {
    let reason = match (section, target) {
        (Section::Done, Some(target)) => return Ok(target),
        (Section::Header, _) => "missing header line".to_string(),
        (Section::Edges { remaining }, _) => format!(
            "expected {} edge lines, found {}",
            declared_edges,
            declared_edges - remaining
        ),
        _ => "missing target vertex line".to_string(),
    };
    Err(GraphError::invalid_network(path, line, reason))
}

fn expect_fields(path: &Path, line: usize, fields: &[&str], expected: usize) -> Result<()> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(GraphError::invalid_network(
            path,
            line,
            format!("expected {} fields, found {}", expected, fields.len()),
        ))
    }
}

fn parse_weight(path: &Path, line: usize, field: &str) -> Result<f64> {
    let weight: f64 = parse_field(path, line, field, "weight")?;
    if weight.is_finite() {
        Ok(weight)
    } else {
        Err(GraphError::invalid_network(
            path,
            line,
            format!("weight must be a finite number, got {}", field),
        ))
    }
}

fn parse_field<F: FromStr>(path: &Path, line: usize, field: &str, what: &str) -> Result<F> {
    field
        .parse()
        .map_err(|_| GraphError::invalid_network(path, line, format!("invalid {}: {}", what, field)))
}
