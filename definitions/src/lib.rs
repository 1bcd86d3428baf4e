//! Definitions -- A tiny data model for assembly graphs in the GDL format.
//! A `.gdl` file is parsed once into a [Graph](Graph), which holds reads as nodes and overlaps as edges.
//! After parsing, the graph is never modified; algorithms only read it and return sets of node/edge identifiers.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;
#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

const GRAPH_TAG: &str = "graph:";
const NODE_TAG: &str = "node:";
const EDGE_TAG: &str = "edge:";
const CLOSER_TAG: &str = "}";

lazy_static! {
    static ref INTEGER: regex::Regex = regex::Regex::new(r"\d+").unwrap();
}

/// Return all the non-negative integers embedded in `text`, in the order they appear.
pub fn extract_integers(text: &str) -> Vec<u64> {
    INTEGER
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

#[derive(Debug, Error)]
pub enum ParseError {
    /// An edge names an endpoint without a node record.
    #[error("edge {edge} refers to node {node}, which is not in the graph")]
    MissingNode { edge: u64, node: u64 },
    #[error("line {line}: a node record should contain a numeric title and label")]
    MalformedNode { line: usize },
    #[error("line {line}: an edge record should contain at least four integers")]
    MalformedEdge { line: usize },
    #[error("failed to read the graph: {0}")]
    Io(#[from] std::io::Error),
}

/// The direction of an overlap, decoded from the style markers of an edge record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Both `backarrowstyle:solid` and `arrowstyle:solid`.
    SolidBoth,
    /// `backarrowstyle:solid` only.
    SolidBackOnly,
    /// `color: blue`.
    Blue,
    Plain,
}

impl Orientation {
    pub fn from_gdl(line: &str) -> Self {
        if line.contains("backarrowstyle:solid") {
            // `arrowstyle:solid` is also the tail of `backarrowstyle:solid`.
            let has_arrow = line
                .match_indices("arrowstyle:solid")
                .any(|(pos, _)| !line[..pos].ends_with("back"));
            if has_arrow {
                Orientation::SolidBoth
            } else {
                Orientation::SolidBackOnly
            }
        } else if line.contains("color: blue") {
            Orientation::Blue
        } else {
            Orientation::Plain
        }
    }
    /// Integer code used by the legacy tools.
    pub fn code(&self) -> u8 {
        match self {
            Orientation::SolidBackOnly => 0,
            Orientation::SolidBoth => 1,
            Orientation::Blue => 2,
            Orientation::Plain => 3,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A read, i.e., a node of the graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Read {
    pub id: u64,
    /// Identifiers of the adjacent edges. As edge identifiers are given in file order,
    /// the iteration order is the order of encounter.
    pub edges: BTreeSet<u64>,
}

impl Read {
    fn from_gdl(line: &str, line_no: usize) -> Result<Self, ParseError> {
        // The second integer is the label, as in `node: { title:"12" label:"12" }`.
        let id = extract_integers(line)
            .get(1)
            .copied()
            .ok_or(ParseError::MalformedNode { line: line_no })?;
        Ok(Self {
            id,
            edges: BTreeSet::new(),
        })
    }
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
    /// The opposite endpoints of the adjacent edges. A self-loop yields this read itself.
    pub fn neighbors<'a>(&'a self, graph: &'a Graph) -> impl Iterator<Item = u64> + 'a {
        self.edges
            .iter()
            .filter_map(move |&id| graph.edge(id))
            .map(move |edge| edge.opposite(self.id))
    }
}

impl std::fmt::Display for Read {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Read with id {}, number of adjacent edges: {}",
            self.id,
            self.edges.len()
        )
    }
}

/// An overlap between two reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    /// 1-origin, in the order of the records in the file.
    pub id: u64,
    pub source: u64,
    pub target: u64,
    pub orientation: Orientation,
    pub flow: u64,
    pub coverage_depth: u64,
    pub offset: u64,
    /// The number of reads collapsed into this edge. Zero for a simple edge.
    pub reads: u64,
    /// The record as it was in the file, including the line terminator if any.
    pub gdl_string: String,
}

impl Edge {
    fn from_gdl(id: u64, line: &str, line_no: usize) -> Result<Self, ParseError> {
        let integers = extract_integers(line);
        let len = integers.len();
        if len < 4 {
            return Err(ParseError::MalformedEdge { line: line_no });
        }
        // The trailing four integers are fixed, regardless of the width of the header.
        Ok(Self {
            id,
            source: integers[0],
            target: integers[1],
            orientation: Orientation::from_gdl(line),
            flow: integers[len - 4],
            coverage_depth: integers[len - 3],
            offset: integers[len - 2],
            reads: integers[len - 1],
            gdl_string: line.to_string(),
        })
    }
    pub fn is_composite(&self) -> bool {
        0 < self.reads
    }
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
    /// The endpoint other than `node`.
    pub fn opposite(&self, node: u64) -> u64 {
        if self.target == node {
            self.source
        } else {
            self.target
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Edge: {} ---> {}\torientation: {}\tflow: {}\toffset: {}\tnumber of reads: {}",
            self.source, self.target, self.orientation, self.flow, self.offset, self.reads
        )
    }
}

/// A read-overlap graph.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Graph {
    /// All the lines other than the structural ones, verbatim.
    settings: String,
    reads: BTreeMap<u64, Read>,
    /// The i-th edge has the identifier i+1.
    edges: Vec<Edge>,
}

impl Graph {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let rdr = std::fs::File::open(path).map(std::io::BufReader::new)?;
        Self::from_reader(rdr)
    }
    pub fn from_reader<R: std::io::Read>(mut rdr: R) -> Result<Self, ParseError> {
        let mut gdl = String::new();
        rdr.read_to_string(&mut gdl)?;
        Self::parse(&gdl)
    }
    pub fn parse(gdl: &str) -> Result<Self, ParseError> {
        let mut graph = Self::default();
        for (idx, line) in gdl.split_inclusive('\n').enumerate() {
            let line_no = idx + 1;
            if line.starts_with(NODE_TAG) {
                graph.push_read(Read::from_gdl(line, line_no)?);
            } else if line.starts_with(EDGE_TAG) {
                let id = graph.edges.len() as u64 + 1;
                graph.push_edge(Edge::from_gdl(id, line, line_no)?)?;
            } else if !(line.starts_with(GRAPH_TAG) || line.starts_with(CLOSER_TAG)) {
                graph.settings.push_str(line);
            }
        }
        info!("{}", graph);
        Ok(graph)
    }
    fn push_read(&mut self, read: Read) {
        if self.reads.contains_key(&read.id) {
            warn!("Node {} appears more than once. Keep the first.", read.id);
        } else {
            self.reads.insert(read.id, read);
        }
    }
    fn push_edge(&mut self, edge: Edge) -> Result<(), ParseError> {
        for &node in &[edge.source, edge.target] {
            match self.reads.get_mut(&node) {
                Some(read) => {
                    read.edges.insert(edge.id);
                }
                None => {
                    return Err(ParseError::MissingNode {
                        edge: edge.id,
                        node,
                    })
                }
            }
        }
        self.edges.push(edge);
        Ok(())
    }
    /// The graph-level settings, i.e., every non-structural line.
    pub fn settings(&self) -> &str {
        &self.settings
    }
    pub fn read(&self, id: u64) -> Option<&Read> {
        self.reads.get(&id)
    }
    /// Reads in ascending order of their identifiers.
    pub fn reads(&self) -> impl Iterator<Item = &Read> {
        self.reads.values()
    }
    pub fn contains(&self, id: u64) -> bool {
        self.reads.contains_key(&id)
    }
    pub fn edge(&self, id: u64) -> Option<&Edge> {
        let idx = id.checked_sub(1)?;
        self.edges.get(idx as usize)
    }
    /// Edges in ascending order of their identifiers.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
    pub fn num_reads(&self) -> usize {
        self.reads.len()
    }
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Graph with {} nodes and {} edges",
            self.num_reads(),
            self.num_edges()
        )
    }
}
