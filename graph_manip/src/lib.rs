//! Graph manipulation -- extract subgraphs from a read-overlap graph and write them back in the GDL format.
//!
//! Every operation is a trait implemented on [definitions::Graph]:
//! - [ExtractSubgraph] collects the reads and edges within a given depth from seed reads,
//! - [SplitGraph] partitions the whole graph into connected components,
//! - [PrintSubgraph] writes a [Subgraph] as a `.gdl` document.
//!
//! None of them modify the graph. They return or consume a [Subgraph], i.e., a set of read identifiers and a list of edge identifiers.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
pub mod error;
pub mod print;
pub mod split;
pub mod stats;
pub mod subgraph;
pub use error::ExtractError;
pub use print::PrintSubgraph;
pub use split::SplitGraph;
pub use stats::ComponentSummary;
pub use subgraph::{ExtractSubgraph, SubgraphConfig};
#[macro_use]
extern crate log;

/// A part of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgraph {
    /// Read identifiers.
    pub nodes: BTreeSet<u64>,
    /// Edge identifiers without duplication, in the order of discovery.
    pub edges: Vec<u64>,
}

impl Subgraph {
    pub fn new(nodes: BTreeSet<u64>, edges: Vec<u64>) -> Self {
        Self { nodes, edges }
    }
    /// A lone read without any edge.
    pub fn singleton(node: u64) -> Self {
        let nodes = std::iter::once(node).collect();
        Self::new(nodes, vec![])
    }
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
