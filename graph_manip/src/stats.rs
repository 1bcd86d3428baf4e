use crate::Subgraph;
use definitions::Graph;
use serde::{Deserialize, Serialize};

/// A summary of an extracted subgraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub index: usize,
    /// The smallest read identifier.
    pub seed: Option<u64>,
    pub nodes: usize,
    pub edges: usize,
    /// Edges representing collapsed chains of reads.
    pub composite_edges: usize,
    /// Total number of reads contained in the edges.
    pub contained_reads: u64,
}

impl ComponentSummary {
    pub fn new(index: usize, subgraph: &Subgraph, graph: &Graph) -> Self {
        let edges: Vec<_> = subgraph
            .edges
            .iter()
            .filter_map(|&id| graph.edge(id))
            .collect();
        Self {
            index,
            seed: subgraph.nodes.iter().next().copied(),
            nodes: subgraph.num_nodes(),
            edges: subgraph.num_edges(),
            composite_edges: edges.iter().filter(|e| e.is_composite()).count(),
            contained_reads: edges.iter().map(|e| e.reads).sum(),
        }
    }
}

impl std::fmt::Display for ComponentSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let seed = match self.seed {
            Some(seed) => seed.to_string(),
            None => "-".to_string(),
        };
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.index, seed, self.nodes, self.edges, self.composite_edges, self.contained_reads
        )
    }
}

/// Summaries of `subgraphs`, indexed by their position.
pub fn summarize(graph: &Graph, subgraphs: &[Subgraph]) -> Vec<ComponentSummary> {
    subgraphs
        .iter()
        .enumerate()
        .map(|(idx, sg)| ComponentSummary::new(idx, sg, graph))
        .collect()
}
