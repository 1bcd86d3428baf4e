use crate::{ExtractSubgraph, Subgraph, SubgraphConfig};
use definitions::Graph;
use std::collections::BTreeSet;

pub trait SplitGraph {
    /// Split the graph into connected components.
    /// Components are ordered by their smallest read identifier.
    fn split(&self) -> Vec<Subgraph>;
}

impl SplitGraph for Graph {
    fn split(&self) -> Vec<Subgraph> {
        let mut remaining: BTreeSet<u64> = self.reads().map(|r| r.id).collect();
        let mut components = vec![];
        loop {
            let seed = match remaining.iter().next() {
                Some(&seed) => seed,
                None => break,
            };
            trace!("Remaining nodes in graph: {}", remaining.len());
            // The whole remaining graph is within reach.
            let config = SubgraphConfig::new(remaining.len(), true);
            // A read without any edge is a component by itself.
            let component = self
                .subgraph(&[seed], &config)
                .unwrap_or_else(|_| Subgraph::singleton(seed));
            for id in component.nodes.iter() {
                remaining.remove(id);
            }
            components.push(component);
        }
        info!("Graph has {} connected subgraphs.", components.len());
        components
    }
}
