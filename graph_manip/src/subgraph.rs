use crate::{ExtractError, Subgraph};
use definitions::Graph;
use std::collections::{BTreeSet, HashSet};

pub const DEFAULT_DEPTH: usize = 10;

#[derive(Debug, Clone, Copy)]
pub struct SubgraphConfig {
    /// Distance from the seeds to be collected. Depth 1 is the seeds and their neighbors.
    depth: usize,
    /// If true, do not report the reason of the stop.
    quiet: bool,
}

impl SubgraphConfig {
    pub fn new(depth: usize, quiet: bool) -> Self {
        Self { depth, quiet }
    }
    pub fn depth(&self) -> usize {
        self.depth
    }
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

impl std::default::Default for SubgraphConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH, false)
    }
}

pub trait ExtractSubgraph {
    /// Collect the reads within `config.depth()` hops from `seeds`, and the edges adjacent to the reads traversed.
    /// Seeds not in the graph are ignored.
    /// The traversal stops early when no new read or no new edge is found.
    fn subgraph(&self, seeds: &[u64], config: &SubgraphConfig) -> Result<Subgraph, ExtractError>;
}

// Edge identifiers without duplication, keeping the order of discovery.
#[derive(Debug, Clone, Default)]
struct EdgeList {
    edges: Vec<u64>,
    seen: HashSet<u64>,
}

impl EdgeList {
    // Return the number of newly added edges.
    fn extend<I: IntoIterator<Item = u64>>(&mut self, edges: I) -> usize {
        let len = self.edges.len();
        for edge in edges {
            if self.seen.insert(edge) {
                self.edges.push(edge);
            }
        }
        self.edges.len() - len
    }
}

impl ExtractSubgraph for Graph {
    fn subgraph(&self, seeds: &[u64], config: &SubgraphConfig) -> Result<Subgraph, ExtractError> {
        let quiet = config.quiet;
        let reads: Vec<_> = seeds
            .iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(|&id| self.read(id))
            .collect();
        if quiet {
            trace!("{} read(s) in the graph.", reads.len());
        } else {
            info!("{} read(s) in the graph.", reads.len());
        }
        if reads.is_empty() {
            return Err(ExtractError::NoSuchSeed {
                requested: seeds.to_vec(),
            });
        }
        let mut finished: HashSet<u64> = reads.iter().map(|r| r.id).collect();
        let neighbors: BTreeSet<u64> = reads.iter().flat_map(|&r| r.neighbors(self)).collect();
        if neighbors.is_empty() {
            let seeds = reads.iter().map(|r| r.id).collect();
            return Err(ExtractError::NoNeighbors { seeds });
        }
        let mut edges = EdgeList::default();
        edges.extend(reads.iter().flat_map(|r| r.edges.iter().copied()));
        let mut frontier: BTreeSet<u64> = neighbors
            .into_iter()
            .filter(|id| !finished.contains(id))
            .collect();
        let mut depth = 1;
        while depth < config.depth {
            let mut discovered = BTreeSet::new();
            let mut new_edges = vec![];
            for read in frontier.iter().filter_map(|&id| self.read(id)) {
                discovered.extend(read.neighbors(self));
                new_edges.extend(read.edges.iter().copied());
                finished.insert(read.id);
            }
            depth += 1;
            frontier = discovered
                .into_iter()
                .filter(|id| !finished.contains(id))
                .collect();
            let added = edges.extend(new_edges);
            trace!("DEPTH\t{}\t{}\t{}", depth, frontier.len(), added);
            if frontier.is_empty() {
                if !quiet {
                    info!("no more new neighbors");
                }
                break;
            } else if added == 0 {
                if !quiet {
                    info!("no more new edges");
                }
                break;
            }
        }
        let nodes: BTreeSet<u64> = finished.into_iter().chain(frontier).collect();
        let edges = edges.edges;
        if !quiet {
            info!(
                "At depth {}, {} nodes and {} edges in total.",
                depth,
                nodes.len(),
                edges.len()
            );
        }
        Ok(Subgraph::new(nodes, edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn gen_graph(nodes: &[u64], edges: &[(u64, u64)]) -> Graph {
        let mut gdl = String::from("graph: {\n");
        for node in nodes {
            gdl += &format!("node: {{ title:\"{}\" label:\"{}\" }}\n", node, node);
        }
        for (from, to) in edges {
            gdl += &format!(
                "edge: {{ sourcename:\"{}\" targetname:\"{}\" label:\"1 10 100 0\" }}\n",
                from, to
            );
        }
        gdl += "}\n";
        Graph::parse(&gdl).unwrap()
    }
    fn to_set(xs: &[u64]) -> BTreeSet<u64> {
        xs.iter().copied().collect()
    }
    #[test]
    fn one_hop() {
        let graph = gen_graph(&[1, 2, 3], &[(1, 2), (2, 3)]);
        let config = SubgraphConfig::new(1, false);
        let sg = graph.subgraph(&[2], &config).unwrap();
        assert_eq!(sg.nodes, to_set(&[1, 2, 3]));
        assert_eq!(sg.edges, vec![1, 2]);
    }
    #[test]
    fn path() {
        let edges: Vec<_> = (1..10).map(|i| (i, i + 1)).collect();
        let nodes: Vec<_> = (1..=10).collect();
        let graph = gen_graph(&nodes, &edges);
        let sg = graph.subgraph(&[1], &SubgraphConfig::new(3, false)).unwrap();
        assert_eq!(sg.nodes, to_set(&[1, 2, 3, 4]));
        // Edges adjacent to the reads at distance less than 3.
        assert_eq!(sg.edges, vec![1, 2, 3]);
        let sg = graph.subgraph(&[5], &SubgraphConfig::default()).unwrap();
        assert_eq!(sg.nodes, to_set(&nodes));
        assert_eq!(sg.num_edges(), 9);
    }
    #[test]
    fn triangle() {
        // The edge between 2 and 3 is found after the frontier is exhausted.
        let graph = gen_graph(&[1, 2, 3], &[(1, 2), (1, 3), (2, 3)]);
        let sg = graph.subgraph(&[1], &SubgraphConfig::default()).unwrap();
        assert_eq!(sg.nodes, to_set(&[1, 2, 3]));
        assert_eq!(sg.edges, vec![1, 2, 3]);
    }
    #[test]
    fn multiple_seeds() {
        let graph = gen_graph(&[1, 2, 3, 4, 5, 6], &[(1, 2), (3, 4), (5, 6)]);
        let sg = graph.subgraph(&[5, 1, 1], &SubgraphConfig::new(2, true)).unwrap();
        assert_eq!(sg.nodes, to_set(&[1, 2, 5, 6]));
        assert_eq!(sg.edges, vec![1, 3]);
    }
    #[test]
    fn absent_seeds_are_ignored() {
        let graph = gen_graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)]);
        let config = SubgraphConfig::new(2, false);
        let with = graph.subgraph(&[2, 100, 200], &config).unwrap();
        let without = graph.subgraph(&[2], &config).unwrap();
        assert_eq!(with, without);
    }
    #[test]
    fn no_such_seed() {
        let graph = gen_graph(&[1, 2], &[(1, 2)]);
        let result = graph.subgraph(&[3, 4], &SubgraphConfig::default());
        assert_eq!(
            result,
            Err(ExtractError::NoSuchSeed {
                requested: vec![3, 4]
            })
        );
    }
    #[test]
    fn no_neighbors() {
        let graph = gen_graph(&[1, 2, 3], &[(1, 2)]);
        let result = graph.subgraph(&[3], &SubgraphConfig::default());
        assert_eq!(result, Err(ExtractError::NoNeighbors { seeds: vec![3] }));
    }
    #[test]
    fn self_loop() {
        let graph = gen_graph(&[1, 2], &[(1, 1), (2, 2)]);
        let sg = graph.subgraph(&[1], &SubgraphConfig::default()).unwrap();
        assert_eq!(sg.nodes, to_set(&[1]));
        assert_eq!(sg.edges, vec![1]);
    }
}
