use thiserror::Error;

/// Reasons a subgraph can not be extracted. The caller decides whether they are fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("none of the nodes {requested:?} are in the graph")]
    NoSuchSeed { requested: Vec<u64> },
    #[error("nodes {seeds:?} do not have any neighbor")]
    NoNeighbors { seeds: Vec<u64> },
}
