use crate::pipeline::{ReduceConfig, ReduceError};
use clap::Parser;
use graph_manip::subgraph::DEFAULT_DEPTH;
use std::path::PathBuf;

/// Extract subgraph from a big graph, starting from specific nodes.
/// If no node is specified, split the graph into connected components instead.
#[derive(Parser, Debug)]
#[clap(name = "reduce_graph")]
#[clap(author = "Bansho Masutani<ban-m@g.ecc.u-tokyo.ac.jp>")]
#[clap(version = "0.1")]
#[clap(about, long_about = None)]
pub struct ReduceArgs {
    /// Input graph file (in .gdl format).
    #[clap(short, long = "in", value_name = "GDL")]
    pub input: Option<PathBuf>,
    /// Starting node(s).
    #[clap(short, long, value_name = "ID", num_args = 1..)]
    pub node: Vec<u64>,
    /// File including nodes. Every integer in the file is used as a starting node.
    #[clap(short = 'f', long, value_name = "FILE")]
    pub nodefile: Option<PathBuf>,
    /// Output file. Standard output if not given.
    #[clap(short, long = "out", value_name = "GDL")]
    pub output: Option<PathBuf>,
    /// Depth of search in graph from the nodes.
    #[clap(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,
    /// Verbose, more output. Repeat for more.
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Write the summary of the subgraph(s) in JSON.
    #[clap(long, value_name = "JSON")]
    pub summary: Option<PathBuf>,
    /// Read the whole configuration from a TOML file. Other options are ignored.
    #[clap(long, value_name = "TOML")]
    pub profile: Option<PathBuf>,
}

impl ReduceArgs {
    pub fn to_config(&self) -> Result<ReduceConfig, ReduceError> {
        if let Some(profile) = self.profile.as_ref() {
            return ReduceConfig::from_profile(profile);
        }
        let input_file = self.input.clone().ok_or(ReduceError::NoInput)?;
        Ok(ReduceConfig {
            input_file,
            nodes: self.node.clone(),
            node_file: self.nodefile.clone(),
            output: self.output.clone(),
            depth: self.depth,
            verbose: self.verbose as usize,
            summary: self.summary.clone(),
        })
    }
}
