//! Pipeline -- load a graph, reduce it, and write the result.
//!
//! The run is described by one [ReduceConfig], which comes from either the command line or a TOML profile.
use definitions::{Graph, ParseError};
use graph_manip::stats::summarize;
use graph_manip::subgraph::DEFAULT_DEPTH;
use graph_manip::*;
use log::*;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

const RULE: &str = "===========================================================";

#[derive(Debug, Error)]
pub enum ReduceError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile: {0}")]
    Profile(#[from] toml::de::Error),
    #[error("failed to write the summary: {0}")]
    Summary(#[from] serde_json::Error),
    #[error("input graph file is not specified")]
    NoInput,
}

/// The configuration of a run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReduceConfig {
    /// The path to the input graph (.gdl).
    pub input_file: PathBuf,
    /// Starting nodes. If empty (and no node file is given), the graph is split into components.
    #[serde(default)]
    pub nodes: Vec<u64>,
    /// A file from which every integer is read as a starting node.
    pub node_file: Option<PathBuf>,
    /// The output file. Standard output if not given.
    pub output: Option<PathBuf>,
    #[serde(default = "default_depth")]
    pub depth: usize,
    #[serde(default)]
    pub verbose: usize,
    /// Where to write the JSON summary of the subgraphs.
    pub summary: Option<PathBuf>,
}

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

impl ReduceConfig {
    pub fn new(input_file: PathBuf) -> Self {
        Self {
            input_file,
            nodes: vec![],
            node_file: None,
            output: None,
            depth: DEFAULT_DEPTH,
            verbose: 0,
            summary: None,
        }
    }
    pub fn from_profile<P: AsRef<Path>>(path: P) -> Result<Self, ReduceError> {
        let mut rdr = std::fs::File::open(path).map(std::io::BufReader::new)?;
        let mut file = String::new();
        rdr.read_to_string(&mut file)?;
        Ok(toml::from_str(&file)?)
    }
}

/// Start logging. `RUST_LOG` takes precedence over the verbosity.
pub fn init_logger(verbose: usize) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Every integer in the file.
pub fn read_node_file<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<u64>> {
    let mut rdr = std::fs::File::open(path).map(std::io::BufReader::new)?;
    let mut file = String::new();
    rdr.read_to_string(&mut file)?;
    Ok(definitions::extract_integers(&file))
}

pub fn run_reduce(config: &ReduceConfig) -> Result<(), ReduceError> {
    debug!("Input file is {:?}", config.input_file);
    match config.output.as_ref() {
        Some(output) => debug!("Output file is {:?}", output),
        None => debug!("Output file is <stdout>"),
    }
    if let Some(node_file) = config.node_file.as_ref() {
        debug!("Starting from node file: {:?}", node_file);
    }
    info!("{}", RULE);
    let start = std::time::Instant::now();
    let mut seeds = config.nodes.clone();
    if let Some(node_file) = config.node_file.as_ref() {
        seeds.extend(read_node_file(node_file)?);
    }
    let graph = Graph::from_file(&config.input_file)?;
    let subgraphs = if seeds.is_empty() {
        info!("There is no node specified, split graph into components instead.");
        graph.split()
    } else {
        let seed_list: Vec<_> = seeds.iter().map(|x| x.to_string()).collect();
        debug!("Starting from nodes: {}", seed_list.join(","));
        let sg_config = SubgraphConfig::new(config.depth, false);
        vec![graph.subgraph(&seeds, &sg_config)?]
    };
    match config.output.as_ref() {
        Some(output) => {
            let wtr = std::fs::File::create(output).map(BufWriter::new)?;
            write_subgraphs(&graph, &subgraphs, wtr)?;
        }
        None => {
            let stdout = std::io::stdout();
            let wtr = BufWriter::new(stdout.lock());
            write_subgraphs(&graph, &subgraphs, wtr)?;
        }
    }
    if let Some(summary) = config.summary.as_ref() {
        let summaries = summarize(&graph, &subgraphs);
        for summary in summaries.iter() {
            debug!("SUMMARY\t{}", summary);
        }
        let mut wtr = std::fs::File::create(summary).map(BufWriter::new)?;
        serde_json::ser::to_writer_pretty(&mut wtr, &summaries)?;
        wtr.flush()?;
    }
    info!("total time: {:.3} seconds", start.elapsed().as_secs_f64());
    info!("{}", RULE);
    info!("Done");
    Ok(())
}

/// Write each subgraph as a GDL document, one after another.
pub fn write_subgraphs<W: Write>(
    graph: &Graph,
    subgraphs: &[Subgraph],
    mut wtr: W,
) -> std::io::Result<()> {
    for subgraph in subgraphs.iter() {
        graph.print_subgraph(subgraph, &mut wtr)?;
    }
    wtr.flush()
}
