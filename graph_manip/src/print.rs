use crate::Subgraph;
use definitions::Graph;
use std::io::{Error, ErrorKind, Write};

pub trait PrintSubgraph {
    /// Write `subgraph` in the GDL format. Reads are written in ascending order of identifiers,
    /// then edges are written verbatim, in the given order.
    fn print_subgraph<W: Write>(&self, subgraph: &Subgraph, wtr: &mut W) -> std::io::Result<()>;
}

impl PrintSubgraph for Graph {
    fn print_subgraph<W: Write>(&self, subgraph: &Subgraph, wtr: &mut W) -> std::io::Result<()> {
        writeln!(wtr, "graph: {{")?;
        write_line(wtr, self.settings())?;
        for node in subgraph.nodes.iter() {
            writeln!(wtr, "node: {{ title:\"{}\" label:\"{}\" }}", node, node)?;
        }
        for &id in subgraph.edges.iter() {
            let edge = self.edge(id).ok_or_else(|| {
                let msg = format!("edge {} is not in the graph", id);
                Error::new(ErrorKind::InvalidInput, msg)
            })?;
            write_line(wtr, &edge.gdl_string)?;
        }
        writeln!(wtr, "}}")
    }
}

// Write `text` as is, terminating it if it is not.
fn write_line<W: Write>(wtr: &mut W, text: &str) -> std::io::Result<()> {
    wtr.write_all(text.as_bytes())?;
    if !text.is_empty() && !text.ends_with('\n') {
        writeln!(wtr)?;
    }
    Ok(())
}
