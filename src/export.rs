//! Graph export and rendering.
//!
//! DOT files carry the display colormap so Graphviz renders communities
//! and node types directly; GEXF files feed external tools like Gephi.
//! Rendering shells out to the Graphviz `dot` binary.

use std::io;
use std::path::Path;
use std::process::Command;

use petgraph::dot::{Config, Dot};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;

use crate::algo::AttrGraph;
use crate::error::{GraphError, Result};
use crate::graph::DEFAULT_COLOR;

/// Writes a DOT file with filled nodes colored from `colors`, which must
/// be aligned with `graph.node_indices()`.
pub fn write_dot<Ty: EdgeType, P: AsRef<Path>>(
    graph: &AttrGraph<Ty>,
    colors: &[&'static str],
    path: P,
) -> Result<()> {
    let node_attrs = |_, (node, label): (petgraph::graph::NodeIndex, &String)| {
        format!(
            "label=\"{}\", style=filled, fillcolor=\"{}\"",
            label,
            colors.get(node.index()).copied().unwrap_or(DEFAULT_COLOR)
        )
    };
    let dot = Dot::with_attr_getters(
        graph,
        &[Config::EdgeNoLabel, Config::NodeNoLabel],
        &|_, edge| format!("label=\"{}\"", edge.weight()),
        &node_attrs,
    );
    std::fs::write(path, format!("{dot:?}"))?;
    Ok(())
}

/// Writes a minimal GEXF 1.2 document: nodes with labels, edges with
/// weights, edge type taken from the graph's directedness.
pub fn write_gexf<Ty: EdgeType, P: AsRef<Path>>(graph: &AttrGraph<Ty>, path: P) -> Result<()> {
    let edge_type = if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<gexf xmlns=\"http://www.gexf.net/1.2draft\" version=\"1.2\">\n");
    out.push_str(&format!("  <graph defaultedgetype=\"{edge_type}\">\n"));
    out.push_str("    <nodes>\n");
    for node in graph.node_indices() {
        out.push_str(&format!(
            "      <node id=\"{}\" label=\"{}\"/>\n",
            node.index(),
            xml_escape(&graph[node])
        ));
    }
    out.push_str("    </nodes>\n    <edges>\n");
    for (i, edge) in graph.edge_references().enumerate() {
        out.push_str(&format!(
            "      <edge id=\"{}\" source=\"{}\" target=\"{}\" weight=\"{}\"/>\n",
            i,
            edge.source().index(),
            edge.target().index(),
            edge.weight()
        ));
    }
    out.push_str("    </edges>\n  </graph>\n</gexf>\n");
    std::fs::write(path, out)?;
    Ok(())
}

/// Renders a DOT file to PNG via Graphviz.
pub fn render_dot<P: AsRef<Path>, Q: AsRef<Path>>(dot_path: P, png_path: Q) -> Result<()> {
    let status = Command::new("dot")
        .arg("-Tpng")
        .arg(dot_path.as_ref())
        .arg("-o")
        .arg(png_path.as_ref())
        .status()?;
    if !status.success() {
        return Err(GraphError::Io(io::Error::other(format!(
            "dot exited with {status}"
        ))));
    }
    Ok(())
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
