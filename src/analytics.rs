//! Summary statistics over an extracted graph, typically the largest
//! connected component.

use petgraph::visit::EdgeRef;
use petgraph::EdgeType;

use crate::algo::AttrGraph;
use crate::error::{GraphError, Result};

/// Edges per node. Fails with [`GraphError::EmptyGraph`] on a graph with
/// no nodes.
pub fn average_degree<Ty: EdgeType>(graph: &AttrGraph<Ty>) -> Result<f64> {
    if graph.node_count() == 0 {
        return Err(GraphError::EmptyGraph("average degree"));
    }
    Ok(graph.edge_count() as f64 / graph.node_count() as f64)
}

/// Degree assortativity coefficient (Newman 2002): the Pearson
/// correlation of the degrees at either end of each edge, ignoring edge
/// direction. `NaN` when every node has the same degree or the graph has
/// no edges; [`GraphError::EmptyGraph`] on a graph with no nodes.
pub fn degree_assortativity<Ty: EdgeType>(graph: &AttrGraph<Ty>) -> Result<f64> {
    if graph.node_count() == 0 {
        return Err(GraphError::EmptyGraph("degree assortativity"));
    }
    if graph.edge_count() == 0 {
        return Ok(f64::NAN);
    }
    let degree: Vec<f64> = graph
        .node_indices()
        .map(|node| graph.neighbors_undirected(node).count() as f64)
        .collect();
    let m = graph.edge_count() as f64;
    let mut sum_product = 0.0;
    let mut sum_mean = 0.0;
    let mut sum_square = 0.0;
    for edge in graph.edge_references() {
        let j = degree[edge.source().index()];
        let k = degree[edge.target().index()];
        sum_product += j * k;
        sum_mean += 0.5 * (j + k);
        sum_square += 0.5 * (j * j + k * k);
    }
    let mean = sum_mean / m;
    let numerator = sum_product / m - mean * mean;
    let denominator = sum_square / m - mean * mean;
    Ok(numerator / denominator)
}
