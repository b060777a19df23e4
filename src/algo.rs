//! Graph algorithm capability behind which the library primitives sit.
//!
//! The graph builder only ever talks to [`GraphAlgorithms`], so its
//! extraction logic can be tested against a stub. The default
//! implementation delegates to petgraph primitives (union-find for
//! components, neighbor iteration for bounded BFS) and runs a seeded
//! Louvain pass over edge weights for community detection.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{Graph, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use petgraph::{EdgeType, Undirected};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{GraphError, Result};

/// Attribute-relationship graph: nodes are stringified attribute values,
/// edge weights are co-occurrence counts.
pub type AttrGraph<Ty = Undirected> = Graph<String, u32, Ty>;

pub trait GraphAlgorithms {
    /// Shortest-path lengths from `source`, bounded by `cutoff` hops.
    /// Follows outgoing edges on directed graphs.
    fn path_lengths_within<Ty: EdgeType>(
        &self,
        graph: &AttrGraph<Ty>,
        source: NodeIndex,
        cutoff: usize,
    ) -> HashMap<NodeIndex, usize>;

    /// Connected components, ignoring edge direction.
    fn connected_components<Ty: EdgeType>(&self, graph: &AttrGraph<Ty>) -> Vec<Vec<NodeIndex>>;

    /// Disjoint partition of the node set into communities over edge
    /// weights. Fails with [`GraphError::EmptyGraph`] on a graph with no
    /// nodes.
    fn community_partition<Ty: EdgeType>(
        &self,
        graph: &AttrGraph<Ty>,
    ) -> Result<Vec<Vec<NodeIndex>>>;
}

/// Default petgraph-backed implementation.
#[derive(Debug, Clone)]
pub struct PetgraphAlgorithms {
    seed: u64,
}

impl Default for PetgraphAlgorithms {
    fn default() -> Self {
        // same fixed seed the analysis has always been run with
        PetgraphAlgorithms { seed: 1 }
    }
}

impl PetgraphAlgorithms {
    pub fn with_seed(seed: u64) -> Self {
        PetgraphAlgorithms { seed }
    }
}

impl GraphAlgorithms for PetgraphAlgorithms {
    fn path_lengths_within<Ty: EdgeType>(
        &self,
        graph: &AttrGraph<Ty>,
        source: NodeIndex,
        cutoff: usize,
    ) -> HashMap<NodeIndex, usize> {
        let mut lengths = HashMap::new();
        lengths.insert(source, 0);
        let mut frontier = vec![source];
        for depth in 1..=cutoff {
            let mut next = Vec::new();
            for &node in &frontier {
                for neighbor in graph.neighbors(node) {
                    if !lengths.contains_key(&neighbor) {
                        lengths.insert(neighbor, depth);
                        next.push(neighbor);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        lengths
    }

    fn connected_components<Ty: EdgeType>(&self, graph: &AttrGraph<Ty>) -> Vec<Vec<NodeIndex>> {
        let mut sets = UnionFind::<usize>::new(graph.node_count());
        for edge in graph.edge_references() {
            sets.union(edge.source().index(), edge.target().index());
        }
        let labels = sets.into_labeling();
        let mut components: BTreeMap<usize, Vec<NodeIndex>> = BTreeMap::new();
        for node in graph.node_indices() {
            components.entry(labels[node.index()]).or_default().push(node);
        }
        components.into_values().collect()
    }

    fn community_partition<Ty: EdgeType>(
        &self,
        graph: &AttrGraph<Ty>,
    ) -> Result<Vec<Vec<NodeIndex>>> {
        if graph.node_count() == 0 {
            return Err(GraphError::EmptyGraph("community detection"));
        }
        let n = graph.node_count();
        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
        let mut self_weight = vec![0.0; n];
        for edge in graph.edge_references() {
            let (a, b) = (edge.source().index(), edge.target().index());
            let weight = f64::from(*edge.weight());
            if a == b {
                self_weight[a] += weight;
            } else {
                adjacency[a].push((b, weight));
                adjacency[b].push((a, weight));
            }
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let assignment = louvain(adjacency, self_weight, &mut rng);

        let mut groups: BTreeMap<usize, Vec<NodeIndex>> = BTreeMap::new();
        for (index, community) in assignment.iter().enumerate() {
            groups.entry(*community).or_default().push(NodeIndex::new(index));
        }
        let mut partition: Vec<Vec<NodeIndex>> = groups.into_values().collect();
        // largest community first; ties broken by the smallest node label
        partition.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then_with(|| smallest_label(graph, a).cmp(smallest_label(graph, b)))
        });
        Ok(partition)
    }
}

fn smallest_label<'g, Ty: EdgeType>(
    graph: &'g AttrGraph<Ty>,
    members: &[NodeIndex],
) -> &'g String {
    members
        .iter()
        .map(|&node| &graph[node])
        .min()
        .expect("communities are never empty")
}

/// Multi-level Louvain: local moving until no gain, then aggregation,
/// repeated until the partition stabilizes. Returns one community id per
/// original node.
fn louvain(
    mut adjacency: Vec<Vec<(usize, f64)>>,
    mut self_weight: Vec<f64>,
    rng: &mut StdRng,
) -> Vec<usize> {
    let mut assignment: Vec<usize> = (0..adjacency.len()).collect();
    loop {
        let (communities, improved) = local_moving(&adjacency, &self_weight, rng);
        let (communities, count) = renumber(communities);
        for slot in assignment.iter_mut() {
            *slot = communities[*slot];
        }
        if !improved || count == adjacency.len() {
            return assignment;
        }
        let (next_adjacency, next_self_weight) =
            aggregate(&adjacency, &self_weight, &communities, count);
        adjacency = next_adjacency;
        self_weight = next_self_weight;
    }
}

/// One level of greedy modularity moves, visiting nodes in shuffled order
/// until a full pass makes no move.
fn local_moving(
    adjacency: &[Vec<(usize, f64)>],
    self_weight: &[f64],
    rng: &mut StdRng,
) -> (Vec<usize>, bool) {
    let n = adjacency.len();
    let mut community: Vec<usize> = (0..n).collect();
    let degree: Vec<f64> = (0..n)
        .map(|i| adjacency[i].iter().map(|&(_, w)| w).sum::<f64>() + 2.0 * self_weight[i])
        .collect();
    let two_m: f64 = degree.iter().sum();
    if two_m == 0.0 {
        return (community, false);
    }
    let mut community_total = degree.clone();
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut moved_any = false;
    loop {
        let mut moved = false;
        for &node in &order {
            let current = community[node];
            let mut weight_to: BTreeMap<usize, f64> = BTreeMap::new();
            for &(neighbor, weight) in &adjacency[node] {
                *weight_to.entry(community[neighbor]).or_insert(0.0) += weight;
            }
            community_total[current] -= degree[node];
            let staying = weight_to.get(&current).copied().unwrap_or(0.0)
                - community_total[current] * degree[node] / two_m;
            let mut best = current;
            let mut best_gain = 0.0;
            for (&candidate, &weight) in &weight_to {
                if candidate == current {
                    continue;
                }
                let gain =
                    weight - community_total[candidate] * degree[node] / two_m - staying;
                if gain > best_gain + 1e-12 {
                    best_gain = gain;
                    best = candidate;
                }
            }
            community_total[best] += degree[node];
            if best != current {
                community[node] = best;
                moved = true;
                moved_any = true;
            }
        }
        if !moved {
            break;
        }
    }
    (community, moved_any)
}

/// Remaps community ids to a dense `0..count` range.
fn renumber(communities: Vec<usize>) -> (Vec<usize>, usize) {
    let mut remap: HashMap<usize, usize> = HashMap::new();
    let mut next = 0;
    let dense = communities
        .iter()
        .map(|&c| {
            *remap.entry(c).or_insert_with(|| {
                let id = next;
                next += 1;
                id
            })
        })
        .collect();
    (dense, next)
}

/// Contracts each community into one node; intra-community weight becomes
/// a self loop.
fn aggregate(
    adjacency: &[Vec<(usize, f64)>],
    self_weight: &[f64],
    communities: &[usize],
    count: usize,
) -> (Vec<Vec<(usize, f64)>>, Vec<f64>) {
    let mut next_self = vec![0.0; count];
    let mut maps: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); count];
    for (node, neighbors) in adjacency.iter().enumerate() {
        let home = communities[node];
        next_self[home] += self_weight[node];
        for &(neighbor, weight) in neighbors {
            if neighbor < node {
                continue; // each undirected edge once
            }
            let other = communities[neighbor];
            if home == other {
                next_self[home] += weight;
            } else {
                *maps[home].entry(other).or_insert(0.0) += weight;
                *maps[other].entry(home).or_insert(0.0) += weight;
            }
        }
    }
    let next_adjacency = maps
        .into_iter()
        .map(|map| map.into_iter().collect())
        .collect();
    (next_adjacency, next_self)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(labels: &[&str]) -> (AttrGraph, Vec<NodeIndex>) {
        let mut graph = AttrGraph::default();
        let nodes: Vec<_> = labels.iter().map(|l| graph.add_node(l.to_string())).collect();
        for pair in nodes.windows(2) {
            graph.add_edge(pair[0], pair[1], 1);
        }
        (graph, nodes)
    }

    #[test]
    fn bfs_respects_the_cutoff() {
        let (graph, nodes) = path_graph(&["a", "b", "c", "d"]);
        let algorithms = PetgraphAlgorithms::default();
        let lengths = algorithms.path_lengths_within(&graph, nodes[0], 2);
        assert_eq!(lengths.get(&nodes[0]), Some(&0));
        assert_eq!(lengths.get(&nodes[1]), Some(&1));
        assert_eq!(lengths.get(&nodes[2]), Some(&2));
        assert_eq!(lengths.get(&nodes[3]), None);
    }

    #[test]
    fn components_are_grouped_by_reachability() {
        let mut graph: AttrGraph = AttrGraph::default();
        let a = graph.add_node("a".into());
        let b = graph.add_node("b".into());
        let c = graph.add_node("c".into());
        let lone = graph.add_node("lone".into());
        graph.add_edge(a, b, 1);
        graph.add_edge(b, c, 1);
        let components = PetgraphAlgorithms::default().connected_components(&graph);
        assert_eq!(components.len(), 2);
        let sizes: Vec<_> = components.iter().map(Vec::len).collect();
        assert!(sizes.contains(&3) && sizes.contains(&1));
        assert!(components.iter().any(|c| c == &vec![lone]));
    }

    #[test]
    fn louvain_splits_two_cliques_joined_by_a_weak_edge() {
        let mut graph: AttrGraph = AttrGraph::default();
        let nodes: Vec<_> = (0..8).map(|i| graph.add_node(format!("n{i}"))).collect();
        for clique in [&nodes[..4], &nodes[4..]] {
            for i in 0..clique.len() {
                for j in i + 1..clique.len() {
                    graph.add_edge(clique[i], clique[j], 5);
                }
            }
        }
        graph.add_edge(nodes[3], nodes[4], 1);

        let partition = PetgraphAlgorithms::default()
            .community_partition(&graph)
            .unwrap();
        assert_eq!(partition.len(), 2);
        let mut first: Vec<_> = partition[0].iter().map(|n| n.index()).collect();
        first.sort_unstable();
        assert!(first == vec![0, 1, 2, 3] || first == vec![4, 5, 6, 7]);
    }

    #[test]
    fn equal_sized_communities_order_by_smallest_label() {
        let mut graph: AttrGraph = AttrGraph::default();
        let z = graph.add_node("z".into());
        let y = graph.add_node("y".into());
        let a = graph.add_node("a".into());
        let b = graph.add_node("b".into());
        graph.add_edge(z, y, 3);
        graph.add_edge(a, b, 3);
        let partition = PetgraphAlgorithms::default()
            .community_partition(&graph)
            .unwrap();
        assert_eq!(partition.len(), 2);
        // "a" beats "y" even though its nodes were added later
        let first: Vec<_> = partition[0].iter().map(|&n| graph[n].clone()).collect();
        assert!(first.contains(&"a".to_string()));
    }

    #[test]
    fn community_detection_rejects_an_empty_graph() {
        let graph: AttrGraph = AttrGraph::default();
        assert!(matches!(
            PetgraphAlgorithms::default().community_partition(&graph),
            Err(GraphError::EmptyGraph(_))
        ));
    }
}
