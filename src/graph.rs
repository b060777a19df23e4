//! Attribute-relationship graph built over a [`TabularStore`].
//!
//! Nodes are distinct attribute values or composite tuples of several
//! columns ("Albania, 15-24 years, male"); edges carry the number of rows
//! exhibiting that cross-grouping co-occurrence. The builder constructs
//! the graph once and from then on only reads or filters it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, EdgeType, Undirected};
use tracing::{debug, info};

use crate::algo::{AttrGraph, GraphAlgorithms, PetgraphAlgorithms};
use crate::borders::BorderTable;
use crate::error::{GraphError, Result};
use crate::table::TabularStore;

/// Display palette shared by the node-type and community colormaps.
pub const PALETTE: [&str; 7] = [
    "yellow", "magenta", "green", "cyan", "blue", "red", "black",
];

/// Tag for nodes outside every registered grouping.
pub const DEFAULT_COLOR: &str = "gray";

/// One registered node-type grouping: an ordered list of categories
/// merged into a composite node type, plus the synthesized member set.
#[derive(Debug)]
struct Grouping {
    name: String,
    categories: Vec<String>,
    members: BTreeSet<String>,
}

/// Builds and queries the attribute-relationship graph.
///
/// Holds a read-only reference to the store; the graph itself is owned
/// exclusively by the builder. The algorithm capability `A` is injectable
/// so extraction logic can be exercised against a stub.
pub struct GraphBuilder<'a, Ty: EdgeType = Undirected, A: GraphAlgorithms = PetgraphAlgorithms> {
    store: &'a TabularStore,
    graph: AttrGraph<Ty>,
    node_index: HashMap<String, NodeIndex>,
    groupings: Vec<Grouping>,
    algorithms: A,
}

impl<'a> GraphBuilder<'a, Undirected, PetgraphAlgorithms> {
    /// Undirected builder with the default petgraph-backed algorithms.
    pub fn new(store: &'a TabularStore, groupings: &[&[&str]]) -> Result<Self> {
        Self::with_algorithms(store, groupings, PetgraphAlgorithms::default())
    }
}

impl<'a> GraphBuilder<'a, Directed, PetgraphAlgorithms> {
    /// Directed variant; row edges point from earlier to later groupings.
    pub fn new_directed(store: &'a TabularStore, groupings: &[&[&str]]) -> Result<Self> {
        Self::with_algorithms(store, groupings, PetgraphAlgorithms::default())
    }
}

impl<'a, Ty: EdgeType, A: GraphAlgorithms> GraphBuilder<'a, Ty, A> {
    pub fn with_algorithms(
        store: &'a TabularStore,
        groupings: &[&[&str]],
        algorithms: A,
    ) -> Result<Self> {
        let mut builder = GraphBuilder {
            store,
            graph: AttrGraph::default(),
            node_index: HashMap::new(),
            groupings: Vec::new(),
            algorithms,
        };
        for categories in groupings {
            builder.synthesize_grouping(categories)?;
        }
        builder.synthesize_edges()?;
        info!(
            nodes = builder.graph.node_count(),
            edges = builder.graph.edge_count(),
            "attribute graph built"
        );
        Ok(builder)
    }

    /// Registers one grouping: Cartesian product of the categories'
    /// distinct-value sets, joined with `", "`, added as nodes before any
    /// edge exists.
    fn synthesize_grouping(&mut self, categories: &[&str]) -> Result<()> {
        if categories.is_empty() {
            return Err(GraphError::InvalidCategory("empty node-type grouping".into()));
        }
        let mut combos: Vec<String> = Vec::new();
        for (i, category) in categories.iter().enumerate() {
            let values = self.store.distinct_values(category)?;
            if i == 0 {
                combos = values.into_iter().collect();
            } else {
                let mut next = Vec::with_capacity(combos.len() * values.len().max(1));
                for prefix in &combos {
                    for value in &values {
                        next.push(format!("{prefix}, {value}"));
                    }
                }
                combos = next;
            }
        }
        let members: BTreeSet<String> = combos.into_iter().collect();
        for label in &members {
            self.ensure_node(label);
        }
        self.groupings.push(Grouping {
            name: categories.join(", "),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            members,
        });
        Ok(())
    }

    /// Per row: one composite label per grouping from the row's actual
    /// cells; every cross-grouping label pair gains weight 1. A grouping
    /// with a missing cell contributes no label for that row.
    fn synthesize_edges(&mut self) -> Result<()> {
        let grouping_categories: Vec<Vec<String>> =
            self.groupings.iter().map(|g| g.categories.clone()).collect();
        for row in 0..self.store.len() {
            let mut labels: Vec<Option<String>> = Vec::with_capacity(grouping_categories.len());
            for categories in &grouping_categories {
                let mut parts = Vec::with_capacity(categories.len());
                let mut missing = false;
                for category in categories {
                    let value = self.store.value(row, category)?;
                    if value.is_empty() {
                        missing = true;
                        break;
                    }
                    parts.push(value.to_string());
                }
                labels.push((!missing).then(|| parts.join(", ")));
            }
            for i in 0..labels.len() {
                for j in i + 1..labels.len() {
                    let (Some(a), Some(b)) = (&labels[i], &labels[j]) else {
                        continue;
                    };
                    if a == b {
                        continue;
                    }
                    let a_ix = self.ensure_node(a);
                    let b_ix = self.ensure_node(b);
                    match self.graph.find_edge(a_ix, b_ix) {
                        Some(edge) => self.graph[edge] += 1,
                        None => {
                            self.graph.add_edge(a_ix, b_ix, 1);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn ensure_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&ix) = self.node_index.get(label) {
            return ix;
        }
        let ix = self.graph.add_node(label.to_string());
        self.node_index.insert(label.to_string(), ix);
        ix
    }

    /// The full attribute graph.
    pub fn graph(&self) -> &AttrGraph<Ty> {
        &self.graph
    }

    /// Registered grouping names, in registration order.
    pub fn grouping_names(&self) -> Vec<&str> {
        self.groupings.iter().map(|g| g.name.as_str()).collect()
    }

    /// Synthesized member labels of one grouping.
    pub fn members(&self, name: &str) -> Result<&BTreeSet<String>> {
        self.find_grouping(name).map(|g| &g.members)
    }

    fn find_grouping(&self, name: &str) -> Result<&Grouping> {
        self.groupings
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| GraphError::UnknownGrouping(name.to_string()))
    }

    /// Unweighted graph of direct co-occurrence between two raw
    /// categories. Only nodes with at least one incident edge appear.
    pub fn extract_bipartite(&self, category_a: &str, category_b: &str) -> Result<AttrGraph<Ty>> {
        let pairs = self.store.co_occurring_pairs(category_a, category_b)?;
        let mut graph = AttrGraph::<Ty>::default();
        let mut index: HashMap<String, NodeIndex> = HashMap::new();
        for (a, b) in pairs {
            let a_ix = *index.entry(a.clone()).or_insert_with(|| graph.add_node(a.clone()));
            let b_ix = *index.entry(b.clone()).or_insert_with(|| graph.add_node(b.clone()));
            if graph.find_edge(a_ix, b_ix).is_none() {
                graph.add_edge(a_ix, b_ix, 1);
            }
        }
        Ok(graph)
    }

    /// Two-hop projection over a single grouping.
    pub fn extract_projection_for(&self, name: &str) -> Result<AttrGraph<Ty>> {
        self.extract_projection(&[name])
    }

    /// Projects out the intermediate node type: nodes of the named
    /// groupings are connected iff their true distance in the full graph
    /// is exactly 2, so 1-hop neighbors never gain a projected edge.
    pub fn extract_projection(&self, names: &[&str]) -> Result<AttrGraph<Ty>> {
        let mut node_set: BTreeSet<&String> = BTreeSet::new();
        for name in names {
            node_set.extend(self.find_grouping(name)?.members.iter());
        }
        let mut edges: BTreeSet<(String, String)> = BTreeSet::new();
        for label in &node_set {
            let Some(&source) = self.node_index.get(label.as_str()) else {
                continue;
            };
            let lengths = self.algorithms.path_lengths_within(&self.graph, source, 2);
            for (target, distance) in lengths {
                if distance != 2 {
                    continue;
                }
                let target_label = &self.graph[target];
                if node_set.contains(target_label) {
                    edges.insert(canonical_pair(label.as_str(), target_label.as_str()));
                }
            }
        }
        Ok(Self::graph_from_edges(edges))
    }

    /// Adjacency-bin projection over one composite grouping whose labels
    /// read `"<country>, <age-bin>[, ...]"`.
    ///
    /// Bins are ordered by the age-bin's leading integer. A node connects
    /// to nodes of its own bin and of the immediately adjacent bin when
    /// the two countries border each other. A country absent from the
    /// border table gains no edges at all; that gap is deliberate.
    pub fn extract_adjacent_projection(
        &self,
        name: &str,
        borders: &BorderTable,
    ) -> Result<AttrGraph<Ty>> {
        let grouping = self.find_grouping(name)?;
        let mut bins: BTreeMap<(u64, String), Vec<(String, String)>> = BTreeMap::new();
        let mut unresolved: BTreeSet<&str> = BTreeSet::new();
        for label in &grouping.members {
            let mut parts = label.splitn(3, ", ");
            let (Some(country), Some(age)) = (parts.next(), parts.next()) else {
                continue;
            };
            if !borders.contains(country) {
                unresolved.insert(country);
            }
            bins.entry((age_lower_bound(age), age.to_string()))
                .or_default()
                .push((country.to_string(), label.clone()));
        }
        for country in unresolved {
            debug!(country, "no border data; nodes keep no adjacency edges");
        }

        let ordered: Vec<&Vec<(String, String)>> = bins.values().collect();
        let mut edges: BTreeSet<(String, String)> = BTreeSet::new();
        for (i, bin) in ordered.iter().enumerate() {
            for (p, (country_a, label_a)) in bin.iter().enumerate() {
                for (country_b, label_b) in bin.iter().skip(p + 1) {
                    if borders.are_neighbors(country_a, country_b) {
                        edges.insert(canonical_pair(label_a, label_b));
                    }
                }
            }
            if let Some(next) = ordered.get(i + 1) {
                for (country_a, label_a) in bin.iter() {
                    for (country_b, label_b) in next.iter() {
                        if borders.are_neighbors(country_a, country_b) {
                            edges.insert(canonical_pair(label_a, label_b));
                        }
                    }
                }
            }
        }
        Ok(Self::graph_from_edges(edges))
    }

    /// Induced subgraph over the largest connected component, weights
    /// preserved. Ties go to the component holding the lexicographically
    /// smallest node label.
    pub fn extract_largest_component(&self, graph: &AttrGraph<Ty>) -> Result<AttrGraph<Ty>> {
        if graph.node_count() == 0 {
            return Err(GraphError::EmptyGraph("largest component"));
        }
        let components = self.algorithms.connected_components(graph);
        let largest = components
            .iter()
            .max_by(|a, b| {
                a.len()
                    .cmp(&b.len())
                    .then_with(|| min_label(graph, b.as_slice()).cmp(min_label(graph, a.as_slice())))
            })
            .expect("non-empty graph has at least one component");

        let mut sub = AttrGraph::<Ty>::default();
        let mut mapping: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        for &node in largest {
            mapping.insert(node, sub.add_node(graph[node].clone()));
        }
        for edge in graph.edge_references() {
            if let (Some(&s), Some(&t)) = (mapping.get(&edge.source()), mapping.get(&edge.target()))
            {
                sub.add_edge(s, t, *edge.weight());
            }
        }
        Ok(sub)
    }

    /// One display color per node, aligned with `graph.node_indices()`:
    /// the first registered grouping containing the node's label wins;
    /// unmatched nodes get [`DEFAULT_COLOR`].
    pub fn colormap_by_node_type(&self, graph: &AttrGraph<Ty>) -> Vec<&'static str> {
        graph
            .node_indices()
            .map(|node| {
                let label = &graph[node];
                self.groupings
                    .iter()
                    .position(|g| g.members.contains(label))
                    .map(|i| PALETTE[i % PALETTE.len()])
                    .unwrap_or(DEFAULT_COLOR)
            })
            .collect()
    }

    /// Disjoint community partition of `graph`, via the algorithm
    /// capability. Largest community first.
    pub fn detect_communities(&self, graph: &AttrGraph<Ty>) -> Result<Vec<Vec<NodeIndex>>> {
        self.algorithms.community_partition(graph)
    }

    fn graph_from_edges(edges: BTreeSet<(String, String)>) -> AttrGraph<Ty> {
        let mut graph = AttrGraph::<Ty>::default();
        let mut index: HashMap<String, NodeIndex> = HashMap::new();
        for (a, b) in edges {
            let a_ix = *index.entry(a.clone()).or_insert_with(|| graph.add_node(a.clone()));
            let b_ix = *index.entry(b.clone()).or_insert_with(|| graph.add_node(b.clone()));
            if graph.find_edge(a_ix, b_ix).is_none() {
                graph.add_edge(a_ix, b_ix, 1);
            }
        }
        graph
    }
}

/// One display color per node from a community partition, cycling the
/// palette when partitions outnumber it.
pub fn community_colormap<Ty: EdgeType>(
    graph: &AttrGraph<Ty>,
    partition: &[Vec<NodeIndex>],
) -> Vec<&'static str> {
    let mut assigned: HashMap<NodeIndex, usize> = HashMap::new();
    for (i, members) in partition.iter().enumerate() {
        for &node in members {
            assigned.insert(node, i);
        }
    }
    graph
        .node_indices()
        .map(|node| {
            assigned
                .get(&node)
                .map(|&i| PALETTE[i % PALETTE.len()])
                .unwrap_or(DEFAULT_COLOR)
        })
        .collect()
}

fn canonical_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

fn min_label<'g, Ty: EdgeType>(graph: &'g AttrGraph<Ty>, component: &[NodeIndex]) -> &'g String {
    component
        .iter()
        .map(|&node| &graph[node])
        .min()
        .expect("components are never empty")
}

fn age_lower_bound(age: &str) -> u64 {
    let digits: String = age.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableConfig;
    use std::collections::HashMap as StdHashMap;

    fn store(csv_text: &str) -> TabularStore {
        TabularStore::from_reader(csv_text.as_bytes(), TableConfig::default()).unwrap()
    }

    fn node_by_label<Ty: EdgeType>(graph: &AttrGraph<Ty>, label: &str) -> NodeIndex {
        graph
            .node_indices()
            .find(|&n| graph[n] == label)
            .unwrap_or_else(|| panic!("no node '{label}'"))
    }

    fn edge_weight<Ty: EdgeType>(graph: &AttrGraph<Ty>, a: &str, b: &str) -> Option<u32> {
        let a = node_by_label(graph, a);
        let b = node_by_label(graph, b);
        graph.find_edge(a, b).map(|e| graph[e])
    }

    #[test]
    fn builds_the_worked_example() {
        let store = store("country,age,sex\nA,young,m\nA,young,f\nB,old,m\n");
        let builder = GraphBuilder::new(&store, &[&["country"], &["age"]]).unwrap();
        let graph = builder.graph();

        let labels: BTreeSet<_> = graph.node_indices().map(|n| graph[n].clone()).collect();
        assert_eq!(
            labels,
            BTreeSet::from([
                "A".to_string(),
                "B".to_string(),
                "young".to_string(),
                "old".to_string()
            ])
        );
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(edge_weight(graph, "A", "young"), Some(2));
        assert_eq!(edge_weight(graph, "B", "old"), Some(1));
    }

    #[test]
    fn composite_grouping_synthesizes_the_cartesian_product() {
        let store = store("country,age,sex\nA,young,m\nB,old,f\n");
        let builder = GraphBuilder::new(
            &store,
            &[&["country", "age", "sex"]],
        )
        .unwrap();
        let members = builder.members("country, age, sex").unwrap();
        // 2 countries x 2 ages x 2 sexes, rows only cover 2 combinations
        assert_eq!(members.len(), 8);
        assert!(members.contains("A, old, f"));
        // unused combinations exist as isolated nodes
        assert_eq!(builder.graph().node_count(), 8);
        assert_eq!(builder.graph().edge_count(), 0);
    }

    #[test]
    fn rows_with_a_missing_cell_contribute_no_edge() {
        let store = store("country,bin\nA,\nB,0-25\n");
        let builder = GraphBuilder::new(&store, &[&["country"], &["bin"]]).unwrap();
        let graph = builder.graph();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(edge_weight(graph, "B", "0-25"), Some(1));
    }

    #[test]
    fn directed_builder_orients_edges_by_grouping_order() {
        let store = store("country,age\nA,young\nA,young\n");
        let builder = GraphBuilder::new_directed(&store, &[&["country"], &["age"]]).unwrap();
        let graph = builder.graph();
        assert!(graph.is_directed());
        assert_eq!(edge_weight(graph, "A", "young"), Some(2));
        let young = node_by_label(graph, "young");
        let a = node_by_label(graph, "A");
        assert!(graph.find_edge(young, a).is_none());
    }

    #[test]
    fn bipartite_extraction_keeps_only_incident_nodes() {
        let store = store("age,bin\nyoung,0-25\nold,25-75\nyoung,25-75\n");
        let builder = GraphBuilder::new(&store, &[&["age"], &["bin"]]).unwrap();
        let bipartite = builder.extract_bipartite("age", "bin").unwrap();
        assert_eq!(bipartite.node_count(), 4);
        assert_eq!(bipartite.edge_count(), 3);
        assert_eq!(edge_weight(&bipartite, "young", "25-75"), Some(1));
    }

    #[test]
    fn projection_connects_only_true_two_hop_pairs() {
        // A - young - B in the full graph; A-B is the only 2-hop pair
        let store = store("country,age\nA,young\nB,young\n");
        let builder = GraphBuilder::new(&store, &[&["country"], &["age"]]).unwrap();
        let projection = builder.extract_projection_for("country").unwrap();
        assert_eq!(projection.node_count(), 2);
        assert_eq!(projection.edge_count(), 1);
        assert!(edge_weight(&projection, "A", "B").is_some());

        // with both groupings selected, 1-hop pairs still never qualify
        let both = builder.extract_projection(&["country", "age"]).unwrap();
        assert_eq!(both.edge_count(), 1);
        assert!(edge_weight(&both, "A", "B").is_some());
    }

    #[test]
    fn unknown_grouping_is_rejected() {
        let store = store("country,age\nA,young\n");
        let builder = GraphBuilder::new(&store, &[&["country"]]).unwrap();
        assert!(matches!(
            builder.extract_projection_for("nope"),
            Err(GraphError::UnknownGrouping(_))
        ));
    }

    #[test]
    fn largest_component_is_maximal_and_ties_break_on_smallest_label() {
        let store = store("country,age\nA,young\n");
        let builder = GraphBuilder::new(&store, &[&["country"]]).unwrap();

        let mut graph = AttrGraph::default();
        let a = graph.add_node("a".into());
        let b = graph.add_node("b".into());
        let c = graph.add_node("c".into());
        let x = graph.add_node("x".into());
        let y = graph.add_node("y".into());
        graph.add_edge(a, b, 1);
        graph.add_edge(b, c, 2);
        graph.add_edge(x, y, 1);
        let largest = builder.extract_largest_component(&graph).unwrap();
        assert_eq!(largest.node_count(), 3);
        assert_eq!(edge_weight(&largest, "b", "c"), Some(2));

        // equal-sized components: the one holding "a" wins
        let mut tied = AttrGraph::default();
        let a = tied.add_node("a".into());
        let z = tied.add_node("z".into());
        let m = tied.add_node("m".into());
        let n = tied.add_node("n".into());
        tied.add_edge(m, n, 1);
        tied.add_edge(a, z, 1);
        let winner = builder.extract_largest_component(&tied).unwrap();
        let labels: BTreeSet<_> = winner.node_indices().map(|i| winner[i].clone()).collect();
        assert_eq!(labels, BTreeSet::from(["a".to_string(), "z".to_string()]));
    }

    #[test]
    fn largest_component_of_an_empty_graph_fails() {
        let store = store("country,age\n");
        let builder = GraphBuilder::new(&store, &[&["country"]]).unwrap();
        assert!(matches!(
            builder.extract_largest_component(builder.graph()),
            Err(GraphError::EmptyGraph(_))
        ));
    }

    #[test]
    fn adjacent_projection_respects_bins_and_borders() {
        let store = store(
            "country,age,sex\n\
             Albania,15-24,male\n\
             Greece,25-34,male\n\
             Iceland,15-24,male\n",
        );
        let builder = GraphBuilder::new(&store, &[&["country", "age", "sex"]]).unwrap();
        let borders = BorderTable::from_reader(
            "country_code,country_name,border_code,border_name\n\
             AL,Albania,GR,Greece\n\
             IS,Iceland,,\n"
                .as_bytes(),
        )
        .unwrap();
        let projection = builder
            .extract_adjacent_projection("country, age, sex", &borders)
            .unwrap();

        // same bin and adjacent bin, bordering countries only
        assert!(edge_weight(&projection, "Albania, 15-24, male", "Greece, 15-24, male").is_some());
        assert!(edge_weight(&projection, "Albania, 15-24, male", "Greece, 25-34, male").is_some());
        // nodes of a country without border data never appear
        assert!(projection
            .node_indices()
            .all(|n| !projection[n].starts_with("Iceland")));
        // a country does not border itself
        let albania_pairs = projection
            .node_indices()
            .filter(|&n| projection[n].starts_with("Albania"))
            .flat_map(|n| projection.neighbors(n).map(move |m| (n, m)))
            .filter(|&(_, m)| projection[m].starts_with("Albania"))
            .count();
        assert_eq!(albania_pairs, 0);
    }

    #[test]
    fn node_type_colormap_uses_registration_order() {
        let store = store("country,age\nA,young\nB,old\n");
        let builder = GraphBuilder::new(&store, &[&["country"], &["age"]]).unwrap();
        let graph = builder.graph();
        let colors = builder.colormap_by_node_type(graph);
        let by_label: StdHashMap<&str, &str> = graph
            .node_indices()
            .map(|n| (graph[n].as_str(), colors[n.index()]))
            .collect();
        assert_eq!(by_label["A"], PALETTE[0]);
        assert_eq!(by_label["young"], PALETTE[1]);

        let mut foreign = AttrGraph::default();
        foreign.add_node("unregistered".into());
        assert_eq!(builder.colormap_by_node_type(&foreign), vec![DEFAULT_COLOR]);
    }

    /// Stub capability: every node is its own community, paths go nowhere.
    struct SingletonCommunities;

    impl GraphAlgorithms for SingletonCommunities {
        fn path_lengths_within<Ty: EdgeType>(
            &self,
            _graph: &AttrGraph<Ty>,
            source: NodeIndex,
            _cutoff: usize,
        ) -> StdHashMap<NodeIndex, usize> {
            StdHashMap::from([(source, 0)])
        }

        fn connected_components<Ty: EdgeType>(
            &self,
            graph: &AttrGraph<Ty>,
        ) -> Vec<Vec<NodeIndex>> {
            graph.node_indices().map(|n| vec![n]).collect()
        }

        fn community_partition<Ty: EdgeType>(
            &self,
            graph: &AttrGraph<Ty>,
        ) -> Result<Vec<Vec<NodeIndex>>> {
            if graph.node_count() == 0 {
                return Err(GraphError::EmptyGraph("community detection"));
            }
            Ok(graph.node_indices().map(|n| vec![n]).collect())
        }
    }

    #[test]
    fn algorithm_capability_is_injectable() {
        let store = store(
            "country,age\nA,young\nB,young\nC,young\nD,young\n\
             E,young\nF,young\nG,young\nH,old\n",
        );
        let builder = GraphBuilder::<Undirected, SingletonCommunities>::with_algorithms(
            &store,
            &[&["country"], &["age"]],
            SingletonCommunities,
        )
        .unwrap();
        let graph = builder.graph();
        let partition = builder.detect_communities(graph).unwrap();
        assert_eq!(partition.len(), graph.node_count());

        // the community palette cycles past its end
        let colors = community_colormap(graph, &partition);
        assert_eq!(colors[0], PALETTE[0]);
        assert_eq!(colors[PALETTE.len()], PALETTE[0]);
        assert_eq!(colors[1], PALETTE[1]);
    }
}
