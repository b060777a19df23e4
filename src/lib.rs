//! Graph analysis of the suicide-rates-by-category dataset.
//!
//! A tabular store loads the delimited dataset, derives categorical
//! groupings (rate bins, cleaned generations), and answers distinct-value
//! and co-occurrence queries. A graph builder turns those answers into a
//! weighted attribute-relationship graph and offers bipartite extraction,
//! two-hop projections, an adjacency-bin projection over a geographic
//! border table, largest-component extraction, and community detection.
//! Everything runs as a single-threaded batch; nothing happens as a side
//! effect of loading a definition.

pub mod algo;
pub mod analytics;
pub mod borders;
pub mod error;
pub mod export;
pub mod graph;
pub mod table;

pub use algo::{AttrGraph, GraphAlgorithms, PetgraphAlgorithms};
pub use analytics::{average_degree, degree_assortativity};
pub use borders::BorderTable;
pub use error::{GraphError, Result};
pub use graph::{community_colormap, GraphBuilder, DEFAULT_COLOR, PALETTE};
pub use table::{TableConfig, TabularStore};
