//! Batch driver: load the dataset, clean and bin it, build the attribute
//! graph, and write every figure to `figures/`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use suicide_risk_graph::{
    analytics, community_colormap, export, BorderTable, GraphBuilder, TableConfig, TabularStore,
};

const RATE_BOUNDARIES: [f64; 7] = [0.0, 25.0, 75.0, 100.0, 125.0, 150.0, 300.0];
const COMPOSITE: &str = "country, age, sex";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let dataset = args
        .next()
        .unwrap_or_else(|| "datasets/suicide_rates_by_category.csv".to_string());
    let borders_path = args.next();

    let mut store = TabularStore::load(&dataset, TableConfig::suicide_rates())
        .with_context(|| format!("loading dataset {dataset}"))?;
    store.overview();

    let dropped = store.drop_rows_where("generation", |g| g == "G.I. Generation")?;
    info!(dropped, "removed G.I. Generation rows");
    store.bin_column("suicides_per_100k", &RATE_BOUNDARIES)?;
    let bins = store.distinct_values("suicides_per_100k_bins")?;
    info!(?bins, "binned suicide rates");

    let builder = GraphBuilder::new(
        &store,
        &[&["country", "age", "sex"], &["suicides_per_100k_bins"]],
    )?;
    fs::create_dir_all("figures")?;
    export::write_gexf(builder.graph(), "figures/suicide_risk_graph.gexf")?;

    let largest = builder.extract_largest_component(builder.graph())?;
    info!(
        nodes = largest.node_count(),
        edges = largest.edge_count(),
        "largest connected component"
    );
    info!(
        average_degree = analytics::average_degree(&largest)?,
        degree_assortativity = analytics::degree_assortativity(&largest)?,
        "largest component statistics"
    );
    let colors = builder.colormap_by_node_type(&largest);
    write_figure(&largest, &colors, "largest_component")?;

    let partition = builder.detect_communities(&largest)?;
    info!(communities = partition.len(), "community detection finished");
    let colors = community_colormap(&largest, &partition);
    write_figure(&largest, &colors, "communities")?;

    let projection = builder.extract_projection_for(COMPOSITE)?;
    let projection = builder.extract_largest_component(&projection)?;
    let colors = builder.colormap_by_node_type(&projection);
    write_figure(&projection, &colors, "country_age_sex_projection")?;

    let bipartite = builder.extract_bipartite("age", "suicides_per_100k_bins")?;
    let colors = builder.colormap_by_node_type(&bipartite);
    export::write_dot(&bipartite, &colors, "figures/age_risk_bipartite.dot")?;

    if let Some(path) = borders_path {
        let borders = BorderTable::load(&path).with_context(|| format!("loading borders {path}"))?;
        let adjacent = builder.extract_adjacent_projection(COMPOSITE, &borders)?;
        let colors = builder.colormap_by_node_type(&adjacent);
        write_figure(&adjacent, &colors, "adjacent_risk_projection")?;
    }

    Ok(())
}

/// Writes `figures/<name>.dot` and, when Graphviz is available, renders
/// `figures/<name>.png` next to it.
fn write_figure(
    graph: &suicide_risk_graph::AttrGraph,
    colors: &[&'static str],
    name: &str,
) -> Result<()> {
    let dot_path = Path::new("figures").join(format!("{name}.dot"));
    let png_path = Path::new("figures").join(format!("{name}.png"));
    export::write_dot(graph, colors, &dot_path)?;
    if let Err(error) = export::render_dot(&dot_path, &png_path) {
        warn!(%error, figure = name, "skipping PNG render; is Graphviz installed?");
    }
    Ok(())
}
