//! Geographic border adjacency, loaded from a second delimited file.
//!
//! Only the adjacency-bin projection consumes this table. A country with
//! no entry simply gains no adjacency edges; that gap is deliberate and
//! non-fatal.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Country name -> set of neighboring country names.
#[derive(Debug, Default)]
pub struct BorderTable {
    neighbors: HashMap<String, HashSet<String>>,
}

impl BorderTable {
    /// Loads a `country_code,country_name,border_code,border_name` file.
    /// Rows with an empty `border_name` mean "no borders" and are skipped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut neighbors: HashMap<String, HashSet<String>> = HashMap::new();
        for record in rdr.records() {
            let record = record?;
            let country = record.get(1).unwrap_or_default().trim();
            let border = record.get(3).unwrap_or_default().trim();
            if country.is_empty() || border.is_empty() {
                continue;
            }
            neighbors
                .entry(country.to_string())
                .or_default()
                .insert(border.to_string());
        }
        debug!(countries = neighbors.len(), "border table loaded");
        Ok(BorderTable { neighbors })
    }

    pub fn neighbors(&self, country: &str) -> Option<&HashSet<String>> {
        self.neighbors.get(country)
    }

    /// True when either side lists the other as a neighbor.
    pub fn are_neighbors(&self, a: &str, b: &str) -> bool {
        self.neighbors.get(a).is_some_and(|set| set.contains(b))
            || self.neighbors.get(b).is_some_and(|set| set.contains(a))
    }

    pub fn contains(&self, country: &str) -> bool {
        self.neighbors.contains_key(country)
    }
}
