//! In-memory tabular store over a delimited dataset.
//!
//! Owns the row table and answers the categorical queries the graph
//! builder is based on: distinct values of a column and pairwise
//! co-occurrence between two columns. The store is immutable except for
//! the explicitly invoked [`TabularStore::drop_rows_where`] and
//! [`TabularStore::bin_column`] mutations.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{GraphError, Result};

/// Column handling supplied at construction time.
///
/// Which columns are comma-joined value sets is configuration, not a
/// hardcoded literal buried in the query path.
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    /// Header alias -> canonical column name, applied after trimming
    /// surrounding whitespace from each header.
    pub renames: Vec<(String, String)>,
    /// Canonical names of columns whose cells encode comma-joined sets.
    pub multi_valued: HashSet<String>,
    /// Canonical names of numeric columns with embedded thousands
    /// separators, coerced to integers at load time.
    pub thousands_grouped: Vec<String>,
}

impl TableConfig {
    /// Preset for the Kaggle suicide-rates dataset.
    pub fn suicide_rates() -> Self {
        let renames = [
            ("suicides/100k pop", "suicides_per_100k"),
            ("HDI for year", "hdi_for_year"),
            ("gdp_for_year ($)", "gdp_for_year"),
            ("gdp_per_capita ($)", "gdp_per_capita"),
            ("country-year", "country_year"),
        ]
        .into_iter()
        .map(|(a, c)| (a.to_string(), c.to_string()))
        .collect();
        TableConfig {
            renames,
            multi_valued: HashSet::new(),
            thousands_grouped: vec!["gdp_for_year".to_string()],
        }
    }
}

/// Row table with named columns. Cells are stored as strings; the empty
/// string is the explicit missing value and is excluded from every
/// categorical query.
#[derive(Debug)]
pub struct TabularStore {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
    multi_valued: HashSet<String>,
}

impl TabularStore {
    /// Loads a delimited file with a header row.
    pub fn load<P: AsRef<Path>>(path: P, config: TableConfig) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file, config)
    }

    /// Builds a store from any reader producing delimited text.
    pub fn from_reader<R: io::Read>(reader: R, config: TableConfig) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let columns: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|header| {
                let trimmed = header.trim();
                config
                    .renames
                    .iter()
                    .find(|(alias, _)| alias == trimmed)
                    .map(|(_, canonical)| canonical.clone())
                    .unwrap_or_else(|| trimmed.to_string())
            })
            .collect();
        let index: HashMap<String, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let mut store = TabularStore {
            columns,
            index,
            rows,
            multi_valued: config.multi_valued,
        };
        for column in &config.thousands_grouped {
            store.coerce_grouped_integer(column)?;
        }
        Ok(store)
    }

    /// Rewrites a thousands-separated numeric column as plain integers.
    fn coerce_grouped_integer(&mut self, column: &str) -> Result<()> {
        let idx = self.category_index(column)?;
        for row in &mut self.rows {
            let cell = &row[idx];
            if cell.is_empty() {
                continue;
            }
            let cleaned: String = cell.chars().filter(|c| *c != ',').collect();
            let value: i64 = cleaned.trim().parse().map_err(|_| GraphError::Parse {
                column: column.to_string(),
                value: cell.clone(),
            })?;
            row[idx] = value.to_string();
        }
        Ok(())
    }

    /// Logs a short summary of the table.
    pub fn overview(&self) {
        info!(rows = self.rows.len(), columns = self.columns.len(), "table loaded");
        debug!(columns = ?self.columns, "column names");
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Resolves a category name to its column index.
    pub fn category_index(&self, category: &str) -> Result<usize> {
        self.index
            .get(category)
            .copied()
            .ok_or_else(|| GraphError::InvalidCategory(category.to_string()))
    }

    /// Raw cell for one row and category.
    pub fn value(&self, row: usize, category: &str) -> Result<&str> {
        let idx = self.category_index(category)?;
        Ok(&self.rows[row][idx])
    }

    /// Removes rows whose cell in `category` matches the predicate.
    /// Mutates the store in place and returns how many rows were dropped.
    pub fn drop_rows_where<F>(&mut self, category: &str, predicate: F) -> Result<usize>
    where
        F: Fn(&str) -> bool,
    {
        let idx = self.category_index(category)?;
        let before = self.rows.len();
        self.rows.retain(|row| !predicate(&row[idx]));
        Ok(before - self.rows.len())
    }

    /// Derives (or replaces) the `<category>_bins` column.
    ///
    /// A value `v` is labeled `"{lo}-{hi}"` for the half-open interval
    /// `[boundaries[i], boundaries[i+1])` containing it; `v` equal to the
    /// lowest boundary falls in the first bin. Values outside
    /// `[boundaries[0], boundaries[last])` get the explicit missing label
    /// (empty cell), never a guessed bin.
    pub fn bin_column(&mut self, category: &str, boundaries: &[f64]) -> Result<()> {
        let idx = self.category_index(category)?;
        if boundaries.len() < 2 || boundaries.windows(2).any(|w| w[0] >= w[1]) {
            return Err(GraphError::InvalidBoundaries);
        }
        let labels: Vec<String> = boundaries
            .windows(2)
            .map(|w| format!("{}-{}", fmt_boundary(w[0]), fmt_boundary(w[1])))
            .collect();

        let mut binned = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let cell = &row[idx];
            if cell.is_empty() {
                binned.push(String::new());
                continue;
            }
            let value: f64 = cell.trim().parse().map_err(|_| GraphError::Parse {
                column: category.to_string(),
                value: cell.clone(),
            })?;
            let label = boundaries
                .windows(2)
                .position(|w| value >= w[0] && value < w[1])
                .map(|i| labels[i].clone())
                .unwrap_or_default();
            binned.push(label);
        }

        let name = format!("{category}_bins");
        match self.index.get(&name) {
            Some(&bin_idx) => {
                for (row, label) in self.rows.iter_mut().zip(binned) {
                    row[bin_idx] = label;
                }
            }
            None => {
                self.index.insert(name.clone(), self.columns.len());
                self.columns.push(name);
                for (row, label) in self.rows.iter_mut().zip(binned) {
                    row.push(label);
                }
            }
        }
        Ok(())
    }

    /// Distinct values of a category across all rows.
    ///
    /// Multi-valued categories contribute the union of their comma-split
    /// tokens; empty cells and tokens are skipped.
    pub fn distinct_values(&self, category: &str) -> Result<BTreeSet<String>> {
        let idx = self.category_index(category)?;
        let mut values = BTreeSet::new();
        for row in &self.rows {
            for token in self.split_cell(category, &row[idx]) {
                values.insert(token);
            }
        }
        Ok(values)
    }

    /// Per-row cross product of two categories' value sets, accumulated
    /// over all rows.
    pub fn co_occurring_pairs(
        &self,
        category_a: &str,
        category_b: &str,
    ) -> Result<BTreeSet<(String, String)>> {
        if category_a == category_b {
            return Err(GraphError::DuplicateCategory(category_a.to_string()));
        }
        let idx_a = self.category_index(category_a)?;
        let idx_b = self.category_index(category_b)?;
        let mut pairs = BTreeSet::new();
        for row in &self.rows {
            let left = self.split_cell(category_a, &row[idx_a]);
            let right = self.split_cell(category_b, &row[idx_b]);
            for a in &left {
                for b in &right {
                    pairs.insert((a.clone(), b.clone()));
                }
            }
        }
        Ok(pairs)
    }

    fn split_cell(&self, category: &str, cell: &str) -> Vec<String> {
        if cell.is_empty() {
            return Vec::new();
        }
        if self.multi_valued.contains(category) {
            cell.split(',')
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect()
        } else {
            vec![cell.to_string()]
        }
    }
}

fn fmt_boundary(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{}", x as i64)
    } else {
        format!("{x}")
    }
}
