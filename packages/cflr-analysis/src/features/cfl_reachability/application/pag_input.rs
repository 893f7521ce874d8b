//! Pointer assignment graph ingestion (JSON)
//!
//! The upstream IR frontend is an external collaborator; the CLI accepts
//! its output as a JSON document of pointer statements instead. Each
//! statement list holds `[x, y]` name pairs:
//!
//! ```json
//! {
//!   "address_of": [["p", "a"]],
//!   "copy": [["q", "p"]],
//!   "store": [["p", "x"]],
//!   "load": [["y", "p"]]
//! }
//! ```
//!
//! - `address_of`: `[pointer, object]` for `pointer = &object`
//! - `copy`: `[dst, src]` for `dst = src`
//! - `store`: `[pointer, value]` for `*pointer = value`
//! - `load`: `[dst, pointer]` for `dst = *pointer`
//!
//! Inverse discipline (AddrBar, CopyBar) is handled by the analyzer
//! facade, so a PAG file never lists bar edges.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

use super::analyzer::PointsToAnalyzer;

/// Pointer assignment graph as statement lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PagInput {
    /// `pointer = &object`
    #[serde(default)]
    pub address_of: Vec<(String, String)>,

    /// `dst = src`
    #[serde(default)]
    pub copy: Vec<(String, String)>,

    /// `*pointer = value`
    #[serde(default)]
    pub store: Vec<(String, String)>,

    /// `dst = *pointer`
    #[serde(default)]
    pub load: Vec<(String, String)>,
}

impl PagInput {
    /// Parse from a JSON string
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Total statements across all lists
    pub fn statement_count(&self) -> usize {
        self.address_of.len() + self.copy.len() + self.store.len() + self.load.len()
    }

    /// Feed every statement into an analyzer
    pub fn apply_to(&self, analyzer: &mut PointsToAnalyzer) {
        for (pointer, object) in &self.address_of {
            analyzer.add_address_of(pointer, object);
        }
        for (dst, src) in &self.copy {
            analyzer.add_copy(dst, src);
        }
        for (pointer, value) in &self.store {
            analyzer.add_store(pointer, value);
        }
        for (dst, pointer) in &self.load {
            analyzer.add_load(dst, pointer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_apply() {
        let input = PagInput::from_json(
            r#"{
                "address_of": [["p", "a"]],
                "copy": [["q", "p"]]
            }"#,
        )
        .unwrap();

        assert_eq!(input.statement_count(), 2);

        let mut analyzer = PointsToAnalyzer::default();
        input.apply_to(&mut analyzer);
        analyzer.solve();

        assert_eq!(analyzer.points_to_names("q"), vec!["a"]);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let input = PagInput::from_json(r#"{"load": [["y", "p"]]}"#).unwrap();
        assert!(input.address_of.is_empty());
        assert_eq!(input.statement_count(), 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(PagInput::from_json("{not json").is_err());
    }
}
