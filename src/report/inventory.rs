//! Available-data inventory
//!
//! Scans the configured data directories for combined and partial data files.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Result;

use super::overview::DataOrganization;

const COMBINED_SAMPLE: usize = 3;
const SET_ID_SAMPLE: usize = 5;

/// Files found in one data directory; `None` when the directory is missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryScan {
    pub dir: String,
    pub files: Option<Vec<String>>,
}

/// Combined and partial data currently on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataInventory {
    pub combined_template: String,
    pub combined: DirectoryScan,
    pub partial: DirectoryScan,
}

impl DataInventory {
    /// Scan the directories named by `data_org`
    pub fn scan(data_org: &DataOrganization) -> Result<Self> {
        Ok(Self {
            combined_template: data_org.combined_data_template.clone(),
            combined: scan_dir(&data_org.combined_data_dir, "*.txt")?,
            partial: scan_dir(&data_org.partial_data_dir, "*_partial.txt")?,
        })
    }

    /// Distinct set ids among partial files, sorted
    pub fn partial_set_ids(&self) -> BTreeSet<String> {
        self.partial
            .files
            .iter()
            .flatten()
            .filter_map(|name| set_id_of(name))
            .collect()
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        output.push_str("AVAILABLE DATA:\n");
        output.push_str(&format!("{}\n", "=".repeat(50)));

        match &self.combined.files {
            Some(files) => {
                output.push_str(&format!("\nCombined Data ({} datasets):\n", files.len()));
                output.push_str(&format!("   Location: {}/\n", self.combined.dir));
                output.push_str(&format!("   Template: {}\n", self.combined_template));
                for name in sample(files, COMBINED_SAMPLE) {
                    output.push_str(&format!("   {}\n", name));
                }
            }
            None => output.push_str(&format!(
                "\nCombined Data: Directory not found ({})\n",
                self.combined.dir
            )),
        }

        match &self.partial.files {
            Some(files) => {
                let set_ids: Vec<_> = self.partial_set_ids().into_iter().collect();
                output.push_str(&format!(
                    "\nPartial Data ({} data sets with {} parts):\n",
                    set_ids.len(),
                    files.len()
                ));
                output.push_str(&format!("   Location: {}/\n", self.partial.dir));
                if !set_ids.is_empty() {
                    output.push_str("   Available set IDs:\n");
                    for id in sample(&set_ids, SET_ID_SAMPLE) {
                        output.push_str(&format!("     {}\n", id));
                    }
                }
            }
            None => output.push_str(&format!(
                "\nPartial Data: Directory not found ({})\n",
                self.partial.dir
            )),
        }

        output.push_str(&format!("\n{}\n", "=".repeat(50)));
        output
    }
}

fn scan_dir(dir: &str, pattern: &str) -> Result<DirectoryScan> {
    let path = Path::new(dir);
    if !path.is_dir() {
        debug!("Data directory not found: {}", dir);
        return Ok(DirectoryScan {
            dir: dir.to_string(),
            files: None,
        });
    }

    let full_pattern = PathBuf::from(glob::Pattern::escape(dir)).join(pattern);
    let files: Vec<String> = glob::glob(&full_pattern.to_string_lossy())?
        .filter_map(|r| r.ok())
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();

    debug!("Found {} files matching {} in {}", files.len(), pattern, dir);
    Ok(DirectoryScan {
        dir: dir.to_string(),
        files: Some(files),
    })
}

/// Set id of a partial file named `REFL_<set>_<part>_<run>_partial.txt`
fn set_id_of(file_name: &str) -> Option<String> {
    file_name.split('_').nth(1).map(|s| s.to_string())
}

/// First and last `edge` items, with an ellipsis when more than `2 * edge` are elided
fn sample(items: &[String], edge: usize) -> Vec<&str> {
    if items.len() <= 2 * edge {
        return items.iter().map(|s| s.as_str()).collect();
    }
    let mut out: Vec<&str> = items[..edge].iter().map(|s| s.as_str()).collect();
    out.push("...");
    out.extend(items[items.len() - edge..].iter().map(|s| s.as_str()));
    out
}
