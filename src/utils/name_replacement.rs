//! Bone Name Replacement Utilities
use crate::types::*;
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Read Bone Name Table from CSV
pub fn read_csv(path: &str) -> Result<HashMap<String, String>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to read name table {}", path))?;
    read_table(reader).with_context(|| format!("Failed to parse name table {}", path))
}

fn read_table<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for result in reader.deserialize() {
        let record: NameTableCell = result?;
        if record.old_name.is_empty() || record.new_name.is_empty() {
            continue;
        }
        map.insert(record.old_name, record.new_name);
    }
    Ok(map)
}

/// Invert a name table so it maps new names back to old ones.
pub fn reverse_table(table: &HashMap<String, String>) -> HashMap<String, String> {
    table.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}
