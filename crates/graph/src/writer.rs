use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

/// Write the statement script to `<dir>/graph_query_<YYYYMMDD_HHMMSS>.cypher`
/// and return the path. One artifact per invocation; nothing is kept in
/// memory afterwards.
pub fn save_script(script: &str, dir: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("graph_query_{timestamp}.cypher"));

    std::fs::write(&path, script)
        .with_context(|| format!("failed to write cypher script to {}", path.display()))?;

    info!("cypher script saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_filename_pattern() {
        let dir = std::env::temp_dir();
        let path = save_script("CREATE (n:Entity { name: \"x\" });", &dir).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("graph_query_"));
        assert!(name.ends_with(".cypher"));
        // graph_query_ + YYYYMMDD_HHMMSS + .cypher
        assert_eq!(name.len(), "graph_query_".len() + 15 + ".cypher".len());

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "CREATE (n:Entity { name: \"x\" });");
        std::fs::remove_file(path).ok();
    }
}
