use std::path::Path;

use anyhow::Context;
use graphscope::Graph;

/// Load an edge-list graph, one `tail head` pair per line.
pub fn load_edge_list(path: &Path) -> anyhow::Result<Graph> {
    Graph::from_edge_list_file(path)
        .with_context(|| format!("failed to load edge list: {}", path.display()))
}

/// Load an adjacency-list graph, `vertex neighbor,weight ...` per line.
pub fn load_adjacency_list(path: &Path) -> anyhow::Result<Graph> {
    Graph::from_adjacency_file(path)
        .with_context(|| format!("failed to load adjacency list: {}", path.display()))
}

/// Extract a display-friendly filename from a path.
pub fn file_display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}
