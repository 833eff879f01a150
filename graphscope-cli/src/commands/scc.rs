use std::path::Path;

use graphscope::algorithms::strongly_connected_components;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load_edge_list},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct ComponentEntry {
    rank: usize,
    size: usize,
    leader: u64,
}

#[derive(Debug, Serialize)]
struct SccOutput {
    file: String,
    vertices: usize,
    edges: usize,
    components: usize,
    largest: Vec<ComponentEntry>,
}

pub fn run(path: &Path, top: usize, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_edge_list(path)?;
    let components = strongly_connected_components(&graph);

    let largest = components
        .iter()
        .take(top)
        .enumerate()
        .filter_map(|(i, (leader, size))| {
            graph.label(leader).map(|leader| ComponentEntry {
                rank: i + 1,
                size,
                leader,
            })
        })
        .collect();

    let output = SccOutput {
        file: file_display_name(path),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        components: components.count(),
        largest,
    };

    print_output(&output, opts, |out| {
        println!(
            "{}: {} vertices, {} edges, {} strongly connected components",
            out.file, out.vertices, out.edges, out.components
        );
        if out.largest.is_empty() {
            return;
        }

        println!("\nLargest components:");
        let mut tw = TabWriter::new(&[
            ("Rank", Align::Right),
            ("Size", Align::Right),
            ("Leader", Align::Right),
        ])
        .indent("  ");
        for entry in &out.largest {
            tw.row(vec![
                entry.rank.to_string(),
                entry.size.to_string(),
                entry.leader.to_string(),
            ]);
        }
        tw.print();

        let sizes: Vec<String> = out.largest.iter().map(|e| e.size.to_string()).collect();
        println!("\n{}", sizes.join(","));
    })
}
