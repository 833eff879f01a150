use std::path::Path;

use anyhow::bail;
use graphscope::algorithms::{shortest_paths, UNREACHABLE};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load_adjacency_list},
    output::{print_output, Align, TabWriter},
};

/// Options for the `dijkstra` subcommand.
pub struct DijkstraOptions<'a> {
    pub source: Option<u64>,
    pub targets: &'a [u64],
    pub unreachable: u64,
}

#[derive(Debug, Serialize)]
struct DistanceEntry {
    vertex: u64,
    distance: u64,
    reachable: bool,
}

#[derive(Debug, Serialize)]
struct DijkstraOutput {
    file: String,
    source: u64,
    vertices: usize,
    reachable: usize,
    distances: Vec<DistanceEntry>,
}

pub fn run(path: &Path, options: &DijkstraOptions<'_>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_adjacency_list(path)?;

    let Some(source) = options.source.or_else(|| graph.first_vertex()) else {
        bail!("{} contains no vertices", path.display());
    };
    let paths = shortest_paths(&graph, source)?;

    let entry = |vertex: u64, distance: u64| DistanceEntry {
        vertex,
        distance: if distance == UNREACHABLE {
            options.unreachable
        } else {
            distance
        },
        reachable: distance != UNREACHABLE,
    };

    let distances = if options.targets.is_empty() {
        paths.iter().map(|(vertex, distance)| entry(vertex, distance)).collect()
    } else {
        let mut selected = Vec::with_capacity(options.targets.len());
        for &vertex in options.targets {
            match paths.distance(vertex) {
                Some(distance) => selected.push(entry(vertex, distance)),
                None => bail!("target vertex {vertex} does not exist in the graph"),
            }
        }
        selected
    };

    let output = DijkstraOutput {
        file: file_display_name(path),
        source,
        vertices: graph.vertex_count(),
        reachable: paths.reachable_count(),
        distances,
    };

    print_output(&output, opts, |out| {
        println!(
            "{}: shortest paths from {}, {} of {} vertices reachable",
            out.file, out.source, out.reachable, out.vertices
        );
        println!();

        let mut tw = TabWriter::new(&[("Vertex", Align::Right), ("Distance", Align::Right)])
            .indent("  ");
        for entry in &out.distances {
            tw.row(vec![entry.vertex.to_string(), entry.distance.to_string()]);
        }
        tw.print();

        let line: Vec<String> = out.distances.iter().map(|e| e.distance.to_string()).collect();
        println!("\n{}", line.join(","));
    })
}
