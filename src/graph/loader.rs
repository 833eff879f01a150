//! Text loaders for the two input formats.
//!
//! # Adjacency list (weighted)
//!
//! One vertex per line, followed by its outgoing edges as `neighbor,weight` pairs:
//!
//! ```text
//! 1	2,7	3,9
//! 2	3,10
//! ```
//!
//! # Edge list (unweighted)
//!
//! One directed edge `tail head` per line. Every edge gets a weight of 1:
//!
//! ```text
//! 1 4
//! 4 7
//! ```
//!
//! In both formats tokens are separated by any mix of whitespace and commas. Vertices are
//! inserted on first mention, so an edge may reference a vertex that never starts a line
//! of its own.
//!
//! Files are memory-mapped rather than read into a buffer; edge lists of several million
//! lines are common inputs.

use std::{fs, path::Path, str};

use memmap2::Mmap;

use crate::{
    graph::{Graph, Vertex, Weight},
    Error, Result,
};

/// A numeric token together with the 1-based line it was read from.
struct Token<'a> {
    text: &'a str,
    line: usize,
}

/// Splits `line` into its non-empty tokens.
fn split_line(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

/// Yields every token of `text` tagged with its line number.
fn tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.lines()
        .enumerate()
        .flat_map(|(index, line)| split_line(line).map(move |text| Token { text, line: index + 1 }))
}

fn parse_vertex(token: &Token<'_>) -> Result<Vertex> {
    token.text.parse::<Vertex>().map_err(|_| {
        if token.text.starts_with('-') {
            malformed_error!("line {}: negative vertex label '{}'", token.line, token.text)
        } else {
            malformed_error!("line {}: invalid vertex label '{}'", token.line, token.text)
        }
    })
}

fn parse_weight(token: &Token<'_>) -> Result<Weight> {
    token.text.parse::<Weight>().map_err(|_| {
        if token.text.starts_with('-') {
            malformed_error!(
                "line {}: negative edge weight '{}' is not supported",
                token.line,
                token.text
            )
        } else {
            malformed_error!("line {}: invalid edge weight '{}'", token.line, token.text)
        }
    })
}

/// Parses a weighted adjacency list into a [`Graph`].
///
/// Blank lines are skipped. A line naming a vertex without any edges still inserts the
/// vertex.
///
/// # Errors
///
/// Returns [`Error::Malformed`] for a non-numeric or negative token, or a neighbor that
/// lacks its weight. The message names the offending line.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::parse_adjacency_list;
///
/// let graph = parse_adjacency_list("1\t2,7\t3,9\n2\t3,10\n3\n")?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn parse_adjacency_list(text: &str) -> Result<Graph> {
    let mut graph = Graph::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let mut fields = split_line(line).map(|text| Token {
            text,
            line: line_no,
        });

        let Some(head) = fields.next() else {
            continue;
        };
        let source = parse_vertex(&head)?;
        graph.add_vertex(source);

        while let Some(neighbor) = fields.next() {
            let target = parse_vertex(&neighbor)?;
            let Some(weight) = fields.next() else {
                return Err(malformed_error!(
                    "line {}: neighbor {} of vertex {} has no weight",
                    line_no,
                    target,
                    source
                ));
            };
            let weight = parse_weight(&weight)?;
            graph.add_edge(source, target, weight);
        }
    }

    Ok(graph)
}

/// Parses an unweighted edge list into a [`Graph`].
///
/// Integers are consumed pairwise from the token stream; each pair `tail head` becomes
/// one edge of weight 1.
///
/// # Errors
///
/// Returns [`Error::Malformed`] for a non-numeric or negative token, or a trailing tail
/// without a head.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::parse_edge_list;
///
/// let graph = parse_edge_list("1 2\n2 3\n3 1\n")?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn parse_edge_list(text: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    let mut stream = tokens(text);

    while let Some(tail) = stream.next() {
        let source = parse_vertex(&tail)?;
        let Some(head) = stream.next() else {
            return Err(malformed_error!(
                "line {}: edge from {} has no head vertex",
                tail.line,
                source
            ));
        };
        let target = parse_vertex(&head)?;
        graph.add_edge(source, target, 1);
    }

    Ok(graph)
}

/// Memory-maps `path` and hands its UTF-8 contents to `parse`.
fn load_file(path: &Path, parse: fn(&str) -> Result<Graph>) -> Result<Graph> {
    let file = fs::File::open(path)?;
    if file.metadata()?.len() == 0 {
        log::warn!("{} is empty, loading an empty graph", path.display());
        return Ok(Graph::new());
    }

    let mmap = match unsafe { Mmap::map(&file) } {
        Ok(mmap) => mmap,
        Err(error) => return Err(Error::FileError(error)),
    };

    let text = str::from_utf8(&mmap)
        .map_err(|error| malformed_error!("{} is not valid UTF-8: {}", path.display(), error))?;

    let graph = parse(text)?;
    log::debug!(
        "loaded {}: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

impl Graph {
    /// Loads a weighted adjacency-list file, see [`parse_adjacency_list`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`] if the file cannot be opened or mapped, and
    /// [`Error::Malformed`] if its contents do not parse.
    pub fn from_adjacency_file(path: impl AsRef<Path>) -> Result<Graph> {
        load_file(path.as_ref(), parse_adjacency_list)
    }

    /// Loads an unweighted edge-list file, see [`parse_edge_list`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`] if the file cannot be opened or mapped, and
    /// [`Error::Malformed`] if its contents do not parse.
    pub fn from_edge_list_file(path: impl AsRef<Path>) -> Result<Graph> {
        load_file(path.as_ref(), parse_edge_list)
    }
}
