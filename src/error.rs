use thiserror::Error;

use crate::graph::Vertex;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The traversal engines themselves assume a well-formed graph and only fail on
/// precondition violations ([`Error::UnknownSource`], [`Error::EmptyFrontier`]). Everything
/// else originates in the text loader or the filesystem.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::Malformed`] - The input text could not be parsed into a graph
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// ## Traversal Errors
/// - [`Error::UnknownSource`] - Shortest paths requested from a vertex absent from the graph
/// - [`Error::EmptyFrontier`] - Minimum extracted from a frontier with no live members
/// - [`Error::GraphError`] - Edge insertion between node ids the graph does not hold
///
/// # Examples
///
/// ```rust
/// use graphscope::{algorithms::shortest_paths, Error, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge(1, 2, 5);
///
/// match shortest_paths(&graph, 42) {
///     Err(Error::UnknownSource(vertex)) => assert_eq!(vertex, 42),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input is damaged and could not be parsed.
    ///
    /// The message names the offending input line. The error also carries the
    /// source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while opening or mapping
    /// an input file.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// The requested shortest-path source is not a vertex of the graph.
    ///
    /// Fatal for the run; no partial result is produced.
    #[error("Source vertex {0} does not exist in the graph")]
    UnknownSource(Vertex),

    /// A minimum was requested from a frontier without live members.
    ///
    /// Only reachable through programmer error, the shortest-path engine stops
    /// as soon as its frontier drains.
    #[error("Attempted to extract the minimum of an empty frontier")]
    EmptyFrontier,

    /// Graph structure error.
    ///
    /// Raised when edges reference node ids outside the graph.
    #[error("{0}")]
    GraphError(String),
}
