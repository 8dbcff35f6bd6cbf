//! Convert random-walk corpora into deduplicated, undirected Pajek `.net` graphs.
//!
//! Each line of a walk file is one walk: whitespace-separated node labels.
//! Labels get vertex ids in first-sighting order, consecutive labels become
//! undirected edges, and the result is written as a single Pajek file.
//!
//! ```
//! use walknet::{GraphSession, Pajek, WalkIngestor};
//!
//! let mut session = GraphSession::new();
//! WalkIngestor::new(&mut session)
//!     .ingest_reader("a b c\nc b\n".as_bytes())
//!     .unwrap();
//!
//! assert_eq!(
//!     Pajek::to_string(&session).unwrap(),
//!     "*Vertices 3\n1 \"a\"\n2 \"b\"\n3 \"c\"\n*arcs\n1 2\n2 3\n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod output;
pub mod pajek;
pub mod types;

pub use config::Settings;
pub use convert::{ConvertError, Converter, FileFailure, IngestReport, RunReport};
pub use graph::{Edge, EdgeSet, GraphSession, IdentifierRegistry, RegistryError};
pub use ingest::{IngestError, IngestStats, WalkFormat, WalkIngestor};
pub use pajek::Pajek;
pub use types::VertexId;
