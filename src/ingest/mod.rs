//! Walk ingestion: locating walk files, decoding them and feeding their lines
//! into a [`GraphSession`](crate::graph::GraphSession).

pub mod error;
pub mod source;
pub mod walker;

pub use error::{IngestError, IngestResult};
pub use source::{UnreadableEntry, WalkFormat, discover_walk_files, open_walk_file};
pub use walker::{IngestStats, WalkIngestor};
