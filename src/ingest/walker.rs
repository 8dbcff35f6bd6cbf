//! Turns walk lines into vertices and edges.

use std::io::{self, BufRead};
use std::path::Path;

use super::error::{IngestError, IngestResult};
use super::source::{WalkFormat, open_walk_file};
use crate::graph::{GraphSession, RegistryError};
use crate::types::VertexId;

/// Counters for one ingested source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: usize,
    /// Lines with at least one token.
    pub walks: usize,
    pub tokens: usize,
    pub new_vertices: usize,
    pub new_edges: usize,
    /// Labels that could not be registered. Ingestion carried on without them.
    pub warnings: Vec<RegistryError>,
}

/// Feeds walks into a [`GraphSession`].
pub struct WalkIngestor<'a> {
    session: &'a mut GraphSession,
}

impl<'a> WalkIngestor<'a> {
    pub fn new(session: &'a mut GraphSession) -> Self {
        Self { session }
    }

    /// Open `path` and ingest every line of it.
    pub fn ingest_file(&mut self, path: &Path, format: WalkFormat) -> IngestResult<IngestStats> {
        let reader = open_walk_file(path, format).map_err(|source| IngestError::Open { source })?;
        self.ingest_reader(reader)
    }

    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> IngestResult<IngestStats> {
        self.ingest_lines(reader.lines())
    }

    /// Consume lines until the source is exhausted.
    ///
    /// On a read error the lines already consumed stay in the session.
    pub fn ingest_lines<I>(&mut self, lines: I) -> IngestResult<IngestStats>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let vertices_before = self.session.vertex_count();
        let mut stats = IngestStats::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.map_err(|source| IngestError::Read {
                line: index + 1,
                source,
            })?;
            stats.lines += 1;
            self.ingest_walk(&line, &mut stats);
        }

        stats.new_vertices = self.session.vertex_count() - vertices_before;
        Ok(stats)
    }

    fn ingest_walk(&mut self, line: &str, stats: &mut IngestStats) {
        let (registry, edges) = self.session.parts_mut();
        let mut previous: Option<VertexId> = None;
        let mut saw_token = false;

        for token in line.split_whitespace() {
            saw_token = true;
            stats.tokens += 1;

            match registry.resolve(token) {
                Ok(id) => {
                    if let Some(prev) = previous {
                        if edges.add(prev, id) {
                            stats.new_edges += 1;
                        }
                    }
                    previous = Some(id);
                }
                Err(e) => {
                    tracing::debug!("[ingest] {e}");
                    stats.warnings.push(e);
                    // An unregistered label breaks the walk: no edge on either side of it
                    previous = None;
                }
            }
        }

        if saw_token {
            stats.walks += 1;
        }
    }
}
