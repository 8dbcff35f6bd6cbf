//! Outcome of ingestion and conversion runs.

use std::path::PathBuf;

use super::error::FileFailure;
use crate::graph::RegistryError;

/// What happened while ingesting one input path.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Files read to the end, in processing order.
    pub files: Vec<PathBuf>,
    /// Files skipped after an open or read error.
    pub failures: Vec<FileFailure>,
    pub warnings: Vec<RegistryError>,
}

impl IngestReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.warnings.is_empty()
    }
}

/// Result of a full conversion that produced an output file.
#[derive(Debug)]
pub struct RunReport {
    pub output: PathBuf,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub ingest: IngestReport,
}

impl RunReport {
    /// True when every file was ingested and no label was dropped.
    pub fn is_success(&self) -> bool {
        self.ingest.is_success()
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "Wrote {} vertices and {} edges from {} file(s) to {}",
            self.vertex_count,
            self.edge_count,
            self.ingest.files.len(),
            self.output.display()
        );
        if !self.ingest.failures.is_empty() {
            line.push_str(&format!(" ({} file(s) skipped)", self.ingest.failures.len()));
        }
        if !self.ingest.warnings.is_empty() {
            line.push_str(&format!(" ({} warning(s))", self.ingest.warnings.len()));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::IngestError;

    fn report(ingest: IngestReport) -> RunReport {
        RunReport {
            output: PathBuf::from("out/graph.nt"),
            vertex_count: 5,
            edge_count: 3,
            ingest,
        }
    }

    #[test]
    fn test_clean_run_summary() {
        let run = report(IngestReport {
            files: vec![PathBuf::from("walks.txt")],
            ..IngestReport::default()
        });

        assert!(run.is_success());
        assert_eq!(
            run.summary(),
            "Wrote 5 vertices and 3 edges from 1 file(s) to out/graph.nt"
        );
    }

    #[test]
    fn test_failures_mark_run_partial() {
        let run = report(IngestReport {
            files: vec![],
            failures: vec![FileFailure {
                path: PathBuf::from("broken.gz"),
                error: IngestError::Read {
                    line: 1,
                    source: std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt"),
                },
            }],
            warnings: vec![],
        });

        assert!(!run.is_success());
        assert!(run.summary().ends_with("(1 file(s) skipped)"));
        assert_eq!(
            run.ingest.failures[0].to_string(),
            "Problem processing file broken.gz: Read failed at line 1: corrupt"
        );
    }
}
