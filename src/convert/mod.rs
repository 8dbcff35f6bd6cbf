//! End-to-end conversion: walk files in, one Pajek file out.
//!
//! A run fails outright only when the input is missing, the walk directory
//! cannot be listed, or the output cannot be written. Unreadable walk files are
//! skipped and reported in the [`RunReport`].

pub mod error;
pub mod report;

pub use error::{ConvertError, ConvertResult, FileFailure};
pub use report::{IngestReport, RunReport};

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::graph::GraphSession;
use crate::ingest::{
    IngestError, UnreadableEntry, WalkFormat, WalkIngestor, discover_walk_files,
};
use crate::output::write_atomic;
use crate::pajek::Pajek;
use crate::{debug_event, log_event};

/// Runs conversions with a fixed set of settings.
pub struct Converter<'a> {
    settings: &'a Settings,
}

impl<'a> Converter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Where the graph goes when no explicit output path is given:
    /// inside the walk directory, or next to a single walk file.
    pub fn default_output_path(&self, input: &Path) -> PathBuf {
        let file_name = &self.settings.output.file_name;
        if input.is_dir() {
            return input.join(file_name);
        }
        match input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
            _ => PathBuf::from(file_name),
        }
    }

    /// Ingest every walk file under `input` into `session`.
    ///
    /// `exclude` is never read, even if it sits in the walk directory.
    pub fn ingest(
        &self,
        session: &mut GraphSession,
        input: &Path,
        exclude: Option<&Path>,
    ) -> ConvertResult<IngestReport> {
        if !input.exists() {
            return Err(ConvertError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        let entries = discover_walk_files(input, &self.settings.input, exclude).map_err(
            |source| ConvertError::DirectoryRead {
                path: input.to_path_buf(),
                source,
            },
        )?;
        debug_event!("convert", "discovered", "{} walk file(s)", entries.len());

        let mut report = IngestReport::default();
        let mut ingestor = WalkIngestor::new(session);

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(UnreadableEntry { path, source }) => {
                    let failure = FileFailure {
                        path,
                        error: IngestError::Open { source },
                    };
                    debug_event!("ingest", "file skipped", "{failure}");
                    report.failures.push(failure);
                    continue;
                }
            };
            let format = WalkFormat::from_path(&path, &self.settings.input.gzip_extension);
            match ingestor.ingest_file(&path, format) {
                Ok(mut stats) => {
                    log_event!(
                        "ingest",
                        "file done",
                        "{} ({} walks, {} new vertices, {} new edges)",
                        path.display(),
                        stats.walks,
                        stats.new_vertices,
                        stats.new_edges
                    );
                    report.warnings.append(&mut stats.warnings);
                    report.files.push(path);
                }
                Err(error) => {
                    let failure = FileFailure { path, error };
                    debug_event!("ingest", "file skipped", "{failure}");
                    report.failures.push(failure);
                }
            }
        }

        Ok(report)
    }

    /// Convert `input` into a Pajek file at `output` (or the default location).
    ///
    /// Nothing is written when the input does not exist.
    pub fn run(&self, input: &Path, output: Option<&Path>) -> ConvertResult<RunReport> {
        if !input.exists() {
            return Err(ConvertError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        let output = match output {
            Some(path) => path.to_path_buf(),
            None => {
                let path = self.default_output_path(input);
                log_event!("convert", "output not set", "writing {}", path.display());
                path
            }
        };

        let mut session = GraphSession::new();
        let ingest = self.ingest(&mut session, input, Some(&output))?;

        Pajek::to_string(&session)
            .and_then(|content| write_atomic(&output, &content))
            .map_err(|source| ConvertError::Write {
                path: output.clone(),
                source,
            })?;

        Ok(RunReport {
            output,
            vertex_count: session.vertex_count(),
            edge_count: session.edge_count(),
            ingest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::IdentifierRegistry;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_for_directory() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let converter = Converter::new(&settings);

        assert_eq!(
            converter.default_output_path(temp_dir.path()),
            temp_dir.path().join("graph.nt")
        );
    }

    #[test]
    fn test_default_output_for_file() {
        let temp_dir = TempDir::new().unwrap();
        let walk_file = temp_dir.path().join("walks.txt");
        fs::write(&walk_file, "a b\n").unwrap();

        let mut settings = Settings::default();
        settings.output.file_name = "custom.net".to_string();
        let converter = Converter::new(&settings);

        assert_eq!(
            converter.default_output_path(&walk_file),
            temp_dir.path().join("custom.net")
        );
        assert_eq!(
            converter.default_output_path(Path::new("walks.txt")),
            PathBuf::from("custom.net")
        );
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let missing = temp_dir.path().join("nope");

        let err = Converter::new(&settings).run(&missing, None).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }));
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.txt"), "x y\n").unwrap();
        fs::write(root.join("b.gz"), "definitely not gzip").unwrap();
        fs::write(root.join("c.txt"), "y z\n").unwrap();

        let settings = Settings::default();
        let report = Converter::new(&settings).run(root, None).unwrap();

        assert_eq!(report.ingest.files, vec![root.join("a.txt"), root.join("c.txt")]);
        assert_eq!(report.ingest.failures.len(), 1);
        assert_eq!(report.ingest.failures[0].path, root.join("b.gz"));
        assert_eq!(report.vertex_count, 3);
        assert_eq!(report.edge_count, 2);
        assert!(!report.is_success());
        assert!(root.join("graph.nt").exists());
    }

    #[test]
    fn test_rerun_does_not_read_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("walks.txt"), "a b c\n").unwrap();

        let settings = Settings::default();
        let converter = Converter::new(&settings);
        let first = converter.run(root, None).unwrap();
        let first_output = fs::read_to_string(&first.output).unwrap();

        let second = converter.run(root, None).unwrap();
        assert_eq!(second.ingest.files, vec![root.join("walks.txt")]);
        assert_eq!(fs::read_to_string(&second.output).unwrap(), first_output);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_a_failure() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.txt"), "x y\n").unwrap();
        std::os::unix::fs::symlink(root.join("gone.txt"), root.join("b.txt")).unwrap();

        let settings = Settings::default();
        let report = Converter::new(&settings).run(root, None).unwrap();

        assert_eq!(report.ingest.files, vec![root.join("a.txt")]);
        assert_eq!(report.ingest.failures.len(), 1);
        assert_eq!(report.ingest.failures[0].path, root.join("b.txt"));
        assert!(matches!(
            report.ingest.failures[0].error,
            IngestError::Open { .. }
        ));
        assert_eq!(report.edge_count, 1);
        assert!(!report.is_success());
    }

    #[test]
    fn test_exhausted_registry_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("walks.txt"), "a b c\n").unwrap();

        let settings = Settings::default();
        let mut session = GraphSession::with_registry(IdentifierRegistry::with_max_id(2));
        let report = Converter::new(&settings)
            .ingest(&mut session, root, None)
            .unwrap();

        assert_eq!(report.files, vec![root.join("walks.txt")]);
        assert!(report.failures.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(!report.is_success());
        assert_eq!(session.vertex_count(), 2);
        assert_eq!(session.edge_count(), 1);
    }
}
