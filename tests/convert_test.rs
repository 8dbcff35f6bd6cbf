use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use walknet::{Converter, GraphSession, Pajek, Settings, VertexId, WalkFormat, WalkIngestor};

fn id(value: u64) -> VertexId {
    VertexId::new(value).unwrap()
}

fn write_gzip(path: &Path, text: &str) {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    fs::write(path, encoder.finish().unwrap()).unwrap();
}

#[test]
fn test_round_trip_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let walk_file = temp_dir.path().join("walks.txt");
    fs::write(&walk_file, "concordia canada northAmerica\nEurope germany\n").unwrap();

    let settings = Settings::default();
    let report = Converter::new(&settings).run(&walk_file, None).unwrap();
    assert!(report.is_success());
    assert_eq!(report.vertex_count, 5);
    assert_eq!(report.edge_count, 3);

    let content = fs::read_to_string(temp_dir.path().join("graph.nt")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "*Vertices 5");
    assert_eq!(
        &lines[1..6],
        &[
            "1 \"concordia\"",
            "2 \"canada\"",
            "3 \"northAmerica\"",
            "4 \"Europe\"",
            "5 \"germany\"",
        ]
    );
    assert_eq!(lines[6], "*arcs");

    let mut edges = lines[7..].to_vec();
    edges.sort();
    assert_eq!(edges, vec!["1 2", "2 3", "4 5"]);
    assert!(!content.contains('6'));
    assert!(content.ends_with("\n"));
}

#[test]
fn test_directory_equals_union_of_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.txt"), "A B C\nD\n").unwrap();
    write_gzip(&root.join("b.txt.gz"), "C B\nE A\n");

    let settings = Settings::default();
    let mut from_dir = GraphSession::new();
    let report = Converter::new(&settings)
        .ingest(&mut from_dir, root, None)
        .unwrap();
    assert!(report.is_success());
    assert_eq!(report.files.len(), 2);

    let mut by_file = GraphSession::new();
    let mut ingestor = WalkIngestor::new(&mut by_file);
    ingestor
        .ingest_file(&root.join("a.txt"), WalkFormat::Plain)
        .unwrap();
    ingestor
        .ingest_file(&root.join("b.txt.gz"), WalkFormat::Gzip)
        .unwrap();

    assert_eq!(
        Pajek::to_string(&from_dir).unwrap(),
        Pajek::to_string(&by_file).unwrap()
    );
    assert_eq!(from_dir.vertex_count(), 5);
    // A-B, B-C, E-A; C-B is the reverse of B-C
    assert_eq!(from_dir.edge_count(), 3);
}

#[test]
fn test_reversed_pair_across_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("1.txt"), "A B\n").unwrap();
    fs::write(root.join("2.txt"), "B A\n").unwrap();

    let settings = Settings::default();
    let mut session = GraphSession::new();
    Converter::new(&settings)
        .ingest(&mut session, root, None)
        .unwrap();

    assert_eq!(session.edge_count(), 1);
    assert!(session.edges().contains(id(2), id(1)));
}

#[test]
fn test_ingesting_twice_without_reset() {
    let temp_dir = TempDir::new().unwrap();
    let walk_file = temp_dir.path().join("walks.txt");
    fs::write(&walk_file, "p q r\nr p\nq\n").unwrap();

    let settings = Settings::default();
    let converter = Converter::new(&settings);
    let mut session = GraphSession::new();

    converter.ingest(&mut session, &walk_file, None).unwrap();
    let first = Pajek::to_string(&session).unwrap();

    converter.ingest(&mut session, &walk_file, None).unwrap();
    assert_eq!(Pajek::to_string(&session).unwrap(), first);
}

#[test]
fn test_custom_gzip_extension() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_gzip(&root.join("walks.gzip"), "x y\n");

    let mut settings = Settings::default();
    settings.input.gzip_extension = "gzip".to_string();

    let report = Converter::new(&settings).run(root, None).unwrap();
    assert!(report.is_success());
    assert_eq!(report.edge_count, 1);
}

#[test]
fn test_invalid_utf8_skips_only_that_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.txt"), b"ok fine\n\xff\xfe broken\n").unwrap();
    fs::write(root.join("b.txt"), "later walk\n").unwrap();

    let settings = Settings::default();
    let output = root.join("out").join("graph.net");
    fs::create_dir(root.join("out")).unwrap();

    let report = Converter::new(&settings).run(root, Some(&output)).unwrap();
    assert_eq!(report.ingest.failures.len(), 1);
    assert_eq!(report.ingest.files, vec![root.join("b.txt")]);
    // The first line of the failed file was ingested before the error
    assert_eq!(report.vertex_count, 4);
    assert!(output.exists());
}
