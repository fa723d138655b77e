use std::fs;
use std::path::PathBuf;

use super::source_loader::load_source;

#[test]
fn inline_text_is_one_unnamed_segment() {
    let source = load_source(&[] as &[PathBuf], Some("{ a }")).unwrap();
    assert_eq!(source.segments().len(), 1);
    assert_eq!(source.segments()[0].name(), None);
    assert_eq!(source.segments()[0].content(), "{ a }");
}

#[test]
fn files_become_named_segments_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.graphql");
    let b = dir.path().join("b.graphql");
    fs::write(&a, "{ ...F }\n").unwrap();
    fs::write(&b, "fragment F on T { f }\n").unwrap();

    let source = load_source(&[b.clone(), a.clone()], None).unwrap();
    let names: Vec<_> = source
        .segments()
        .iter()
        .map(|s| s.display_name().to_owned())
        .collect();
    assert_eq!(
        names,
        [
            b.to_string_lossy().into_owned(),
            a.to_string_lossy().into_owned()
        ]
    );
    assert_eq!(
        source.len() as usize,
        "{ ...F }\n".len() + "fragment F on T { f }\n".len()
    );
}

#[test]
fn directory_reads_graphql_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.gql"), "fragment F on T { f }").unwrap();
    fs::write(dir.path().join("a.graphql"), "{ ...F }").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let source = load_source(&[dir.path()], None).unwrap();
    let contents: Vec<_> = source.segments().iter().map(|s| s.content()).collect();
    assert_eq!(contents, ["{ ...F }", "fragment F on T { f }"]);
}

#[test]
fn empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_source(&[dir.path()], None).unwrap_err();
    assert!(err.starts_with("no .graphql files found"), "{err}");
}

#[test]
fn missing_file_is_an_error() {
    let err = load_source(&[PathBuf::from("/nonexistent/palisade.graphql")], None).unwrap_err();
    assert!(
        err.starts_with("failed to read '/nonexistent/palisade.graphql'"),
        "{err}"
    );
}
