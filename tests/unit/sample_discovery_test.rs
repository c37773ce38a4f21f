use assert_matches::assert_matches;
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

use keyscan::parser::directory::{find_sample_files, select_sample};
use keyscan::parser::filter::SampleOptions;
use keyscan::ScanErrorKind;

#[test]
fn test_find_sample_files_nonrecursive() {
    let td = TempDir::new().unwrap();
    let mut fa = File::create(td.path().join("a.json")).unwrap();
    write!(fa, "{{\"name\": \"A\"}}\n").unwrap();
    File::create(td.path().join("a_ref.json")).unwrap();
    File::create(td.path().join("a.txt")).unwrap();

    let sub = td.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    File::create(sub.join("b.json")).unwrap();

    let files = find_sample_files(td.path(), &SampleOptions::default()).unwrap();
    assert_eq!(files, vec![td.path().join("a.json")]);
}

#[test]
fn test_find_sample_files_recursive() {
    let td = TempDir::new().unwrap();
    let sub = td.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    File::create(td.path().join("z.json")).unwrap();
    File::create(sub.join("b.json")).unwrap();
    File::create(sub.join("b_ref.json")).unwrap();

    let options = SampleOptions {
        recursive: true,
        ..SampleOptions::default()
    };
    let files = find_sample_files(td.path(), &options).unwrap();
    assert_eq!(files, vec![sub.join("b.json"), td.path().join("z.json")]);
}

#[test]
fn test_select_sample_errors() {
    let td = TempDir::new().unwrap();

    let err = select_sample(&td.path().join("absent"), &SampleOptions::default()).unwrap_err();
    assert_matches!(err.kind(), Some(ScanErrorKind::DirectoryNotFound { .. }));

    let err = select_sample(td.path(), &SampleOptions::default()).unwrap_err();
    assert_matches!(err.kind(), Some(ScanErrorKind::NoSampleFile { .. }));
}
