#![allow(dead_code)]

pub fn test_case_path(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_cases")
        .join(name)
}

/// Scratch input file, deleted when dropped.
pub fn write_input(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("should be able to create a temp file");
    file.write_all(contents.as_bytes())
        .expect("should be able to write the temp file");
    file
}
