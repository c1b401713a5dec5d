//! Dataset fixtures — CSV snippets and on-disk temp files.

use std::io::Write;
use std::path::Path;

/// Header row shared by every fixture, matching the loader's expected columns.
pub const HEADER: &str = "Error Code,Model,Station,Risk station,FA by TRC,RCA,Counter Action";

/// A small but representative cookbook: duplicate codes, an embedded
/// newline in a quoted code, numbered-list procedure text, and a row with
/// no error code.
pub const SAMPLE_COOKBOOK: &str = "\
Error Code,Model,Station,Risk station,FA by TRC,RCA,Counter Action
\"E01\nCAM FAIL\",X-100,FATP-1,1.SMT 2.FATP,lens swap confirmed,1.lens misaligned 2.flex damaged,1.realign lens 2.replace flex
E01 CAM FAIL,X-200,FATP-2,1.SMT 2.FATP,lens swap confirmed,flex damaged,replace flex
E02 MIC OPEN,X-100,FATP-1,3.Audio,mic rework confirmed,solder void,reflow mic pad
,X-300,FATP-9,none,none,unlabeled row,none
";

/// Write `contents` to a fresh temp file and return its handle (the file is
/// deleted when the handle drops).
pub fn dataset_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp dataset");
    file.write_all(contents.as_bytes()).expect("write dataset");
    file
}

/// Load a CSV string through the real loader.
pub fn load_str(contents: &str) -> fab_core::Table {
    let file = dataset_file(contents);
    fab_core::dataset::load(file.path()).expect("fixture must load")
}

/// Load a CSV string and expect failure.
pub fn load_str_err(contents: &str) -> fab_core::dataset::LoadError {
    let file = dataset_file(contents);
    fab_core::dataset::load(file.path()).expect_err("fixture must fail to load")
}

/// Convenience for harnesses that need a nonexistent path.
pub fn missing_path() -> &'static Path {
    Path::new("/nonexistent/fab-cookbook.csv")
}
