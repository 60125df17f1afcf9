use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

/// Opens a file for buffered reading, or `None` if it can't be opened
pub fn open_reader(path: &Path) -> Option<BufReader<File>> {
    File::open(path).ok().map(BufReader::new)
}

/// Creates (or truncates) a file for buffered writing
pub fn create_writer(path: &Path) -> io::Result<BufWriter<File>> {
    File::create(path).map(BufWriter::new)
}
