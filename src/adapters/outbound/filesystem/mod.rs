/// Filesystem adapters for manifest input and plain-text graph output
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::DotFileWriter;
