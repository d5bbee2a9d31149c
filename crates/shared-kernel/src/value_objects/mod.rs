pub mod file_info;

pub use file_info::{FileExtension, FileName, FilePath, FileSize};
