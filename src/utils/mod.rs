pub mod fs;
pub mod paths;

pub use fs::{dir_exists, file_exists, read_file_to_string, write_file};
pub use paths::{display_path, join_segments};
