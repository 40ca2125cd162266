pub mod config_file;
pub mod file_utils;
