use std::path::Path;
use std::fs;
use anyhow::{Result, Context};
use log::{debug, trace};

/// Split text into lines, each keeping its terminator
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Read a file to string with better error handling
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}

/// Read a file as lines, terminators included
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = read_file_to_string(path)?;
    let lines = split_lines(&content);
    debug!("Read {} lines ({} bytes) from {}", lines.len(), content.len(), path.display());
    Ok(lines)
}

/// Write a string to a file with better error handling
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    trace!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content)
        .with_context(|| format!("Failed to write file {}", path.display()))
}

/// Overwrite a file with the given lines
pub fn write_lines(path: impl AsRef<Path>, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    write_string_to_file(path, &lines.concat())?;
    debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
