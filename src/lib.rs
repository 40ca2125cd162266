pub mod cli;
pub mod member;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export main types and functions for easier access
pub use member::types::{
    AccessModifier, BraceMode, FileSections, FooterLocation, LineEnding, MethodRecord,
    ReorderOptions, ReorderOutcome, ReorderedFile, ScanResult,
};
pub use member::scanner::{MemberScanner, MethodParser};
pub use member::processor::{MemberReorderer, ReorderStats};

// Re-export utility functions
pub use utils::{config_file, file_utils};
