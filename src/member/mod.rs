pub mod types;
pub mod scanner;
pub mod processor;

// Re-export the main API for easier access
pub use types::{AccessModifier, BraceMode, MethodRecord, ReorderOptions, ReorderOutcome};
pub use scanner::MemberScanner;
pub use processor::MemberReorderer;
