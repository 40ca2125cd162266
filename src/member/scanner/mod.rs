pub mod braces;
pub mod boundaries;
pub mod method_parser;

use log::debug;

use crate::member::types::{BraceMode, FooterLocation, ScanResult};

// Re-export from submodules
pub use braces::{BraceCounter, find_block_end};
pub use boundaries::{locate_class_footer, locate_constructor_end};
pub use method_parser::{MethodDeclaration, MethodParser};

/// Member scanner responsible for locating the constructor, the class end and the methods between them
#[derive(Debug, Clone)]
pub struct MemberScanner {
    /// Literal text identifying the constructor line
    constructor_signature: String,

    /// Brace counting strategy shared by every locator
    brace_mode: BraceMode,

    /// Method parser for the body
    parser: MethodParser,
}

impl MemberScanner {
    /// Create a new member scanner for the given constructor signature
    pub fn new(constructor_signature: impl Into<String>, brace_mode: BraceMode) -> Self {
        Self {
            constructor_signature: constructor_signature.into(),
            brace_mode,
            parser: MethodParser::new(brace_mode),
        }
    }

    /// Index of the first line after the constructor, if it can be found
    pub fn locate_constructor_end(&self, lines: &[String]) -> Option<usize> {
        locate_constructor_end(lines, &self.constructor_signature, self.brace_mode)
    }

    /// Where the class body ends
    pub fn locate_class_footer(&self, lines: &[String], constructor_end: usize) -> FooterLocation {
        let footer = locate_class_footer(lines, constructor_end);
        debug!("Class footer located at {:?}", footer);
        footer
    }

    /// Scan a body slice for methods
    pub fn scan_methods(&self, body: &[String]) -> ScanResult {
        self.parser.find_method_boundaries(body)
    }
}
