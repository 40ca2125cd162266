use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use serde::{Serialize, Deserialize};

use crate::member::processor::stats::ReorderStats;

/// File rewritten when no path is configured
pub const DEFAULT_INPUT_PATH: &str = r"c:\git\js2il\Js2IL\Services\ILGenerators\ILExpressionGenerator.cs";

/// Constructor signature that marks the end of the header when none is configured
pub const DEFAULT_CONSTRUCTOR_SIGNATURE: &str = "public ILExpressionGenerator(ILMethodGenerator owner)";

/// Visibility qualifier preceding a member declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    Public,
    Private,
    Internal,
    Protected,
}

impl AccessModifier {
    /// The keyword as written in source
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessModifier::Public => "public",
            AccessModifier::Private => "private",
            AccessModifier::Internal => "internal",
            AccessModifier::Protected => "protected",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessModifier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "public" => Ok(AccessModifier::Public),
            "private" => Ok(AccessModifier::Private),
            "internal" => Ok(AccessModifier::Internal),
            "protected" => Ok(AccessModifier::Protected),
            other => Err(anyhow!("Unknown access modifier '{}'", other)),
        }
    }
}

/// How braces are counted when looking for the end of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BraceMode {
    /// Every `{` and `}` character counts, including those in strings and comments
    #[default]
    Textual,

    /// Braces inside comments, string literals and char literals are skipped
    Lexical,
}

/// Line terminator used for the blank separator lines inserted on output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the convention from the first terminated line, defaulting to `\n`
    pub fn detect(lines: &[String]) -> Self {
        lines.iter()
            .find(|line| line.ends_with('\n'))
            .map(|line| if line.ends_with("\r\n") { LineEnding::CrLf } else { LineEnding::Lf })
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A method declaration found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    /// Access modifier of the declaration
    pub access: AccessModifier,

    /// Whether the declaration carries `static`
    pub is_static: bool,

    /// Method identifier
    pub name: String,

    /// Index of the declaration line, relative to the scanned slice
    pub start: usize,

    /// Index of the line closing the method body (inclusive)
    pub end: usize,

    /// The lines `start..=end`, terminators included
    pub lines: Vec<String>,
}

impl MethodRecord {
    /// Whether the given index falls inside this method
    pub fn covers(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Result of scanning a slice of lines for method declarations
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Methods in first-seen order
    pub methods: Vec<MethodRecord>,

    /// Indices of declarations whose braces never closed
    pub unclosed: Vec<usize>,
}

/// Where the class body ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterLocation {
    /// A `}` line directly followed by another `}` line
    Paired(usize),

    /// No closing pair was found, so the last line is used
    LastLine(usize),
}

impl FooterLocation {
    /// First line of the footer
    pub fn index(&self) -> usize {
        match *self {
            FooterLocation::Paired(index) | FooterLocation::LastLine(index) => index,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FooterLocation::LastLine(_))
    }
}

/// Header/body/footer partition of a file's lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSections {
    /// First line after the constructor
    pub constructor_end: usize,

    /// First line of the footer
    pub class_end: usize,
}

impl FileSections {
    /// Create a partition; a class end before the constructor end yields an empty body
    pub fn new(constructor_end: usize, class_end: usize) -> Self {
        Self {
            constructor_end,
            class_end: class_end.max(constructor_end),
        }
    }

    pub fn header<'a>(&self, lines: &'a [String]) -> &'a [String] {
        &lines[..self.constructor_end.min(lines.len())]
    }

    pub fn body<'a>(&self, lines: &'a [String]) -> &'a [String] {
        let end = self.class_end.min(lines.len());
        &lines[self.constructor_end.min(end)..end]
    }

    pub fn footer<'a>(&self, lines: &'a [String]) -> &'a [String] {
        &lines[self.class_end.min(lines.len())..]
    }
}

/// Configuration for a reorder run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderOptions {
    /// File to rewrite in place
    pub input_path: PathBuf,

    /// Literal text identifying the constructor line
    pub constructor_signature: String,

    /// Access modifiers to emit, in output order
    pub category_order: Vec<AccessModifier>,

    /// Brace counting strategy
    pub brace_mode: BraceMode,

    /// Compute the result without writing it
    pub dry_run: bool,
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            constructor_signature: DEFAULT_CONSTRUCTOR_SIGNATURE.to_string(),
            category_order: vec![
                AccessModifier::Public,
                AccessModifier::Internal,
                AccessModifier::Private,
            ],
            brace_mode: BraceMode::Textual,
            dry_run: false,
        }
    }
}

impl ReorderOptions {
    /// Reject configurations the reorderer cannot act on
    pub fn validate(&self) -> Result<()> {
        if self.constructor_signature.trim().is_empty() {
            bail!("Constructor signature must not be empty");
        }
        if self.category_order.is_empty() {
            bail!("Category order must name at least one access modifier");
        }

        let mut seen = HashSet::new();
        for access in &self.category_order {
            if !seen.insert(access) {
                bail!("Access modifier '{}' appears more than once in the category order", access);
            }
        }
        Ok(())
    }
}

/// A successfully transformed file
#[derive(Debug, Clone)]
pub struct ReorderedFile {
    /// Output lines, terminators included
    pub lines: Vec<String>,

    /// Partition of the input
    pub sections: FileSections,

    /// How the class end was found
    pub footer: FooterLocation,

    /// Terminator used for inserted blank lines
    pub line_ending: LineEnding,

    /// Counts collected while reordering
    pub stats: ReorderStats,
}

impl ReorderedFile {
    /// The output as a single string
    pub fn content(&self) -> String {
        self.lines.concat()
    }
}

/// Outcome of a reorder attempt
#[derive(Debug, Clone)]
pub enum ReorderOutcome {
    /// The constructor signature was absent or its braces never closed
    ConstructorNotFound { signature: String },

    /// The file was transformed
    Reordered(ReorderedFile),
}
