pub mod reassembler;
pub mod reorderer;
pub mod stats;

pub use reorderer::{MemberReorderer, CONSTRUCTOR_NOT_FOUND_MESSAGE, DRY_RUN_MESSAGE, SUCCESS_MESSAGE};
pub use stats::{ExcludedMethod, ReorderStats};
