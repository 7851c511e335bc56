//! @dose
//! purpose: Library crate root for aisl-convert. Exposes the signature rewriter as a pure
//!     text transform alongside the batch command used by the binary.
//!
//! when-editing:
//!     - !All public modules must be declared here with pub mod
//!     - Keep the re-export list organized by module
//!
//! invariants:
//!     - The rewrite module has no filesystem access; commands own all I/O
//!
//! gotchas:
//!     - lib.rs is separate from main.rs - library consumers get lib, CLI gets main

pub mod cli;
pub mod collect;
pub mod commands;
pub mod error;
pub mod rewrite;

// Re-export main types for convenience
pub use cli::{Cli, ConvertArgs, USAGE};
pub use collect::{collect_targets, Target};
pub use commands::{convert_file, run_convert, ConvertSummary, FileOutcome, FileReport};
pub use error::ConvertError;
pub use rewrite::{
    apply_signatures, extract_parameters, find_signatures, flatten_signatures, Parameter,
    SignatureMatch,
};
