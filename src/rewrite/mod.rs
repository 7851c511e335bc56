//! @dose
//! purpose: Rewrites AISL function signatures from the nested parameter syntax
//!     `(fn add ((a i32) (b i32)) -> i32` to the flat syntax `(fn add a i32 b i32 -> i32`.
//!     This is a pure text transform: no parsing, no AST, just pattern match and substitute.
//!
//! when-editing:
//!     - !Only the signature head (marker, keyword, name, parameter list, arrow) is replaced
//!     - !The rest clause after the arrow stays byte-for-byte identical
//!     - Parameter entries that are not exactly `(word word)` are dropped from the output
//!
//! invariants:
//!     - Text with no old-syntax signature comes back borrowed and unchanged
//!     - flatten_signatures(flatten_signatures(x)) == flatten_signatures(x)
//!     - Parameters keep their declaration order
//!
//! gotchas:
//!     - The rest clause ends at the end of its line, never at end of input
//!     - A signature inside another signature's rest clause (same line) is rewritten too;
//!       the search for it never runs past that line
//!     - Parameter lists nested deeper than `((name (list t)))` don't match and pass through

mod signature;

pub use signature::{extract_parameters, find_signatures, Parameter, SignatureMatch};

use std::borrow::Cow;

/// Flatten every old-syntax signature in `source`.
pub fn flatten_signatures(source: &str) -> Cow<'_, str> {
    apply_signatures(source, &find_signatures(source))
}

/// Splice the flat form of `signatures` (as found by [`find_signatures`]
/// on the same `source`) into `source`.
pub fn apply_signatures<'a>(
    source: &'a str,
    signatures: &[SignatureMatch<'_>],
) -> Cow<'a, str> {
    if signatures.is_empty() {
        return Cow::Borrowed(source);
    }

    let mut out = String::with_capacity(source.len());
    let mut last = 0;
    for sig in signatures {
        out.push_str(&source[last..sig.span.start]);
        out.push_str(&sig.flattened());
        last = sig.span.end;
    }
    out.push_str(&source[last..]);

    Cow::Owned(out)
}
