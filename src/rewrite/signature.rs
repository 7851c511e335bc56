//! Old-syntax signature matching and parameter extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// `(fn <name> (<params>) -> <rest>` where `<params>` may hold one level of
/// nested `( ... )` groups. `rest` is `.+` and therefore stops at end of line.
static SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\((?P<keyword>fn)\s+(?P<name>\w+)\s+\((?P<params>[^)]*(?:\([^)]*\)[^)]*)*)\)\s+->\s+(?P<rest>.+)",
    )
    .expect("signature pattern is valid")
});

/// A single `(name type)` pair.
static PARAMETER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\w+)\s+(\w+)\)").expect("parameter pattern is valid"));

/// One parameter of an old-syntax signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub ty: &'a str,
}

/// A located old-syntax signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureMatch<'a> {
    /// Byte range from the opening marker up to the first byte of `rest`.
    /// This is the region replaced by [`SignatureMatch::flattened`].
    pub span: Range<usize>,
    pub keyword: &'a str,
    pub name: &'a str,
    /// Raw text between the parameter-list parentheses.
    pub params: &'a str,
    /// Everything after the arrow up to end of line. Passed through verbatim.
    pub rest: &'a str,
}

impl<'a> SignatureMatch<'a> {
    pub fn parameters(&self) -> Vec<Parameter<'a>> {
        extract_parameters(self.params)
    }

    /// Flat form of the matched head: `(fn name a i32 b i32 -> `.
    ///
    /// The rest clause is not included; it stays in the source untouched.
    pub fn flattened(&self) -> String {
        let mut out = String::with_capacity(self.span.len());
        out.push('(');
        out.push_str(self.keyword);
        out.push(' ');
        out.push_str(self.name);
        for param in self.parameters() {
            out.push(' ');
            out.push_str(param.name);
            out.push(' ');
            out.push_str(param.ty);
        }
        out.push_str(" -> ");
        out
    }
}

/// Pull every `(name type)` pair out of a raw parameter list, left to right.
///
/// Entries that are not exactly two word tokens in parentheses are dropped.
pub fn extract_parameters(params: &str) -> Vec<Parameter<'_>> {
    PARAMETER
        .captures_iter(params)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let ty = caps.get(2)?.as_str();
            Some(Parameter { name, ty })
        })
        .collect()
}

/// Locate every old-syntax signature in `source`.
///
/// After a match, scanning resumes at the start of its rest clause but is
/// bounded by the end of that match, so a second signature inside the rest
/// is found without reaching into the following lines.
pub fn find_signatures(source: &str) -> Vec<SignatureMatch<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;
    let mut limit = source.len();

    while pos < source.len() {
        let Some(caps) = SIGNATURE.captures_at(&source[..limit], pos) else {
            if limit == source.len() {
                break;
            }
            pos = limit;
            limit = source.len();
            continue;
        };
        let (Some(whole), Some(keyword), Some(name), Some(params), Some(rest)) = (
            caps.get(0),
            caps.name("keyword"),
            caps.name("name"),
            caps.name("params"),
            caps.name("rest"),
        ) else {
            break;
        };

        found.push(SignatureMatch {
            span: whole.start()..rest.start(),
            keyword: keyword.as_str(),
            name: name.as_str(),
            params: params.as_str(),
            rest: rest.as_str(),
        });
        pos = rest.start();
        limit = whole.end();
    }

    found
}
