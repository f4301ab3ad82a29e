//! @ai:module:intent Recognize public non-static method declarations in a source line
//! @ai:module:layer domain
//! @ai:module:public_api MethodMatcher
//! @ai:module:stateless true

use regex::Regex;

/// Textual pattern for public method declarations, e.g. `public void blah(`,
/// `public Map<Integer, String> blah(Map<Integer, Double> m)`. The return
/// type is a single token, so `public static void blah(` never matches.
const PUBLIC_METHOD_PATTERN: &str = r"public\s+\w+(?:<.*>)?\s+(\w+)\(";

/// @ai:intent Best-effort textual matcher for public, non-static method declarations
///
/// Deliberately not a parser: the pattern is isolated behind this type so an
/// AST-backed recognizer could replace it without touching the rewriter.
#[derive(Debug)]
pub struct MethodMatcher {
    pattern: Regex,
}

impl Default for MethodMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodMatcher {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(PUBLIC_METHOD_PATTERN).expect("Invalid regex"),
        }
    }

    /// @ai:intent Extract the method name if the line declares a public non-static method
    /// @ai:example ("public void doThing() {") -> Some("doThing")
    /// @ai:example ("public static void doThing() {") -> None
    /// @ai:effects pure
    pub fn method_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}
