/// Configuration options for the JSON tree parser.
///
/// # Examples
///
/// ```rust
/// use jsontree::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     max_nesting_depth: Some(2),
///     ..Default::default()
/// };
/// assert!(parse_with_options(b"[[1]]", options).is_ok());
/// assert!(parse_with_options(b"[[[1]]]", options).is_err());
/// ```
///
/// # Default
///
/// No depth limit, trailing content rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of nested objects and arrays.
    ///
    /// The tree builder recurses once per nesting level, so a pathologically
    /// deep document can exhaust the call stack. Setting a limit turns that
    /// into a `NestingTooDeep` syntax error instead.
    ///
    /// # Default
    ///
    /// `None` (unbounded)
    pub max_nesting_depth: Option<usize>,

    /// Whether to accept tokens after the root value.
    ///
    /// When `true`, parsing stops after the first complete value and the rest
    /// of the input is ignored, as in `{"a":1} garbage`.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_content: bool,
}
