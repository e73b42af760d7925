/// Stack growth for deeply nested programs.
///
/// Parsing and evaluation are both recursive over the syntax tree, so a
/// program nested deeply enough would overflow the native stack. The helper
/// here grows the stack on demand before each recursive step.
pub mod stack;
