/// The `Value` enum and its conversions, truthiness, equality and display.
///
/// Every expression evaluates to a `Value`. Values are cheap to clone:
/// strings and callables are reference counted and never mutated.
pub mod core;
