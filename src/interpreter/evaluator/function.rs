/// The `clock` native.
pub mod clock;

/// The `Callable` trait, native functions and call evaluation.
pub mod core;
