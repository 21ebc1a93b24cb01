//! Stack machine for PPP.
//!
//! Executes a linearized [`Program`](ppp_ir::Program) against a single
//! stack of `i64` values. All arithmetic is checked: overflow, a zero
//! divisor and out-of-range shifts are errors, never wrapped or ignored.

mod errors;
mod machine;
mod operators;

pub use errors::RuntimeError;
pub use machine::Machine;
