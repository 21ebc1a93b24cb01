//! PPP IR - shared data structures for the PPP pipeline.
//!
//! This crate contains the types every phase agrees on:
//! - [`Token`] / [`TokenKind`] / [`Position`] produced by the scanner
//! - [`ValueType`], [`TypeSignature`] and [`Arity`], derived from a token kind
//! - [`ExprArena`] / [`Forest`], the expression trees built by stack reduction
//! - [`Program`], the linear instruction sequence run by the stack machine
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: tree nodes live in one arena, children are
//!   addressed by [`ExprId`] indices. No `Box`, no `Rc`.
//! - **Closed kinds**: every per-kind table (arity, signature, label) is an
//!   exhaustive `match`, so adding a kind fails to compile until it is
//!   classified everywhere.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod program;
mod token;
mod types;

pub use arena::{ExprArena, ExprId, ExprNode, ExprShape, Forest};
pub use program::Program;
pub use token::{Position, Token, TokenKind};
pub use types::{Arity, TypeSignature, ValueType};
