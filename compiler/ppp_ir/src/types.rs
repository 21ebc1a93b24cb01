//! Value type tags and operator signatures.

use std::fmt;

/// Value category a node produces or expects.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueType {
    /// The node has no result (printing, control markers).
    None,
    /// Identifier whose type this pass does not resolve; unifies with anything.
    Unknown,
    Integer,
    String,
}

impl ValueType {
    /// Check whether a child producing `self` may fill a slot expecting `expected`.
    ///
    /// Identifiers (`Unknown`) fit every slot.
    #[inline]
    pub fn fits(self, expected: ValueType) -> bool {
        self == ValueType::Unknown || self == expected
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ValueType::None => "no value",
            ValueType::Unknown => "identifier",
            ValueType::Integer => "integer",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of operand children a node requires.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arity {
    Nullary,
    Unary,
    Binary,
}

impl Arity {
    /// Number of operands as a count.
    pub const fn operands(self) -> usize {
        match self {
            Arity::Nullary => 0,
            Arity::Unary => 1,
            Arity::Binary => 2,
        }
    }
}

/// `(result, expected-left, expected-right)` for one token kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeSignature {
    pub result: ValueType,
    pub left: ValueType,
    pub right: ValueType,
}

impl TypeSignature {
    pub const fn leaf(result: ValueType) -> Self {
        TypeSignature {
            result,
            left: ValueType::None,
            right: ValueType::None,
        }
    }

    pub const fn unary(result: ValueType, left: ValueType) -> Self {
        TypeSignature {
            result,
            left,
            right: ValueType::None,
        }
    }

    pub const fn binary(result: ValueType, left: ValueType, right: ValueType) -> Self {
        TypeSignature {
            result,
            left,
            right,
        }
    }
}
