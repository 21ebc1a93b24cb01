//! Binary operator implementations for the stack machine.

use ppp_ir::{Token, TokenKind};

use crate::RuntimeError;

/// Apply a binary operator to `left op right`.
///
/// Returns `None` if `op` is not a binary operator the machine executes.
pub(crate) fn evaluate_binary(
    op: &Token,
    left: i64,
    right: i64,
) -> Option<Result<i64, RuntimeError>> {
    let overflow = || RuntimeError::IntegerOverflow { op: op.clone() };
    let result = match op.kind {
        TokenKind::Add => left.checked_add(right).ok_or_else(overflow),
        TokenKind::Sub => left.checked_sub(right).ok_or_else(overflow),
        TokenKind::Mul => left.checked_mul(right).ok_or_else(overflow),
        TokenKind::Div if right == 0 => Err(RuntimeError::DivisionByZero { op: op.clone() }),
        TokenKind::Div => left.checked_div(right).ok_or_else(overflow),
        TokenKind::Mod if right == 0 => Err(RuntimeError::ModuloByZero { op: op.clone() }),
        TokenKind::Mod => left.checked_rem(right).ok_or_else(overflow),
        TokenKind::BitAnd => Ok(left & right),
        TokenKind::Shl => shift_amount(op, right).map(|n| left << n),
        TokenKind::Shr => shift_amount(op, right).map(|n| left >> n),
        TokenKind::Less => Ok(i64::from(left < right)),
        TokenKind::Greater => Ok(i64::from(left > right)),
        _ => return None,
    };
    Some(result)
}

fn shift_amount(op: &Token, amount: i64) -> Result<u32, RuntimeError> {
    u32::try_from(amount)
        .ok()
        .filter(|n| *n < i64::BITS)
        .ok_or_else(|| RuntimeError::InvalidShift {
            op: op.clone(),
            amount,
        })
}
