//! The stack machine.

use std::io::Write;

use ppp_ir::{Program, Token, TokenKind};

use crate::operators::evaluate_binary;
use crate::RuntimeError;

/// Executes a program against one operand stack, writing printed values to
/// `out`.
pub struct Machine<W: Write> {
    out: W,
    stack: Vec<i64>,
}

impl<W: Write> Machine<W> {
    pub fn new(out: W) -> Self {
        Machine {
            out,
            stack: Vec::new(),
        }
    }

    /// Run every instruction in order, returning the final stack.
    ///
    /// Stops at the first failing instruction.
    #[tracing::instrument(level = "debug", skip_all, fields(ops = program.len()))]
    pub fn run(mut self, program: &Program) -> Result<Vec<i64>, RuntimeError> {
        for op in program.ops() {
            self.step(op)?;
        }
        tracing::debug!(depth = self.stack.len(), "program finished");
        Ok(self.stack)
    }

    fn step(&mut self, op: &Token) -> Result<(), RuntimeError> {
        tracing::trace!(?op, stack = ?self.stack, "exec");
        match op.kind {
            TokenKind::IntLiteral => {
                let value = op
                    .int_value()
                    .ok_or_else(|| RuntimeError::IntegerOverflow { op: op.clone() })?;
                self.stack.push(value);
            }
            TokenKind::Not => {
                let value = self.pop(op)?;
                self.stack.push(i64::from(value == 0));
            }
            TokenKind::PrintLine => {
                let value = self.peek(op)?;
                self.emit(op, format_args!("{value}\n"))?;
            }
            TokenKind::Print => {
                let value = self.peek(op)?;
                self.emit(op, format_args!("{value}"))?;
            }
            TokenKind::Add
            | TokenKind::Sub
            | TokenKind::Mul
            | TokenKind::Div
            | TokenKind::Mod
            | TokenKind::BitAnd
            | TokenKind::Shl
            | TokenKind::Shr
            | TokenKind::Less
            | TokenKind::Greater => {
                // Right operand was pushed last.
                let right = self.pop(op)?;
                let left = self.pop(op)?;
                let value = evaluate_binary(op, left, right)
                    .ok_or_else(|| RuntimeError::UnsupportedOperation { op: op.clone() })??;
                self.stack.push(value);
            }
            TokenKind::StrLiteral
            | TokenKind::Ident
            | TokenKind::Assign
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Loop
            | TokenKind::Do
            | TokenKind::Done
            | TokenKind::EndOfLine => {
                return Err(RuntimeError::UnsupportedOperation { op: op.clone() });
            }
        }
        Ok(())
    }

    fn pop(&mut self, op: &Token) -> Result<i64, RuntimeError> {
        self.stack
            .pop()
            .ok_or_else(|| RuntimeError::StackUnderflow { op: op.clone() })
    }

    fn peek(&self, op: &Token) -> Result<i64, RuntimeError> {
        self.stack
            .last()
            .copied()
            .ok_or_else(|| RuntimeError::StackUnderflow { op: op.clone() })
    }

    fn emit(&mut self, op: &Token, args: std::fmt::Arguments<'_>) -> Result<(), RuntimeError> {
        self.out
            .write_fmt(args)
            .and_then(|()| self.out.flush())
            .map_err(|source| RuntimeError::Output {
                op: op.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests;
