//! Type checking for PPP expression trees.
//!
//! Every node's type comes from its token kind alone (see
//! [`TokenKind::signature`]), so checking is a single walk that compares
//! each child's result against the slot it fills. There is no inference and
//! no state shared between trees.
//!
//! [`TokenKind::signature`]: ppp_ir::TokenKind::signature

mod error;

use ppp_ir::{ExprId, Forest, TokenKind};

pub use error::{Slot, TypeError};

/// Check every tree in the forest, collecting all errors.
///
/// Pure: the forest is only read, so checking twice yields the same result.
#[tracing::instrument(level = "debug", skip_all, fields(trees = forest.tree_count()))]
pub fn check(forest: &Forest) -> Result<(), Vec<TypeError>> {
    let mut errors = Vec::new();
    for root in forest.roots() {
        check_tree(forest, root, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(errors = errors.len(), "type check failed");
        Err(errors)
    }
}

/// Visit every node of one tree, left subtree before right.
fn check_tree(forest: &Forest, root: ExprId, errors: &mut Vec<TypeError>) {
    let mut work = vec![root];
    while let Some(id) = work.pop() {
        let node = forest.node(id);
        let signature = node.signature();

        let slots = [
            (Slot::Left, node.left(), signature.left),
            (Slot::Right, node.right(), signature.right),
        ];
        for (slot, child, expected) in slots {
            let Some(child) = child else { continue };
            let operand = &forest.node(child).token;
            let found = operand.kind.signature().result;
            if !found.fits(expected) {
                errors.push(TypeError::Mismatch {
                    node: node.token.clone(),
                    slot,
                    expected,
                    found,
                    operand: operand.clone(),
                });
            }
        }

        if matches!(node.token.kind, TokenKind::Div | TokenKind::Mod) {
            if let Some(divisor) = node.right().map(|r| &forest.node(r).token) {
                if divisor.int_value() == Some(0) {
                    errors.push(TypeError::DivideByZero {
                        node: node.token.clone(),
                        divisor: divisor.clone(),
                    });
                }
            }
        }

        tracing::trace!(?id, token = ?node.token, "checked");

        if let Some(right) = node.right() {
            work.push(right);
        }
        if let Some(left) = node.left() {
            work.push(left);
        }
    }
}
