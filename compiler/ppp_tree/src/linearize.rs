//! Post-order linearization.

use ppp_ir::{ExprId, Forest, Program, Token};
use ppp_stack::ensure_sufficient_stack;

/// Flatten a forest into an execution-ordered program.
///
/// Roots are emitted most-recently-completed first; within a tree the order
/// is left subtree, right subtree, then the node itself. Consumes the
/// forest: every token moves into the program exactly once.
#[tracing::instrument(level = "debug", skip_all, fields(trees = forest.tree_count()))]
pub fn linearize(forest: Forest) -> Program {
    let mut order = Vec::with_capacity(forest.arena().len());
    for root in forest.roots() {
        let start = order.len();
        post_order(&forest, root, &mut order);
        if tracing::enabled!(tracing::Level::DEBUG) {
            let ops: Vec<&str> = order[start..]
                .iter()
                .map(|id| forest.node(*id).token.text.as_str())
                .collect();
            tracing::debug!(?root, ops = %ops.join(" "), "tree linearized");
        }
    }

    let (arena, _) = forest.into_parts();
    let mut slots: Vec<Option<Token>> = arena
        .into_nodes()
        .into_iter()
        .map(|node| Some(node.token))
        .collect();
    let ops = order
        .into_iter()
        .filter_map(|id| slots[id.index()].take())
        .collect();
    Program::new(ops)
}

fn post_order(forest: &Forest, id: ExprId, out: &mut Vec<ExprId>) {
    ensure_sufficient_stack(|| {
        let node = forest.node(id);
        if let Some(left) = node.left() {
            post_order(forest, left, out);
        }
        if let Some(right) = node.right() {
            post_order(forest, right, out);
        }
        out.push(id);
    });
}

#[cfg(test)]
mod tests;
