//! Expression arena and forests.
//!
//! Trees built by stack reduction are strictly ownership-acyclic: each node
//! is referenced by at most one parent, nothing is shared, nothing points
//! back. They are stored flat in an [`ExprArena`] and addressed by
//! [`ExprId`] indices.

use std::fmt;

use crate::token::Token;
use crate::types::{Arity, TypeSignature};

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::ExprId;
    crate::static_assert_size!(ExprId, 4);
}

/// Children of a node. The variant is the node's arity, so a node can never
/// hold a different number of children than its kind declares.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprShape {
    Leaf,
    Unary(ExprId),
    Binary(ExprId, ExprId),
}

impl ExprShape {
    pub const fn arity(self) -> Arity {
        match self {
            ExprShape::Leaf => Arity::Nullary,
            ExprShape::Unary(_) => Arity::Unary,
            ExprShape::Binary(..) => Arity::Binary,
        }
    }
}

/// One node of an expression tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ExprNode {
    pub token: Token,
    pub shape: ExprShape,
}

impl ExprNode {
    pub fn arity(&self) -> Arity {
        self.shape.arity()
    }

    /// Signature derived from the token kind.
    pub fn signature(&self) -> TypeSignature {
        self.token.kind.signature()
    }

    pub fn left(&self) -> Option<ExprId> {
        match self.shape {
            ExprShape::Leaf => None,
            ExprShape::Unary(left) | ExprShape::Binary(left, _) => Some(left),
        }
    }

    pub fn right(&self) -> Option<ExprId> {
        match self.shape {
            ExprShape::Binary(_, right) => Some(right),
            ExprShape::Leaf | ExprShape::Unary(_) => None,
        }
    }
}

/// Flat storage for expression nodes.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    nodes: Vec<ExprNode>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { nodes: Vec::new() }
    }

    /// Create an arena sized for a token stream (one node per token).
    pub fn with_capacity(tokens: usize) -> Self {
        ExprArena {
            nodes: Vec::with_capacity(tokens),
        }
    }

    /// Allocate a node, returning its ID.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` nodes are allocated.
    pub fn alloc(&mut self, token: Token, shape: ExprShape) -> ExprId {
        let index = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("expression arena exceeds {} nodes", u32::MAX));
        self.nodes.push(ExprNode { token, shape });
        ExprId(index)
    }

    #[inline]
    pub fn get(&self, id: ExprId) -> &ExprNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consume the arena, yielding the nodes in allocation order.
    pub fn into_nodes(self) -> Vec<ExprNode> {
        self.nodes
    }
}

/// The output of tree building: an arena plus the roots of every
/// completed tree, stored in completion order.
#[derive(Clone, Default, Debug)]
pub struct Forest {
    arena: ExprArena,
    roots: Vec<ExprId>,
}

impl Forest {
    pub fn new(arena: ExprArena, roots: Vec<ExprId>) -> Self {
        Forest { arena, roots }
    }

    pub fn arena(&self) -> &ExprArena {
        &self.arena
    }

    #[inline]
    pub fn node(&self, id: ExprId) -> &ExprNode {
        self.arena.get(id)
    }

    /// Roots, most-recently-completed first.
    ///
    /// This is the order every later phase processes trees in.
    pub fn roots(&self) -> impl ExactSizeIterator<Item = ExprId> + '_ {
        self.roots.iter().rev().copied()
    }

    /// Number of independent trees.
    pub fn tree_count(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Split into the arena and the roots (completion order).
    pub fn into_parts(self) -> (ExprArena, Vec<ExprId>) {
        (self.arena, self.roots)
    }

    /// Render one tree as an s-expression, e.g. `(+ 3 4)`.
    pub fn render(&self, root: ExprId) -> String {
        let mut out = String::new();
        let mut work = vec![Render::Node(root)];
        while let Some(item) = work.pop() {
            match item {
                Render::Text(text) => out.push_str(text),
                Render::Node(id) => {
                    let node = self.node(id);
                    match node.shape {
                        ExprShape::Leaf => out.push_str(&node.token.to_string()),
                        ExprShape::Unary(left) => {
                            out.push('(');
                            out.push_str(&node.token.to_string());
                            work.push(Render::Text(")"));
                            work.push(Render::Node(left));
                            work.push(Render::Text(" "));
                        }
                        ExprShape::Binary(left, right) => {
                            out.push('(');
                            out.push_str(&node.token.to_string());
                            work.push(Render::Text(")"));
                            work.push(Render::Node(right));
                            work.push(Render::Text(" "));
                            work.push(Render::Node(left));
                            work.push(Render::Text(" "));
                        }
                    }
                }
            }
        }
        out
    }
}

/// Work item for the iterative renderer.
enum Render {
    Node(ExprId),
    Text(&'static str),
}
