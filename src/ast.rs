//! The expression tree shared by every pass of the pipeline.
//!
//! A [`Node`] is a tagged sum type: identifiers, negation, n-ary
//! conjunction/disjunction, and the two comparison operators that the parser
//! produces for `=`/`==`/`!=`. Every rewrite pass (see [`crate::passes`])
//! consumes a tree and produces a new one; trees are never shared between
//! passes.

pub type TreeNode = Box<Node>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// An identifier: a symbol name, or one of the reserved literals `y`,
    /// `m`, `n`. Case is preserved; reserved-literal matching is
    /// case-insensitive and happens in [`crate::passes::symbol_expand`].
    Leaf(String),
    Not(TreeNode),
    /// Associative conjunction. At least one child; order is preserved
    /// through rewrites for test determinism, though it carries no
    /// semantic weight.
    And(Vec<Node>),
    Or(Vec<Node>),
    Eq(TreeNode, TreeNode),
    Neq(TreeNode, TreeNode),
}

impl Node {
    pub fn leaf(name: impl Into<String>) -> Node {
        Node::Leaf(name.into())
    }

    pub fn not(child: Node) -> Node {
        Node::Not(Box::new(child))
    }

    pub fn eq(left: Node, right: Node) -> Node {
        Node::Eq(Box::new(left), Box::new(right))
    }

    pub fn neq(left: Node, right: Node) -> Node {
        Node::Neq(Box::new(left), Box::new(right))
    }

    /// The root of a driver invocation is wrapped in a single-child `And`
    /// whenever it is a bare leaf or a top-level `Not`, so that the passes
    /// that case-split on `And`/`Or` roots see a uniform shape. Any other
    /// root is already such a shape.
    pub fn wrap_root(self) -> Node {
        match self {
            leaf @ Node::Leaf(_) => Node::And(vec![leaf]),
            not @ Node::Not(_) => Node::And(vec![not]),
            other => other,
        }
    }
}
