//! The routing tree as an explicit node table.

use crate::error::RouterError;

/// One node of the routing tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterNode {
    /// Ask a fixed question and move to `yes` or `no` (indices into the node table).
    Ask {
        question: &'static str,
        yes: usize,
        no: usize,
    },

    /// A terminal bucket.
    Leaf { bucket: &'static str },
}

/// Index of the root node.
pub const ROOT: usize = 0;

const STANDARD_NODES: &[RouterNode] = &[
    // 0
    RouterNode::Ask {
        question: "Has it ever been alive?",
        yes: 1,
        no: 7,
    },
    // 1
    RouterNode::Ask {
        question: "Is it a person?",
        yes: 2,
        no: 3,
    },
    RouterNode::Leaf { bucket: "people" },
    // 3
    RouterNode::Ask {
        question: "Is it an animal?",
        yes: 4,
        no: 5,
    },
    RouterNode::Leaf { bucket: "animals" },
    // 5
    RouterNode::Ask {
        question: "Can you eat it?",
        yes: 6,
        no: 18,
    },
    RouterNode::Leaf { bucket: "foods" },
    // 7
    RouterNode::Ask {
        question: "Is it a place?",
        yes: 8,
        no: 9,
    },
    RouterNode::Leaf { bucket: "places" },
    // 9
    RouterNode::Ask {
        question: "Is it a physical object?",
        yes: 10,
        no: 11,
    },
    // 10
    RouterNode::Ask {
        question: "Is it man-made?",
        yes: 12,
        no: 13,
    },
    RouterNode::Leaf { bucket: "concepts" },
    // 12
    RouterNode::Ask {
        question: "Is it mechanical?",
        yes: 14,
        no: 15,
    },
    RouterNode::Leaf {
        bucket: "natural_objects",
    },
    RouterNode::Leaf { bucket: "machines" },
    // 15
    RouterNode::Ask {
        question: "Is it used daily?",
        yes: 16,
        no: 17,
    },
    RouterNode::Leaf {
        bucket: "everyday_items",
    },
    RouterNode::Leaf { bucket: "artifacts" },
    // 18
    RouterNode::Leaf { bucket: "plants" },
];

/// A validated routing tree.
#[derive(Debug, Clone)]
pub struct RoutingTree {
    nodes: Vec<RouterNode>,
}

impl RoutingTree {
    /// Build a tree from a node table rooted at index 0.
    ///
    /// The table must form a proper binary tree: every child index in bounds and
    /// every node reachable from the root exactly once.
    pub fn new(nodes: Vec<RouterNode>) -> Result<Self, RouterError> {
        if nodes.is_empty() {
            return Err(RouterError::InvalidTree("no nodes".to_string()));
        }

        let mut visited = vec![false; nodes.len()];
        let mut stack = vec![ROOT];

        while let Some(index) = stack.pop() {
            if visited[index] {
                return Err(RouterError::InvalidTree(format!(
                    "node {index} is reachable more than once"
                )));
            }
            visited[index] = true;

            if let RouterNode::Ask { yes, no, .. } = nodes[index] {
                for child in [yes, no] {
                    if child >= nodes.len() {
                        return Err(RouterError::InvalidTree(format!(
                            "node {index} points to missing node {child}"
                        )));
                    }
                    stack.push(child);
                }
            }
        }

        if let Some(orphan) = visited.iter().position(|seen| !seen) {
            return Err(RouterError::InvalidTree(format!(
                "node {orphan} is unreachable"
            )));
        }

        Ok(Self { nodes })
    }

    /// The built-in tree of coarse opening questions.
    pub fn standard() -> Self {
        Self {
            nodes: standard_nodes(),
        }
    }

    /// Node at `index`, or `None` past the end of the table.
    pub fn get(&self, index: usize) -> Option<RouterNode> {
        self.nodes.get(index).copied()
    }

    /// Node at an index already known to be valid, such as a child of a validated node.
    pub(crate) fn node(&self, index: usize) -> RouterNode {
        self.nodes[index]
    }

    pub fn nodes(&self) -> &[RouterNode] {
        &self.nodes
    }

    /// Bucket names of all leaves, in table order.
    pub fn leaves(&self) -> Vec<&'static str> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                RouterNode::Leaf { bucket } => Some(*bucket),
                RouterNode::Ask { .. } => None,
            })
            .collect()
    }

    /// Number of distinct questions in the tree.
    pub fn question_count(&self) -> usize {
        self.nodes.len() - self.leaves().len()
    }

    /// Longest root-to-leaf path, counted in questions.
    pub fn max_depth(&self) -> usize {
        self.depth_from(ROOT)
    }

    fn depth_from(&self, index: usize) -> usize {
        match self.nodes[index] {
            RouterNode::Leaf { .. } => 0,
            RouterNode::Ask { yes, no, .. } => 1 + self.depth_from(yes).max(self.depth_from(no)),
        }
    }
}

impl Default for RoutingTree {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_nodes() -> Vec<RouterNode> {
    STANDARD_NODES.to_vec()
}
