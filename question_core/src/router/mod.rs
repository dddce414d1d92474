//! Initial Router - a fixed decision tree of coarse questions.
//!
//! The router runs before any per-noun data is consulted. Each answer moves one
//! step down the tree until a leaf names the bucket the adaptive rounds start
//! from. Its questions are the only hard-coded domain questions in the engine.

mod tree;

pub use tree::*;

use crate::error::RouterError;

/// A completed walk through the routing tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub bucket: &'static str,
    /// Number of answers consumed to reach the bucket.
    pub consumed: usize,
}

/// Result of feeding one answer to a [`RouterCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStep {
    /// Another router question must be answered.
    Ask(&'static str),

    /// The walk reached a bucket.
    Bucket(&'static str),
}

/// Incremental walk through a routing tree, one answer at a time.
#[derive(Debug, Clone)]
pub struct RouterCursor<'t> {
    tree: &'t RoutingTree,
    position: usize,
    answered: usize,
}

impl<'t> RouterCursor<'t> {
    /// Start at the root of the tree.
    pub fn new(tree: &'t RoutingTree) -> Self {
        Self {
            tree,
            position: ROOT,
            answered: 0,
        }
    }

    /// The question or bucket at the current position.
    pub fn current(&self) -> RouteStep {
        match self.tree.node(self.position) {
            RouterNode::Ask { question, .. } => RouteStep::Ask(question),
            RouterNode::Leaf { bucket } => RouteStep::Bucket(bucket),
        }
    }

    /// Answer the current question. Answers given at a leaf are ignored.
    pub fn answer(&mut self, answer: bool) -> RouteStep {
        if let RouterNode::Ask { yes, no, .. } = self.tree.node(self.position) {
            self.position = if answer { yes } else { no };
            self.answered += 1;
        }
        self.current()
    }

    pub fn answered(&self) -> usize {
        self.answered
    }
}

impl RoutingTree {
    /// Start an incremental walk.
    pub fn cursor(&self) -> RouterCursor<'_> {
        RouterCursor::new(self)
    }

    /// Walk the tree with a complete answer sequence.
    ///
    /// The sequence must end exactly at a leaf.
    pub fn route(&self, answers: &[bool]) -> Result<Route, RouterError> {
        let mut cursor = self.cursor();

        for (consumed, &answer) in answers.iter().enumerate() {
            if let RouteStep::Bucket(_) = cursor.current() {
                return Err(RouterError::UnusedAnswers {
                    consumed,
                    extra: answers.len() - consumed,
                });
            }
            cursor.answer(answer);
        }

        match cursor.current() {
            RouteStep::Bucket(bucket) => Ok(Route {
                bucket,
                consumed: cursor.answered(),
            }),
            RouteStep::Ask(_) => Err(RouterError::IncompleteAnswers {
                answered: cursor.answered(),
            }),
        }
    }
}
