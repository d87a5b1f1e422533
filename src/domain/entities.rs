//! Domain entities: core data structures

use std::fmt;

use crate::domain::DomainError;

/// Label given to children synthesized by [`Node::repair`].
pub const PLACEHOLDER_LABEL: &str = "UNKNOWN";

/// A yes/no answer steering the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Normalize a raw response (trimmed, case-insensitive).
    ///
    /// Only exactly `y` or `n` are accepted; `yes`, `no` and everything else
    /// yield `None`.
    pub fn parse(response: &str) -> Option<Self> {
        match response.trim().to_lowercase().as_str() {
            "y" => Some(Self::Yes),
            "n" => Some(Self::No),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

/// Structural classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// No children: a destination.
    Leaf,
    /// Both children: a yes/no decision point.
    Question,
    /// Exactly one child; `missing` names the absent branch.
    Malformed { missing: Answer },
}

/// A unit of the decision tree.
///
/// Holds either a question or a destination label. The `no` branch is
/// followed on a "n" answer, the `yes` branch on "y".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    pub no: Option<Box<Node>>,
    pub yes: Option<Box<Node>>,
}

impl Node {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            no: None,
            yes: None,
        }
    }

    pub fn question(label: impl Into<String>, no: Node, yes: Node) -> Self {
        Self {
            label: label.into(),
            no: Some(Box::new(no)),
            yes: Some(Box::new(yes)),
        }
    }

    pub fn shape(&self) -> Shape {
        match (&self.no, &self.yes) {
            (None, None) => Shape::Leaf,
            (Some(_), Some(_)) => Shape::Question,
            (None, Some(_)) => Shape::Malformed {
                missing: Answer::No,
            },
            (Some(_), None) => Shape::Malformed {
                missing: Answer::Yes,
            },
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.shape() == Shape::Leaf
    }

    pub fn is_question(&self) -> bool {
        self.shape() == Shape::Question
    }

    pub fn child(&self, answer: Answer) -> Option<&Node> {
        match answer {
            Answer::Yes => self.yes.as_deref(),
            Answer::No => self.no.as_deref(),
        }
    }

    pub fn child_mut(&mut self, answer: Answer) -> Option<&mut Node> {
        match answer {
            Answer::Yes => self.yes.as_deref_mut(),
            Answer::No => self.no.as_deref_mut(),
        }
    }

    /// Follow `path` from this node; `None` if a branch on the way is absent.
    pub fn descendant_mut(&mut self, path: &[Answer]) -> Option<&mut Node> {
        match path.split_first() {
            None => Some(self),
            Some((first, rest)) => self.child_mut(*first)?.descendant_mut(rest),
        }
    }

    /// Convert this destination into a question distinguishing it from `destination`.
    ///
    /// `answer` is what `destination` gives to `question`; the old label moves to
    /// the opposite branch. Nothing outside this node changes.
    pub fn graft(
        &mut self,
        question: impl Into<String>,
        destination: impl Into<String>,
        answer: Answer,
    ) -> Result<(), DomainError> {
        if !self.is_leaf() {
            return Err(DomainError::NotALeaf {
                label: self.label.clone(),
            });
        }

        let previous = Node::leaf(std::mem::replace(&mut self.label, question.into()));
        let added = Node::leaf(destination);
        let (yes, no) = match answer {
            Answer::Yes => (added, previous),
            Answer::No => (previous, added),
        };
        self.yes = Some(Box::new(yes));
        self.no = Some(Box::new(no));
        Ok(())
    }

    /// Fill every single missing child with a [`PLACEHOLDER_LABEL`] leaf.
    ///
    /// Returns the number of placeholders created. A second run finds
    /// nothing to patch.
    pub fn repair(&mut self) -> usize {
        let mut patched = 0;
        match self.shape() {
            Shape::Malformed {
                missing: Answer::No,
            } => {
                self.no = Some(Box::new(Node::leaf(PLACEHOLDER_LABEL)));
                patched += 1;
            }
            Shape::Malformed {
                missing: Answer::Yes,
            } => {
                self.yes = Some(Box::new(Node::leaf(PLACEHOLDER_LABEL)));
                patched += 1;
            }
            Shape::Leaf | Shape::Question => {}
        }
        if let Some(no) = self.no.as_deref_mut() {
            patched += no.repair();
        }
        if let Some(yes) = self.yes.as_deref_mut() {
            patched += yes.repair();
        }
        patched
    }

    /// Pre-order iterator: node, then its `no` subtree, then its `yes` subtree.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn depth(&self) -> usize {
        let no = self.no.as_deref().map_or(0, Node::depth);
        let yes = self.yes.as_deref().map_or(0, Node::depth);
        1 + no.max(yes)
    }

    /// Destination labels in pre-order.
    pub fn destinations(&self) -> Vec<&str> {
        self.iter()
            .filter(|n| n.is_leaf())
            .map(|n| n.label.as_str())
            .collect()
    }

    /// True when no node in the subtree has exactly one child.
    pub fn is_well_formed(&self) -> bool {
        self.iter()
            .all(|n| !matches!(n.shape(), Shape::Malformed { .. }))
    }
}

/// Pre-order traversal over a subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // yes first so that no is visited first
        if let Some(yes) = node.yes.as_deref() {
            self.stack.push(yes);
        }
        if let Some(no) = node.no.as_deref() {
            self.stack.push(no);
        }
        Some(node)
    }
}

/// A singly-rooted decision tree; `root == None` means nothing is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionTree {
    root: Option<Node>,
}

impl DecisionTree {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Replace the whole tree, returning the previous root.
    pub fn replace(&mut self, root: Node) -> Option<Node> {
        self.root.replace(root)
    }

    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::node_count)
    }
}
