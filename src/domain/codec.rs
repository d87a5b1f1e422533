//! Line-oriented text format for decision trees
//!
//! One node per line, pre-order (node, `no` subtree, `yes` subtree):
//! - `Q:<question>` opens a question whose two subtrees follow
//! - `A:<destination>` is a leaf
//!
//! There is no node count or bracketing; structure is recovered from the
//! prefixes and the order in which lines are consumed.

use std::fmt;

use tracing::{trace, warn};

use crate::domain::{DomainError, Node};

pub const QUESTION_PREFIX: &str = "Q:";
pub const ANSWER_PREFIX: &str = "A:";

/// Non-fatal issue found while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A question whose `no` or `yes` subtree could not be reconstructed.
    MissingChild { label: String },
    /// Lines left after the root subtree was complete.
    TrailingLines { count: usize },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingChild { label } => {
                write!(f, "question node \"{label}\" is missing a child")
            }
            Self::TrailingLines { count } => {
                write!(f, "ignored {count} line(s) after the end of the tree")
            }
        }
    }
}

/// Result of decoding a tree document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub root: Node,
    pub warnings: Vec<LoadWarning>,
}

/// Serialize a subtree in pre-order, one line per node.
///
/// Single-child nodes are emitted as questions followed by their one subtree;
/// run [`Node::repair`] first to keep the output loadable.
pub fn encode(root: &Node) -> String {
    let mut out = String::new();
    encode_into(root, &mut out);
    out
}

fn encode_into(node: &Node, out: &mut String) {
    if node.is_leaf() {
        out.push_str(ANSWER_PREFIX);
        out.push_str(&node.label);
        out.push('\n');
        return;
    }
    out.push_str(QUESTION_PREFIX);
    out.push_str(&node.label);
    out.push('\n');
    if let Some(no) = node.no.as_deref() {
        encode_into(no, out);
    }
    if let Some(yes) = node.yes.as_deref() {
        encode_into(yes, out);
    }
}

/// Rebuild a tree from its text form.
///
/// Fails only when there is nothing to build: an empty document or a first
/// line without a recognized prefix. Damage deeper in the tree is kept in
/// place and reported as [`LoadWarning::MissingChild`].
pub fn decode(content: &str) -> Result<Decoded, DomainError> {
    let mut lines = content.lines();
    let first = match lines.clone().next() {
        Some(line) => line.to_string(),
        None => return Err(DomainError::EmptyDocument),
    };

    let mut warnings = Vec::new();
    let root = decode_node(&mut lines, &mut warnings)
        .ok_or(DomainError::UnrecognizedRoot { line: first })?;

    let trailing = lines.count();
    if trailing > 0 {
        warn!("ignoring {} trailing line(s)", trailing);
        warnings.push(LoadWarning::TrailingLines { count: trailing });
    }

    Ok(Decoded { root, warnings })
}

/// Consume one node and, for questions, both of its subtrees from `cursor`.
///
/// An exhausted cursor or an unrecognized line yields `None`.
fn decode_node<'a, I>(cursor: &mut I, warnings: &mut Vec<LoadWarning>) -> Option<Node>
where
    I: Iterator<Item = &'a str>,
{
    let line = cursor.next()?;
    trace!("decode: {:?}", line);

    if let Some(label) = line.strip_prefix(ANSWER_PREFIX) {
        return Some(Node::leaf(label.trim()));
    }

    let label = line.strip_prefix(QUESTION_PREFIX)?.trim().to_string();
    let no = decode_node(cursor, warnings).map(Box::new);
    let yes = decode_node(cursor, warnings).map(Box::new);
    if no.is_none() || yes.is_none() {
        warn!("question node {:?} is missing a child", label);
        warnings.push(LoadWarning::MissingChild {
            label: label.clone(),
        });
    }
    Some(Node { label, no, yes })
}
