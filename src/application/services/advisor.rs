//! Travel advisor service
//!
//! Owns the decision tree and implements the four user-facing operations:
//! building the preset tree, running a recommendation session (learning a new
//! destination when the suggestion is rejected), and saving/loading the tree
//! in its text form.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use termtree::Tree;
use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::codec::{self, LoadWarning};
use crate::domain::{preset, Answer, DecisionTree, DomainError, Node, Shape};
use crate::infrastructure::traits::{FileSystem, Prompter};

/// Outcome of a completed recommendation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// The user accepted the suggested destination.
    Accepted { destination: String },
    /// The user rejected it and taught the tree a new destination.
    Learned {
        previous: String,
        added: String,
        question: String,
        answer: Answer,
    },
}

/// Summary of a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveReport {
    /// Nodes written (0 for an empty tree)
    pub nodes: usize,
    /// Placeholder leaves created by the repair pass
    pub repaired: usize,
}

/// Summary of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub nodes: usize,
    pub destinations: usize,
    pub warnings: Vec<LoadWarning>,
}

/// Service driving the decision tree.
pub struct AdvisorService {
    fs: Arc<dyn FileSystem>,
    tree: DecisionTree,
    /// File the current tree was last loaded from or saved to
    source: Option<PathBuf>,
    /// File loaded when a session starts without a tree and no name is given
    default_file: Option<PathBuf>,
}

impl AdvisorService {
    /// Create a service with no tree loaded.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            tree: DecisionTree::empty(),
            source: None,
            default_file: None,
        }
    }

    /// Use `path` when the user answers the initial file prompt with a blank line.
    pub fn with_default_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_file = Some(path.into());
        self
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    /// File backing the current tree; `None` for the preset or an installed tree.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Install an arbitrary tree, replacing the current one.
    pub fn install(&mut self, root: Node) {
        self.tree.replace(root);
        self.source = None;
    }

    /// Replace the current tree with the built-in taxonomy.
    #[instrument(skip(self))]
    pub fn build_default_tree(&mut self) {
        let root = preset::default_tree();
        info!("installed default tree: {} destinations", root.leaf_count());
        self.tree.replace(root);
        self.source = None;
    }

    /// Run one question/answer session.
    ///
    /// With no tree loaded the user is asked for a file to load first; a blank
    /// answer picks the default file. A rejected recommendation hands the reached leaf to
    /// [`AdvisorService::learn_new_destination`].
    #[instrument(skip_all)]
    pub fn run_recommendation(
        &mut self,
        prompter: &mut dyn Prompter,
    ) -> ApplicationResult<Recommendation> {
        if self.tree.is_empty() {
            let file = prompter
                .prompt_line("Enter file name to load decision tree:")
                .map_err(ApplicationError::prompt)?;
            let path = match file.trim() {
                "" => self.default_file.clone().ok_or(ApplicationError::NoTree)?,
                name => PathBuf::from(name),
            };
            let report = self.load_from_text(&path)?;
            for warning in &report.warnings {
                prompter.emit_warning(&warning.to_string());
            }
        }

        let root = self.tree.root().ok_or(ApplicationError::NoTree)?;
        let path = Self::descend(root, prompter)?;
        debug!("route: {:?}", path);

        let leaf = self
            .tree
            .root_mut()
            .and_then(|root| root.descendant_mut(&path))
            .ok_or(ApplicationError::NoTree)?;

        prompter.emit(&format!(
            "I recommend the following destination: {}",
            leaf.label
        ));
        let confirmation = prompter
            .prompt_line("Is this where you'd like to go? (y/n)")
            .map_err(ApplicationError::prompt)?;

        // anything but an explicit "n" counts as acceptance
        if Answer::parse(&confirmation) == Some(Answer::No) {
            return Self::learn_new_destination(leaf, prompter);
        }

        prompter.emit("Thank you for using the Travel Expert System.");
        info!("accepted: {}", leaf.label);
        Ok(Recommendation::Accepted {
            destination: leaf.label.clone(),
        })
    }

    /// Ask questions from `root` down to a destination, returning the answers given.
    fn descend(root: &Node, prompter: &mut dyn Prompter) -> ApplicationResult<Vec<Answer>> {
        let mut path = Vec::new();
        let mut current = root;
        loop {
            match current.shape() {
                Shape::Leaf => return Ok(path),
                Shape::Malformed { missing } => {
                    warn!("{:?} has no {} branch", current.label, missing);
                    return Err(DomainError::MalformedNode {
                        label: current.label.clone(),
                    }
                    .into());
                }
                Shape::Question => {
                    let answer = prompter
                        .prompt_yes_no(&current.label)
                        .map_err(ApplicationError::prompt)?;
                    path.push(answer);
                    current = current.child(answer).ok_or_else(|| {
                        DomainError::MalformedNode {
                            label: current.label.clone(),
                        }
                    })?;
                }
            }
        }
    }

    /// Teach the tree a destination the user preferred over `leaf`.
    ///
    /// Asks for the new destination, a question separating it from the
    /// current one, and the new destination's answer; then converts `leaf`
    /// into that question with both destinations as children.
    #[instrument(skip_all, fields(leaf = %leaf.label))]
    pub fn learn_new_destination(
        leaf: &mut Node,
        prompter: &mut dyn Prompter,
    ) -> ApplicationResult<Recommendation> {
        let previous = leaf.label.clone();
        let added = prompter
            .prompt_non_empty("Please tell me where you are thinking of going:")
            .map_err(ApplicationError::prompt)?;
        let question = prompter
            .prompt_non_empty(&format!(
                "Please give me a yes/no question that distinguishes between \"{previous}\" and \"{added}\":"
            ))
            .map_err(ApplicationError::prompt)?;
        let answer = prompter
            .prompt_yes_no(&format!(
                "For \"{added}\", what would the answer to that question be?"
            ))
            .map_err(ApplicationError::prompt)?;

        leaf.graft(question.clone(), added.clone(), answer)?;
        prompter.emit("Destination added. Thank you!");
        info!("learned {:?} next to {:?}", added, previous);

        Ok(Recommendation::Learned {
            previous,
            added,
            question,
            answer,
        })
    }

    /// Save the tree to `path` in pre-order text form.
    ///
    /// Single-child nodes are patched with placeholder leaves first; the patch
    /// stays in memory even if the write fails. An empty tree writes an empty
    /// file.
    #[instrument(skip(self))]
    pub fn save_as_text(&mut self, path: &Path) -> ApplicationResult<SaveReport> {
        let (content, report) = match self.tree.root_mut() {
            Some(root) => {
                let repaired = root.repair();
                if repaired > 0 {
                    warn!("patched {} missing child(ren) before saving", repaired);
                }
                let report = SaveReport {
                    nodes: root.node_count(),
                    repaired,
                };
                (codec::encode(root), report)
            }
            None => {
                warn!("saving empty tree");
                (
                    String::new(),
                    SaveReport {
                        nodes: 0,
                        repaired: 0,
                    },
                )
            }
        };

        self.fs
            .write_atomic(path, &content)
            .with_path_context("write tree", path)?;
        info!("saved {} node(s) to {}", report.nodes, path.display());
        self.source = Some(path.to_path_buf());
        Ok(report)
    }

    /// Load a tree from `path`, replacing the current one only on success.
    #[instrument(skip(self))]
    pub fn load_from_text(&mut self, path: &Path) -> ApplicationResult<LoadReport> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read tree", path)?;
        let decoded = codec::decode(&content)?;

        let report = LoadReport {
            nodes: decoded.root.node_count(),
            destinations: decoded.root.leaf_count(),
            warnings: decoded.warnings,
        };
        self.tree.replace(decoded.root);
        self.source = Some(path.to_path_buf());
        info!("loaded {} node(s) from {}", report.nodes, path.display());
        Ok(report)
    }

    /// Render the current tree for display, branches tagged `[no]`/`[yes]`.
    pub fn render(&self) -> Option<Tree<String>> {
        self.tree.root().map(|root| render_node(root, None))
    }
}

fn render_node(node: &Node, branch: Option<Answer>) -> Tree<String> {
    let text = match branch {
        Some(answer) => format!("[{}] {}", answer, node.label),
        None => node.label.clone(),
    };
    let mut tree = Tree::new(text);
    for answer in [Answer::No, Answer::Yes] {
        if let Some(child) = node.child(answer) {
            tree.push(render_node(child, Some(answer)));
        }
    }
    tree
}
