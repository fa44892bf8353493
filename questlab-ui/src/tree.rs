//! A tree widget's model, stored as an arena of nodes addressed by
//! [`NodeId`].

use crate::{UiError, UiResult, View};
use questlab_model::{QuestLog, QuestStatus};

/// Index of a node in its [`TreeModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    label: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeModel {
    nodes: Vec<Node>,
}

impl TreeModel {
    /// A tree with a single expanded root.
    pub fn new(root_label: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node {
                label: root_label.into(),
                parent: None,
                children: Vec::new(),
                expanded: true,
            }],
        }
    }

    /// Quest categories (one per status that has quests) with their quests
    /// underneath, titled `"Title (progress/target)"`.
    pub fn from_quest_log(log: &QuestLog) -> Self {
        let mut tree = Self::new("Quests");
        let root = tree.root();
        for status in [
            QuestStatus::Active,
            QuestStatus::Available,
            QuestStatus::Completed,
            QuestStatus::Abandoned,
        ] {
            let mut quests = log.with_status(status).peekable();
            if quests.peek().is_none() {
                continue;
            }
            let category = tree.push(root, capitalize(&status.to_string()));
            for quest in quests {
                tree.push(
                    category,
                    format!("{} ({}/{})", quest.title, quest.progress(), quest.target()),
                );
            }
        }
        tree
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: the root always exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> UiResult<&Node> {
        self.nodes.get(id.0).ok_or(UiError::UnknownNode(id.0))
    }

    fn node_mut(&mut self, id: NodeId) -> UiResult<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(UiError::UnknownNode(id.0))
    }

    fn push(&mut self, parent: NodeId, label: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            label,
            parent: Some(parent),
            children: Vec::new(),
            expanded: true,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Adds a child under `parent`. New nodes start expanded.
    pub fn add_child(&mut self, parent: NodeId, label: impl Into<String>) -> UiResult<NodeId> {
        self.node(parent)?;
        Ok(self.push(parent, label.into()))
    }

    pub fn label(&self, id: NodeId) -> UiResult<&str> {
        Ok(&self.node(id)?.label)
    }

    pub fn children(&self, id: NodeId) -> UiResult<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    pub fn parent(&self, id: NodeId) -> UiResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    /// First node with this label, in depth-first order.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.walk(self.root(), 0, false)
            .into_iter()
            .map(|(_, id)| id)
            .find(|id| self.nodes[id.0].label == label)
    }

    /// Labels from the root down to `id`.
    pub fn path_to(&self, id: NodeId) -> UiResult<Vec<&str>> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id)?;
            path.push(node.label.as_str());
            current = node.parent;
        }
        path.reverse();
        Ok(path)
    }

    pub fn expand(&mut self, id: NodeId) -> UiResult<()> {
        self.node_mut(id)?.expanded = true;
        Ok(())
    }

    pub fn collapse(&mut self, id: NodeId) -> UiResult<()> {
        self.node_mut(id)?.expanded = false;
        Ok(())
    }

    /// Flips the node and returns whether it is now expanded.
    pub fn toggle(&mut self, id: NodeId) -> UiResult<bool> {
        let node = self.node_mut(id)?;
        node.expanded = !node.expanded;
        Ok(node.expanded)
    }

    pub fn is_expanded(&self, id: NodeId) -> UiResult<bool> {
        Ok(self.node(id)?.expanded)
    }

    /// Visible nodes in display order with their depth. Children of a
    /// collapsed node are hidden.
    #[must_use]
    pub fn flatten(&self) -> Vec<(usize, NodeId)> {
        self.walk(self.root(), 0, true)
    }

    fn walk(&self, id: NodeId, depth: usize, visible_only: bool) -> Vec<(usize, NodeId)> {
        let mut out = Vec::new();
        let mut stack = vec![(depth, id)];
        while let Some((depth, id)) = stack.pop() {
            out.push((depth, id));
            let node = &self.nodes[id.0];
            if visible_only && !node.expanded {
                continue;
            }
            for &child in node.children.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl View for TreeModel {
    fn title(&self) -> &str {
        &self.nodes[0].label
    }

    /// Two spaces per level; `+` marks a collapsed node with children,
    /// `-` an expanded one.
    fn render(&self) -> String {
        self.flatten()
            .into_iter()
            .map(|(depth, id)| {
                let node = &self.nodes[id.0];
                let marker = match (node.children.is_empty(), node.expanded) {
                    (true, _) => ' ',
                    (false, true) => '-',
                    (false, false) => '+',
                };
                format!("{}{marker} {}", "  ".repeat(depth), node.label)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
