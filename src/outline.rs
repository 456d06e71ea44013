//! Table-of-contents construction from the flat heading sequence.
//!
//! The builder reconstructs a nested forest from headings whose levels may
//! jump arbitrarily (an h1 followed directly by an h4). It is pure data
//! construction over an arena of nodes with index-based children lists; the
//! sidebar projection is a separate single pass over the finished tree.
//!
//! The algorithm keeps a stack of open list contexts, seeded with the root.
//! A heading deeper than the stack opens one nested context per missing
//! level beneath the last node of the current context, synthesizing an empty
//! placeholder parent when that context has no last node yet. A heading
//! shallower than the stack pops contexts until depths agree. Headings are
//! processed strictly in document order; siblings are never reordered.

use crate::heading::Heading;
use serde::Serialize;

/// A node in the table-of-contents forest.
///
/// `heading` indexes into the collected sequence; `None` marks a synthetic
/// placeholder that carries no jump target but provides nesting structure.
/// Children are always strictly deeper than their parent and preserve
/// document order.
#[derive(Clone, Debug)]
pub struct TocNode {
    /// Index of this node's heading in the collected sequence.
    pub heading: Option<usize>,
    /// Arena indices of directly nested nodes.
    pub children: Vec<usize>,
}

/// The table-of-contents forest: an arena of nodes plus the top-level list.
#[derive(Clone, Debug, Default)]
pub struct TocTree {
    /// All nodes, in creation order.
    pub nodes: Vec<TocNode>,
    /// Arena indices of the top-level nodes.
    pub roots: Vec<usize>,
}

impl TocTree {
    fn push(&mut self, heading: Option<usize>) -> usize {
        self.nodes.push(TocNode {
            heading,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Append `node` to the list a context designates: the root list for
    /// `None`, a node's children otherwise.
    fn attach(&mut self, context: Option<usize>, node: usize) {
        match context {
            None => self.roots.push(node),
            Some(parent) => self.nodes[parent].children.push(node),
        }
    }

    fn last_of(&self, context: Option<usize>) -> Option<usize> {
        match context {
            None => self.roots.last().copied(),
            Some(parent) => self.nodes[parent].children.last().copied(),
        }
    }
}

/// Build the forest from the collected heading sequence.
///
/// An empty sequence yields an empty tree; the caller routes that to the
/// degradation guard instead of rendering a sidebar.
#[must_use]
pub fn build(headings: &[Heading]) -> TocTree {
    let mut tree = TocTree::default();
    let mut stack: Vec<Option<usize>> = vec![None];

    for (index, heading) in headings.iter().enumerate() {
        while heading.level > stack.len() {
            let context = stack.last().copied().unwrap_or(None);
            let parent = match tree.last_of(context) {
                Some(last) => last,
                None => {
                    let placeholder = tree.push(None);
                    tree.attach(context, placeholder);
                    placeholder
                }
            };
            stack.push(Some(parent));
        }
        while heading.level < stack.len() {
            stack.pop();
        }
        let node = tree.push(Some(index));
        let context = stack.last().copied().unwrap_or(None);
        tree.attach(context, node);
    }
    tree
}

/// One rendered sidebar row: the projection of a node at its nesting depth.
///
/// Rows with a `target` are the anchor links the scrollspy resolves against;
/// placeholder rows are kept for structure but are not navigable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocRow {
    /// Nesting depth, 1 for top-level rows.
    pub depth: usize,
    /// Display text, empty for placeholders.
    pub text: String,
    /// Heading id this row jumps to and highlights for.
    pub target: Option<String>,
    /// Whether the row can take the cursor and be jumped to.
    pub navigable: bool,
}

/// Flatten the forest into sidebar rows, depth-first in document order.
#[must_use]
pub fn flatten(tree: &TocTree, headings: &[Heading]) -> Vec<TocRow> {
    let mut rows = Vec::new();
    for &root in &tree.roots {
        flatten_into(tree, headings, root, 1, &mut rows);
    }
    rows
}

fn flatten_into(
    tree: &TocTree,
    headings: &[Heading],
    node: usize,
    depth: usize,
    rows: &mut Vec<TocRow>,
) {
    let row = match tree.nodes[node].heading {
        Some(h) => TocRow {
            depth,
            text: headings[h].text.clone(),
            target: Some(headings[h].id.clone()),
            navigable: true,
        },
        None => TocRow {
            depth,
            text: String::new(),
            target: None,
            navigable: false,
        },
    };
    rows.push(row);
    for &child in &tree.nodes[node].children {
        flatten_into(tree, headings, child, depth + 1, rows);
    }
}

/// Serializable nested projection of the forest for the `--outline` mode.
#[derive(Clone, Debug, Serialize)]
pub struct OutlineNode {
    /// Heading text, empty for placeholders.
    pub title: String,
    /// Anchor id, absent for placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Nested outline entries.
    pub children: Vec<OutlineNode>,
}

/// Project the forest into its serializable nested form.
#[must_use]
pub fn outline_of(tree: &TocTree, headings: &[Heading]) -> Vec<OutlineNode> {
    tree.roots
        .iter()
        .map(|&root| outline_node(tree, headings, root))
        .collect()
}

fn outline_node(tree: &TocTree, headings: &[Heading], node: usize) -> OutlineNode {
    let (title, id) = match tree.nodes[node].heading {
        Some(h) => (headings[h].text.clone(), Some(headings[h].id.clone())),
        None => (String::new(), None),
    };
    OutlineNode {
        title,
        id,
        children: tree.nodes[node]
            .children
            .iter()
            .map(|&child| outline_node(tree, headings, child))
            .collect(),
    }
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
