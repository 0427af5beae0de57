//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;


/// Enumeration of branch and leaf nodes.
///
/// A branch tests one attribute and owns one child
/// per attribute value observed while growing the tree.
/// There is no fallback child for unseen values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on an attribute.
    Branch {
        /// Position of the attribute in the example values.
        attribute: usize,
        /// Name of the attribute.
        name: String,
        /// Children keyed by attribute value. Never empty.
        children: BTreeMap<String, Node>,
    },
    /// A node that predicts a label.
    Leaf {
        /// Predicted label.
        label: String,
    },
}


impl Node {
    /// Returns a branch node.
    #[inline]
    pub fn branch(
        attribute: usize,
        name: String,
        children: BTreeMap<String, Node>,
    ) -> Self
    {
        debug_assert!(!children.is_empty(), "A branch needs a child");
        Self::Branch { attribute, name, children, }
    }


    /// Returns a leaf node that predicts `label`.
    #[inline]
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf { label: label.into(), }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the predicted label of a leaf,
    /// or the attribute name of a branch.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Self::Branch { name, .. } => name,
            Self::Leaf { label } => label,
        }
    }


    /// Returns the children of a branch. Leaves have none.
    #[inline]
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Self::Branch { children, .. } => Some(children),
            Self::Leaf { .. } => None,
        }
    }


    /// Returns the number of branches on the longest path
    /// from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.values()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Returns the number of leaves below this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.values().map(Node::n_leaves).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Returns the number of nodes below this node, itself included.
    pub fn n_nodes(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.values().map(Node::n_nodes).sum::<usize>()
            },
            Self::Leaf { .. } => 1,
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { name, children, .. } => {
                let name = escape(name);
                let mut info = vec![
                    format!("\tnode_{id} [ label = \"{name} ?\" ];\n"),
                ];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);

                    let value = escape(value);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n"
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf { label } => {
                let label = escape(label);
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box, ];\n"
                );

                (vec![info], id + 1)
            },
        }
    }


    fn header(&self) -> String {
        match self {
            Self::Branch { name, .. } => format!("[{name}]"),
            Self::Leaf { label } => label.clone(),
        }
    }


    fn write_children(&self, f: &mut fmt::Formatter<'_>, prefix: &str)
        -> fmt::Result
    {
        let Self::Branch { children, .. } = self else { return Ok(()); };

        let n_children = children.len();
        for (i, (value, child)) in children.iter().enumerate() {
            let (joint, pad) = if i + 1 == n_children {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            writeln!(f, "{prefix}{joint}{value}: {}", child.header())?;
            child.write_children(f, &format!("{prefix}{pad}"))?;
        }
        Ok(())
    }
}


fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}


impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        self.write_children(f, "")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> Node {
        let inner = BTreeMap::from([
            ("high".to_string(), Node::leaf("Yes")),
            ("low".to_string(), Node::leaf("No")),
        ]);
        let root = BTreeMap::from([
            ("high".to_string(), Node::leaf("No")),
            ("low".to_string(), Node::branch(1, "Quality".into(), inner)),
        ]);
        Node::branch(0, "Price".into(), root)
    }


    #[test]
    fn shape_queries() {
        let tree = small_tree();
        assert!(!tree.is_leaf());
        assert_eq!(tree.name(), "Price");
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 3);
        assert_eq!(tree.n_nodes(), 5);
        assert_eq!(Node::leaf("No").n_nodes(), 1);
        assert!(Node::leaf("Yes").children().is_none());
    }


    #[test]
    fn renders_as_indented_tree() {
        let text = small_tree().to_string();
        let expected = [
            "[Price]",
            "├── high: No",
            "└── low: [Quality]",
            "    ├── high: Yes",
            "    └── low: No",
        ].join("\n") + "\n";
        assert_eq!(text, expected);
    }


    #[test]
    fn dot_info_numbers_nodes_in_preorder() {
        let (info, next_id) = small_tree().to_dot_info(0);
        assert_eq!(next_id, 5);
        assert!(info.iter().any(|row| row.contains("node_0 -- node_2")));
        assert!(info.iter().any(|row| row.contains("node_2 [ label = \"Quality ?\" ]")));
    }
}
