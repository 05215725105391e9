//! Canonical output tree.
//!
//! [`Node`] serializes to the hast shape (`{"type": "text", ...}` /
//! `{"type": "element", "tagName": "span", ...}`) so compiled trees can be fed
//! straight into HTML-AST tooling without an intermediate conversion.

use serde::{Deserialize, Serialize};

/// Tag name every element node serializes with.
pub const ELEMENT_TAG: &str = "span";

/// A node of a highlighted tree.
///
/// Nodes are plain values: equality is structural and a compiled tree is owned
/// entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "HastNode", try_from = "HastNode")]
pub enum Node {
	/// Verbatim source text.
	Text(String),
	/// A labeled group of child nodes.
	Element {
		class_list: Vec<String>,
		children: Vec<Node>,
	},
}

impl Node {
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}

	pub fn element<S: Into<String>>(class_list: impl IntoIterator<Item = S>, children: Vec<Node>) -> Self {
		Self::Element {
			class_list: class_list.into_iter().map(Into::into).collect(),
			children,
		}
	}

	pub fn is_text(&self) -> bool {
		matches!(self, Self::Text(_))
	}

	/// Class list of an element; empty for text nodes.
	pub fn class_list(&self) -> &[String] {
		match self {
			Self::Text(_) => &[],
			Self::Element { class_list, .. } => class_list,
		}
	}

	/// Children of an element; empty for text nodes.
	pub fn children(&self) -> &[Node] {
		match self {
			Self::Text(_) => &[],
			Self::Element { children, .. } => children,
		}
	}

	/// Concatenated text of this subtree, in document order.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.push_text(&mut out);
		out
	}

	fn push_text(&self, out: &mut String) {
		match self {
			Self::Text(value) => out.push_str(value),
			Self::Element { children, .. } => {
				for child in children {
					child.push_text(out);
				}
			}
		}
	}
}

/// Concatenated text of a node sequence.
pub fn text_content(nodes: &[Node]) -> String {
	let mut out = String::new();
	for node in nodes {
		node.push_text(&mut out);
	}
	out
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum HastNode {
	Text {
		value: String,
	},
	Element {
		#[serde(rename = "tagName")]
		tag_name: String,
		properties: HastProperties,
		children: Vec<HastNode>,
	},
}

#[derive(Serialize, Deserialize)]
struct HastProperties {
	#[serde(rename = "className")]
	class_name: Vec<String>,
}

impl From<Node> for HastNode {
	fn from(node: Node) -> Self {
		match node {
			Node::Text(value) => Self::Text { value },
			Node::Element { class_list, children } => Self::Element {
				tag_name: ELEMENT_TAG.to_string(),
				properties: HastProperties { class_name: class_list },
				children: children.into_iter().map(Into::into).collect(),
			},
		}
	}
}

impl TryFrom<HastNode> for Node {
	type Error = String;

	fn try_from(node: HastNode) -> Result<Self, Self::Error> {
		match node {
			HastNode::Text { value } => Ok(Self::Text(value)),
			HastNode::Element {
				tag_name,
				properties,
				children,
			} => {
				if tag_name != ELEMENT_TAG {
					return Err(format!("unsupported tagName `{tag_name}`, expected `{ELEMENT_TAG}`"));
				}
				Ok(Self::Element {
					class_list: properties.class_name,
					children: children.into_iter().map(Node::try_from).collect::<Result<_, _>>()?,
				})
			}
		}
	}
}
