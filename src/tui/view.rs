//! Structural description of the composed UI.
//!
//! Screens describe what they render as a tree of [`ViewNode`]s. The tree is
//! what `--print-tree` prints and what tests inspect; the terminal renderer
//! draws from the same layout.

use serde::Serialize;

use super::keyboard_avoiding::KeyboardBehavior;

/// Top-level screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Back action and title
    Header,
    /// Centered logo image
    Logo,
    /// Form container
    Form,
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Stack navigator hosting the visible route
    Navigator {
        /// Visible route name
        route: String,
        /// Whether header chrome is drawn
        header_shown: bool,
    },
    /// Keyboard avoidance wrapper
    KeyboardAvoiding {
        /// Behavior in effect
        behavior: KeyboardBehavior,
    },
    /// Background gradient
    LinearGradient {
        /// Hex stops, start first
        colors: [String; 2],
    },
    /// Vertically scrollable content
    ScrollView,
    /// Pressable area
    Pressable {
        /// What pressing does, for diagnostics
        action: String,
    },
    /// Image or icon
    Image {
        /// Asset name
        asset: String,
        /// Tint color as hex, if any
        #[serde(skip_serializing_if = "Option::is_none")]
        tint: Option<String>,
        /// False when a placeholder is drawn instead
        available: bool,
    },
    /// Text label
    Text {
        /// Label content
        content: String,
        /// Font family
        font: String,
    },
    /// Plain layout container
    Container,
}

/// A node in the view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewNode {
    /// What the node draws
    #[serde(flatten)]
    pub kind: NodeKind,
    /// Region this node roots, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Child nodes, top to bottom
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    /// A leaf node.
    #[must_use]
    pub const fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            region: None,
            children: Vec::new(),
        }
    }

    /// A node with children.
    #[must_use]
    pub const fn with_children(kind: NodeKind, children: Vec<Self>) -> Self {
        Self {
            kind,
            region: None,
            children,
        }
    }

    /// Tags this node as the root of `region`.
    #[must_use]
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Depth-first iterator over this node and all descendants.
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Regions in document order.
    #[must_use]
    pub fn regions(&self) -> Vec<Region> {
        self.iter().filter_map(|n| n.region).collect()
    }

    /// Subtree rooted at `region`.
    #[must_use]
    pub fn find_region(&self, region: Region) -> Option<&Self> {
        self.iter().find(|n| n.region == Some(region))
    }

    /// Number of nodes matching `pred`.
    pub fn count(&self, pred: impl Fn(&NodeKind) -> bool) -> usize {
        self.iter().filter(|n| pred(&n.kind)).count()
    }

    /// Number of nodes the user can interact with.
    #[must_use]
    pub fn interactive_count(&self) -> usize {
        self.count(|kind| matches!(kind, NodeKind::Pressable { .. }))
    }
}
