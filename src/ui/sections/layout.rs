// SPDX-License-Identifier: MPL-2.0
//! Presentation-independent layout tree.
//!
//! Presenters build a [`Node`] tree; `ui::render` turns it into iced widgets.
//! Colors are [`ColorRole`]s and animation is attached by [`MotionKey`], so
//! the tree itself is theme- and time-independent.

use crate::ui::motion::MotionKey;
use crate::ui::theming::ColorRole;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weight {
    #[default]
    Regular,
    Semibold,
    Black,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub content: String,
    pub size: f32,
    pub role: ColorRole,
    pub weight: Weight,
    pub align: Align,
    /// Draws a caret while the text is still being revealed.
    pub caret: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageNode {
    /// Resolved path; may not exist.
    pub path: PathBuf,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    /// Static rotation in degrees, added to any animated rotation.
    pub rotation: f32,
}

/// Canvas-drawn ornaments.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    /// Soft blurred disc.
    Blob { role: ColorRole, diameter: f32 },
    /// Labels placed evenly on a circle, highlighted under the pointer and
    /// spun by the enclosing motion's `rotate`. The `caption` is drawn at
    /// the centre and replaced by the hovered label.
    Orbit {
        labels: Vec<String>,
        radius: f32,
        caption: Option<String>,
    },
    /// Wireframe globe with ring and particles.
    Globe { size: f32 },
    /// Square grid backdrop.
    Grid { cell: f32, width: f32, height: f32 },
    /// Vertical ladder with evenly spaced rungs.
    Ladder { rungs: usize, width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Column {
        children: Vec<Node>,
        spacing: f32,
        align: Align,
        max_width: Option<f32>,
    },
    Row {
        children: Vec<Node>,
        spacing: f32,
        align: Align,
        wrap: bool,
    },
    Text(TextNode),
    Image(ImageNode),
    Card {
        child: Box<Node>,
        padding: f32,
        background: ColorRole,
        border: ColorRole,
        radius: f32,
    },
    /// Button opening an external target.
    Link {
        label: String,
        target: String,
    },
    /// Applies the sampled state of `key` to the subtree.
    Motion {
        key: MotionKey,
        child: Box<Node>,
    },
    /// Reports pointer enter/exit/press/move for `key`.
    Interactive {
        key: MotionKey,
        child: Box<Node>,
    },
    /// Stacked layers, first at the back; the first one sizes the stack.
    Layers(Vec<Node>),
    /// Places a child within its parent. `left` and `top` split the free
    /// space around the child: `0.0` hugs the start, `0.5` centres and `1.0`
    /// hugs the end.
    Positioned {
        left: f32,
        top: f32,
        child: Box<Node>,
    },
    Decoration(Decoration),
    Spacer(f32),
}

// =============================================================================
// Builders
// =============================================================================

impl Node {
    #[must_use]
    pub fn column(children: Vec<Node>) -> Self {
        Node::Column {
            children,
            spacing: 0.0,
            align: Align::Start,
            max_width: None,
        }
    }

    #[must_use]
    pub fn row(children: Vec<Node>) -> Self {
        Node::Row {
            children,
            spacing: 0.0,
            align: Align::Center,
            wrap: false,
        }
    }

    #[must_use]
    pub fn text(content: impl Into<String>, size: f32, role: ColorRole) -> Self {
        Node::Text(TextNode {
            content: content.into(),
            size,
            role,
            weight: Weight::Regular,
            align: Align::Start,
            caret: false,
        })
    }

    #[must_use]
    pub fn image(path: PathBuf, width: f32, height: f32) -> Self {
        Node::Image(ImageNode {
            path,
            width,
            height,
            radius: 0.0,
            rotation: 0.0,
        })
    }

    #[must_use]
    pub fn card(child: Node, padding: f32, radius: f32) -> Self {
        Node::Card {
            child: Box::new(child),
            padding,
            background: ColorRole::CardBackground,
            border: ColorRole::CardBorder,
            radius,
        }
    }

    #[must_use]
    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Node::Link {
            label: label.into(),
            target: target.into(),
        }
    }

    #[must_use]
    pub fn animated(key: MotionKey, child: Node) -> Self {
        Node::Motion {
            key,
            child: Box::new(child),
        }
    }

    #[must_use]
    pub fn interactive(key: MotionKey, child: Node) -> Self {
        Node::Interactive {
            key,
            child: Box::new(child),
        }
    }

    #[must_use]
    pub fn positioned(left: f32, top: f32, child: Node) -> Self {
        Node::Positioned {
            left: left.clamp(0.0, 1.0),
            top: top.clamp(0.0, 1.0),
            child: Box::new(child),
        }
    }

    // -------------------------------------------------------------------------
    // Modifiers
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn spacing(mut self, value: f32) -> Self {
        if let Node::Column { spacing, .. } | Node::Row { spacing, .. } = &mut self {
            *spacing = value;
        }
        self
    }

    #[must_use]
    pub fn align(mut self, value: Align) -> Self {
        match &mut self {
            Node::Column { align, .. } | Node::Row { align, .. } => *align = value,
            Node::Text(text) => text.align = value,
            _ => {}
        }
        self
    }

    #[must_use]
    pub fn max_width(mut self, value: f32) -> Self {
        if let Node::Column { max_width, .. } = &mut self {
            *max_width = Some(value);
        }
        self
    }

    #[must_use]
    pub fn wrapping(mut self) -> Self {
        if let Node::Row { wrap, .. } = &mut self {
            *wrap = true;
        }
        self
    }

    #[must_use]
    pub fn weight(mut self, value: Weight) -> Self {
        if let Node::Text(text) = &mut self {
            text.weight = value;
        }
        self
    }

    #[must_use]
    pub fn with_caret(mut self) -> Self {
        if let Node::Text(text) = &mut self {
            text.caret = true;
        }
        self
    }

    #[must_use]
    pub fn rounded(mut self, value: f32) -> Self {
        match &mut self {
            Node::Image(image) => image.radius = value,
            Node::Card { radius, .. } => *radius = value,
            _ => {}
        }
        self
    }

    #[must_use]
    pub fn rotated(mut self, degrees: f32) -> Self {
        if let Node::Image(image) = &mut self {
            image.rotation = degrees;
        }
        self
    }

    #[must_use]
    pub fn background(mut self, role: ColorRole) -> Self {
        if let Node::Card { background, .. } = &mut self {
            *background = role;
        }
        self
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    /// Direct children, in order.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Column { children, .. } | Node::Row { children, .. } | Node::Layers(children) => {
                children.iter().collect()
            }
            Node::Card { child, .. }
            | Node::Motion { child, .. }
            | Node::Interactive { child, .. }
            | Node::Positioned { child, .. } => vec![child.as_ref()],
            Node::Text(_)
            | Node::Image(_)
            | Node::Link { .. }
            | Node::Decoration(_)
            | Node::Spacer(_) => Vec::new(),
        }
    }

    /// Depth-first visit of every node.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Every text string in the tree, including link labels.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| match node {
            Node::Text(text) => out.push(text.content.as_str()),
            Node::Link { label, .. } => out.push(label.as_str()),
            _ => {}
        });
        out
    }

    /// Every image in the tree.
    #[must_use]
    pub fn images(&self) -> Vec<&ImageNode> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Image(image) = node {
                out.push(image);
            }
        });
        out
    }

    /// Every motion key referenced by `Motion` or `Interactive` wrappers.
    #[must_use]
    pub fn motion_keys(&self) -> Vec<MotionKey> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Motion { key, .. } | Node::Interactive { key, .. } = node {
                out.push(*key);
            }
        });
        out
    }

    /// Every color role the tree asks for.
    #[must_use]
    pub fn color_roles(&self) -> Vec<ColorRole> {
        let mut out = Vec::new();
        self.walk(&mut |node| match node {
            Node::Text(text) => out.push(text.role),
            Node::Card {
                background, border, ..
            } => {
                out.push(*background);
                out.push(*border);
            }
            Node::Decoration(Decoration::Blob { role, .. }) => out.push(*role),
            _ => {}
        });
        out
    }
}
