//! src/ui/node.rs
//!
//! Recursive layout Node + Panel trait used across the UI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Node tree used to compose the UI each frame. Each group child carries its
/// own layout constraint.
pub enum Node {
    Group {
        direction: Direction,
        children: Vec<(Constraint, Node)>,
    },
    Leaf {
        panel: Box<dyn Panel>,
    },
}

impl Node {
    /// Draw the node into the given area.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Group {
                direction,
                children,
            } => {
                let constraints: Vec<Constraint> = children.iter().map(|(c, _)| *c).collect();
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints)
                    .split(area);
                for ((_, child), chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf { panel } => {
                panel.draw(f, area);
            }
        }
    }
}

/// Helper: create a group node from (constraint, child) pairs.
pub fn group(direction: Direction, children: Vec<(Constraint, Node)>) -> Node {
    Node::Group {
        direction,
        children,
    }
}

/// Helper: create a leaf node.
pub fn leaf(panel: Box<dyn Panel>) -> Node {
    Node::Leaf { panel }
}

/// Helper: split an area evenly among children.
pub fn stack(direction: Direction, children: Vec<Node>) -> Node {
    let n = children.len().max(1) as u32;
    Node::Group {
        direction,
        children: children
            .into_iter()
            .map(|child| (Constraint::Ratio(1, n), child))
            .collect(),
    }
}
