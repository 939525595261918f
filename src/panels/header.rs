//! src/panels/header.rs
//!
//! Header panel: app title plus a count of active constraints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::{PanelKind, SharedForm};

pub struct HeaderPanel {
    pub title: String,
    pub shared: SharedForm,
}

impl HeaderPanel {
    pub fn new(title: &str, shared: SharedForm) -> Self {
        Self {
            title: title.to_string(),
            shared,
        }
    }
}

impl crate::ui::Panel for HeaderPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let g = self.shared.read().unwrap();
        let active = g.visible_panels().len();
        let line = Line::from(vec![
            Span::styled(
                self.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "   {} of {} constraints active",
                active,
                PanelKind::ALL.len()
            )),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
