//! src/panels/constraint.rs
//!
//! Constraint panel: one togglable form section showing its parameter fields
//! and, where the panel carries hidden fields, their current flag values.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::{PanelKind, SharedForm};

/// Renders a single constraint panel while it is visible.
pub struct ConstraintPanel {
    pub shared: SharedForm,
    pub kind: PanelKind,
}

impl ConstraintPanel {
    pub fn new(shared: SharedForm, kind: PanelKind) -> Self {
        Self { shared, kind }
    }
}

impl crate::ui::Panel for ConstraintPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let g = self.shared.read().unwrap();
        let panel = g.panel(self.kind);
        if !panel.visible {
            // collapsed panels get no area from the layout; guard anyway
            return;
        }
        let meta = self.kind.meta();

        let mut lines: Vec<Line> = panel
            .fields
            .iter()
            .map(|field| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", field.name),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        field.value.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();

        if let (Some(selected), Some(visible)) = (meta.selected_flag, meta.visible_flag) {
            lines.push(Line::from(Span::styled(
                format!(
                    "{}='{}'  {}={}",
                    selected,
                    g.flags.get(selected),
                    visible,
                    g.flags.get(visible)
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("[{}] remove", self.kind.idx() + 1),
            Style::default().fg(Color::Red),
        )));

        let block = Block::default()
            .title(meta.option_label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(meta.color));
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
