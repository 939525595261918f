//! src/panels/selector.rs
//!
//! Selector panel: the dropdown analog listing not-yet-added constraints.
//!
//! Renders the placeholder entry followed by the current option list; the entry
//! under the cursor is highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::SharedForm;

/// Renders the selector's option list; `cursor` 0 is the placeholder.
pub struct SelectorPanel {
    pub shared: SharedForm,
    pub cursor: usize,
}

impl SelectorPanel {
    pub fn new(shared: SharedForm, cursor: usize) -> Self {
        Self { shared, cursor }
    }
}

impl crate::ui::Panel for SelectorPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let g = self.shared.read().unwrap();

        let mut entries: Vec<String> = vec!["(select a constraint)".to_string()];
        entries.extend(g.options.iter().map(|o| o.label.to_string()));

        let lines: Vec<Line> = entries
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                if i == self.cursor {
                    Line::from(Span::styled(
                        format!("> {}", label),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::raw(format!("  {}", label)))
                }
            })
            .collect();

        let block = Block::default().title("Add constraint").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
