//! src/panels/results.rs
//!
//! Generation results panel: the latest motif set, or the reason there is none.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::motif::MotifSet;

pub struct ResultsPanel {
    pub set: Option<MotifSet>,
    pub status: String,
}

impl ResultsPanel {
    pub fn new(set: Option<MotifSet>, status: &str) -> Self {
        Self {
            set,
            status: status.to_string(),
        }
    }
}

impl crate::ui::Panel for ResultsPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            self.status.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if let Some(set) = &self.set {
            for (label, seqs) in [
                ("keys", &set.keys),
                ("payloads", &set.payloads),
                ("motifs", &set.motifs),
            ] {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
                    Span::raw(seqs.join(" ")),
                ]));
            }
        }
        let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title("Generated motifs")
                .borders(Borders::ALL),
        );
        f.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Panel;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(panel: &ResultsPanel) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.draw(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_state_shows_only_the_status() {
        let text = render(&ResultsPanel::new(None, "No motifs generated yet. Press G."));
        assert!(text.contains("No motifs generated yet."));
        assert!(!text.contains("payloads:"));
    }

    #[test]
    fn a_set_lists_keys_payloads_and_motifs() {
        let set = MotifSet {
            keys: vec!["AT".into(), "GC".into()],
            payloads: vec!["CCA".into()],
            motifs: vec!["ATCCAAT".into()],
        };
        let text = render(&ResultsPanel::new(Some(set), "Generated 1 motif."));
        assert!(text.contains("keys: AT GC"));
        assert!(text.contains("motifs: ATCCAAT"));
    }
}
