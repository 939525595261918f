//! src/panels/help.rs
//!
//! Controls panel; the remove hints come straight from the panel registry.

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::form::PanelKind;

pub struct HelpPanel;

impl crate::ui::Panel for HelpPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines = vec![Line::from("TAB=Cursor  ENTER=Add  G=Generate  Q=Quit")];
        for kind in PanelKind::ALL {
            lines.push(Line::from(format!(
                "{}=Remove {}",
                kind.idx() + 1,
                kind.meta().option_label
            )));
        }
        let p = Paragraph::new(lines).block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
