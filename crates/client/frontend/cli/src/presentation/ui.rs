//! Screen layout: header line, bordered map panel and key help footer.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;

const HELP: &str =
    "drag: pan  click: select  wheel/+/-: zoom  arrows: pan  c: clear  r: recenter  q: quit";

/// Areas of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub map_block: Rect,
    /// Drawable interior of the map panel.
    pub map: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Map
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            map_block: chunks[1],
            map: map_block().inner(chunks[1]),
            footer: chunks[2],
        }
    }
}

fn map_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(" Map ")
}

/// Renders everything except the map contents.
pub fn render_chrome(frame: &mut Frame, layout: &ScreenLayout, status: &str) {
    let header = Line::from(vec![
        Span::styled("Wormhole ", theme::header()),
        Span::styled(status.to_string(), theme::status()),
    ]);
    frame.render_widget(Paragraph::new(header), layout.header);
    frame.render_widget(map_block(), layout.map_block);
    frame.render_widget(
        Paragraph::new(Span::styled(HELP, theme::footer())),
        layout.footer,
    );
}
