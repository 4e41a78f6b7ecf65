use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, PRIMARY};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title and subtitle bar across the top of the screen.
pub struct Header<'a> {
    title: &'a str,
    subtitle: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self { title, subtitle }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let title_style = Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD);
        let subtitle_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let lines = vec![
            Line::from(Span::styled(self.title, title_style)),
            Line::from(Span::styled(self.subtitle, subtitle_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(PRIMARY))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
