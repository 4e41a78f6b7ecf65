use crate::ui::controls::Control;
use crate::ui::theme::{DANGER, GLOBAL_BORDER, HEADER_TEXT, PRIMARY};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints in display order: (keys, action).
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("+/a/↑", "add"),
    ("r/0/Del", "reset"),
    ("Tab/←→", "focus"),
    ("Enter", "press"),
    ("q", "quit"),
];

/// Bottom bar: the focused button, the shortcuts, and the version when
/// there is room for it.
pub struct Footer {
    focused: Control,
}

impl Footer {
    pub fn new(focused: Control) -> Self {
        Self { focused }
    }

    pub fn line(&self, width: u16) -> Line<'static> {
        let key_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let focus_color = match self.focused {
            Control::AddPoint => PRIMARY,
            Control::Reset => DANGER,
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                format!("[{}]", self.focused.label()),
                Style::default().fg(focus_color).add_modifier(Modifier::BOLD),
            ),
        ];
        for (keys, action) in SHORTCUTS {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(*keys, key_style));
            spans.push(Span::styled(format!(" {action}"), text_style));
        }

        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let version = format!("v{VERSION} ");
        let content_width = width.saturating_sub(2) as usize; // minus borders
        let version_width = version.chars().count();
        if used + 1 + version_width <= content_width {
            let padding = content_width - used - version_width;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(version, text_style));
        }

        Line::from(spans)
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        Paragraph::new(self.line(area.width)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
