use crate::ui::app::App;
use crate::ui::controls::Control;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, score_layout};
use crate::ui::theme::{BUTTON_TEXT, CARD_BORDER, DANGER, MUTED_TEXT, PRIMARY};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const SCORE_CAPTION: &str = "Current Score";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title(), app.subtitle()).widget(), header);
    frame.render_widget(Clear, body);

    let layout = score_layout(body);
    frame.render_widget(score_card(app.score().label()), layout.card);
    for control in Control::ALL {
        let focused = app.focus().is_focused(control);
        frame.render_widget(button(control, focused), layout.button(control));
    }

    frame.render_widget(Footer::new(app.focus().focused).widget(footer), footer);
}

fn score_card(label: &str) -> Paragraph<'_> {
    let lines = vec![
        Line::from(Span::styled(SCORE_CAPTION, Style::default().fg(MUTED_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            label,
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        )),
    ];
    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER)),
    )
}

fn button(control: Control, focused: bool) -> Paragraph<'static> {
    let color = match control {
        Control::AddPoint => PRIMARY,
        Control::Reset => DANGER,
    };
    let (text_style, border_style) = if focused {
        (
            Style::default()
                .fg(BUTTON_TEXT)
                .bg(color)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(color), Style::default().fg(color))
    };

    Paragraph::new(Line::from(control.label()))
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
}
