use ratatui::layout::{Position, Rect};

use crate::ui::controls::Control;

pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;

/// Border, caption, spacer, value, border.
const CARD_HEIGHT: u16 = 5;
const BUTTON_WIDTH: u16 = 17;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Placement of the score card and the two buttons inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLayout {
    pub card: Rect,
    pub add_button: Rect,
    pub reset_button: Rect,
}

impl ScoreLayout {
    pub fn button(&self, control: Control) -> Rect {
        match control {
            Control::AddPoint => self.add_button,
            Control::Reset => self.reset_button,
        }
    }

    /// Button under the given cell, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position { x: column, y: row };
        Control::ALL
            .into_iter()
            .find(|control| self.button(*control).contains(position))
    }
}

/// Card as wide as the button row and centred horizontally, with the
/// buttons one line below it; the whole group is centred vertically.
/// Rects are clipped to `body`.
pub fn score_layout(body: Rect) -> ScoreLayout {
    let row_width = BUTTON_WIDTH * 2 + BUTTON_GAP;
    let content_height = CARD_HEIGHT + 1 + BUTTON_HEIGHT;
    let top = body.y + body.height.saturating_sub(content_height) / 2;

    let card_width = row_width.min(body.width);
    let card = Rect {
        x: body.x + body.width.saturating_sub(card_width) / 2,
        y: top,
        width: card_width,
        height: CARD_HEIGHT,
    };

    let buttons_y = top + CARD_HEIGHT + 1;
    let start_x = body.x + body.width.saturating_sub(row_width) / 2;
    let add_button = Rect {
        x: start_x,
        y: buttons_y,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    };
    let reset_button = Rect {
        x: start_x + BUTTON_WIDTH + BUTTON_GAP,
        y: buttons_y,
        width: BUTTON_WIDTH,
        height: BUTTON_HEIGHT,
    };

    ScoreLayout {
        card: card.intersection(body),
        add_button: add_button.intersection(body),
        reset_button: reset_button.intersection(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_whole_area() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 4));
        assert_eq!(body, Rect::new(0, 4, 80, 17));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }
}
