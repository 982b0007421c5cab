use ratatui::layout::Rect;

use crate::ui::card::CARD_HEIGHT;

/// Splits the screen into the fixed header / card container / footer
/// regions.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
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

/// How many whole cards fit into the container.
pub fn card_capacity(body: Rect) -> usize {
    (body.height / CARD_HEIGHT).max(1) as usize
}

/// Index range of the cards currently on screen.
///
/// Scrolls just far enough to keep the selected card visible; cards
/// before and after the window simply fall off screen.
pub fn visible_card_range(body: Rect, count: usize, selected: usize) -> std::ops::Range<usize> {
    let capacity = card_capacity(body);
    let first = selected.saturating_sub(capacity.saturating_sub(1));
    first..count.min(first + capacity)
}

/// Screen rectangle of the card at the given on-screen slot.
pub fn card_rect(body: Rect, slot: usize) -> Rect {
    Rect {
        x: body.x,
        y: body.y + (slot as u16) * CARD_HEIGHT,
        width: body.width,
        height: CARD_HEIGHT.min(body.height.saturating_sub((slot as u16) * CARD_HEIGHT)),
    }
}
