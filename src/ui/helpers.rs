//! Layout and formatting helpers shared by the renderers.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders},
};

use crate::i18n::TextDirection;
use crate::state::AppState;
use crate::theme::theme;

/// What: Centered rectangle taking a percentage of `area`.
///
/// Inputs:
/// - `pct_x`, `pct_y`: Width and height percentages (clamped to 100)
/// - `area`: Enclosing area
#[must_use]
pub fn centered_rect(pct_x: u16, pct_y: u16, area: Rect) -> Rect {
    let pct_x = pct_x.min(100);
    let pct_y = pct_y.min(100);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - pct_y) / 2),
            Constraint::Percentage(pct_y),
            Constraint::Percentage((100 - pct_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - pct_x) / 2),
            Constraint::Percentage(pct_x),
            Constraint::Percentage((100 - pct_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// What: Fixed-size rectangle centered in `area`, shrunk to fit.
#[must_use]
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Text alignment for the active locale: right for Arabic, left otherwise.
#[must_use]
pub const fn text_alignment(app: &AppState) -> Alignment {
    match crate::logic::view::layout_direction(app) {
        TextDirection::Rtl => Alignment::Right,
        TextDirection::Ltr => Alignment::Left,
    }
}

/// Rounded block with the standard border color and an optional title.
#[must_use]
pub fn panel(title: String, focused: bool) -> Block<'static> {
    let th = theme();
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.lavender } else { th.overlay1 }))
        .style(Style::default().bg(th.base).fg(th.text))
}

/// What: Number of filled cells for a 0-100 rating in a bar of `width` cells.
///
/// Details:
/// - Ratings outside `0..=100` are clamped for display only; the stored value
///   is shown unchanged next to the bar.
#[must_use]
pub fn rating_fill(value: i32, width: u16) -> u16 {
    let pct = u32::try_from(value.clamp(0, 100)).unwrap_or(0);
    let filled = pct * u32::from(width) / 100;
    u16::try_from(filled).unwrap_or(width)
}

/// Render a rating as a text bar such as `██████░░░░`.
#[must_use]
pub fn rating_bar(value: i32, width: u16) -> String {
    let filled = usize::from(rating_fill(value, width));
    let empty = usize::from(width).saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Out-of-range ratings are clamped to the bar width
    fn rating_fill_clamps() {
        assert_eq!(rating_fill(50, 10), 5);
        assert_eq!(rating_fill(150, 10), 10);
        assert_eq!(rating_fill(-20, 10), 0);
        assert_eq!(rating_bar(30, 10).chars().count(), 10);
    }

    #[test]
    fn centered_fixed_fits_inside() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_fixed(100, 4, area);
        assert_eq!(r.width, 40);
        assert_eq!(r.height, 4);
        assert_eq!(r.y, 3);
    }

    #[test]
    fn arabic_aligns_right() {
        let mut app = AppState::default();
        assert_eq!(text_alignment(&app), Alignment::Left);
        app.locale = crate::i18n::Locale::Ar;
        assert_eq!(text_alignment(&app), Alignment::Right);
    }
}
