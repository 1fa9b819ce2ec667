//! Context-sensitive key hint line.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::i18n::t;
use crate::state::AppState;
use crate::theme::theme;

/// Label key of the hint matching the current focus.
fn hint_key(app: &AppState) -> &'static str {
    if app.overlay.is_open {
        if app.overlay.is_editing() {
            "app.footer.editor"
        } else if app.admin {
            "app.footer.overlay_admin"
        } else {
            "app.footer.overlay"
        }
    } else if app.search_focused {
        "app.footer.search"
    } else {
        "app.footer.main"
    }
}

pub(super) fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let text = crate::util::fit_width(&t(app, hint_key(app)), usize::from(area.width));
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(th.overlay1).bg(th.mantle))
        .alignment(super::helpers::text_alignment(app));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, Profile, ProfileStore};

    #[test]
    fn hint_follows_focus() {
        let mut app = AppState {
            store: ProfileStore::from_seed(vec![Profile::blank(1, Category::Business)]),
            ..AppState::default()
        };
        assert_eq!(hint_key(&app), "app.footer.main");
        app.search_focused = true;
        assert_eq!(hint_key(&app), "app.footer.search");
        app.search_focused = false;
        crate::logic::editor::open(&mut app, 1);
        assert_eq!(hint_key(&app), "app.footer.overlay");
        app.admin = true;
        assert_eq!(hint_key(&app), "app.footer.overlay_admin");
        crate::logic::editor::enter_edit(&mut app);
        assert_eq!(hint_key(&app), "app.footer.editor");
    }
}
