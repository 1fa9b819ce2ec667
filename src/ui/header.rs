//! Top navigation bar and search box.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::{Locale, t};
use crate::state::{ActiveView, AppState};
use crate::theme::theme;

use super::helpers::{panel, text_alignment};

/// What: Render the brand, directory tabs, locale switcher and admin badge.
///
/// Details:
/// - The active view is highlighted; while a search query is set no tab is
///   active because results span both directories.
pub(super) fn render_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let searching = !app.query.trim().is_empty();
    let tab = |view: ActiveView, key: &str, hotkey: &str| {
        let active = !searching && app.view == view;
        let style = if active {
            Style::default()
                .fg(th.base)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        Span::styled(format!(" {hotkey} {} ", t(app, key)), style)
    };

    let mut spans = vec![
        Span::styled(
            format!("{} ", t(app, "app.brand")),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        tab(ActiveView::Landing, "app.nav.home", "h"),
        Span::raw(" "),
        tab(ActiveView::PoliticsDirectory, "app.nav.politics", "1"),
        Span::raw(" "),
        tab(ActiveView::BusinessDirectory, "app.nav.business", "2"),
        Span::raw("   "),
    ];
    for locale in Locale::ALL {
        let style = if locale == app.locale {
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.overlay1)
        };
        spans.push(Span::styled(
            format!("{} ", locale.code().to_uppercase()),
            style,
        ));
    }
    if app.admin {
        spans.push(Span::styled(
            format!(" [{}]", t(app, "app.nav.admin")),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(text_alignment(app))
        .block(panel(String::new(), false));
    f.render_widget(paragraph, area);
}

/// Render the search box with the placeholder when empty.
pub(super) fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = if app.query.is_empty() && !app.search_focused {
        Line::from(Span::styled(
            t(app, "app.hero.search_placeholder"),
            Style::default().fg(th.overlay1),
        ))
    } else {
        let mut spans = vec![Span::styled(
            app.query.clone(),
            Style::default().fg(th.text),
        )];
        if app.search_focused {
            spans.push(Span::styled("▏", Style::default().fg(th.lavender)));
        }
        Line::from(spans)
    };
    let paragraph = Paragraph::new(line)
        .alignment(text_alignment(app))
        .block(panel(" / ".to_string(), app.search_focused));
    f.render_widget(paragraph, area);
}
