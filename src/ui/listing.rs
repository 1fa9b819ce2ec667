//! Directory listing and search results.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use crate::i18n::{t, t_fmt1};
use crate::logic::gating;
use crate::state::{ActiveView, AppState, Profile};
use crate::theme::theme;

use super::helpers::{panel, text_alignment};

/// Title key for the listing block.
fn title_key(app: &AppState) -> &'static str {
    if !app.query.trim().is_empty() {
        return "app.listing.search_results";
    }
    match app.view {
        ActiveView::BusinessDirectory => "app.listing.business_directory",
        ActiveView::PoliticsDirectory | ActiveView::Landing => "app.listing.politics_directory",
    }
}

/// What: Build the two-line card for one profile.
///
/// Details:
/// - Line one carries the name and a verified check; line two the role,
///   location and (in search results) the category.
fn card(app: &AppState, p: &Profile, width: usize, show_category: bool) -> ListItem<'static> {
    let th = theme();
    let alignment = text_alignment(app);
    let name = p.name.resolve(app.locale);
    let mut first = vec![Span::styled(
        crate::util::fit_width(name, width.saturating_sub(4)),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )];
    if p.verified {
        first.push(Span::styled(" ✓", Style::default().fg(th.green)));
    }

    let mut detail = format!(
        "{} · {}",
        p.role.resolve(app.locale),
        p.location.resolve(app.locale)
    );
    if show_category {
        detail = format!("{detail} · {}", t(app, p.category.label_key()));
    }
    let second = Line::from(Span::styled(
        crate::util::fit_width(&detail, width),
        Style::default().fg(th.subtext0),
    ));
    ListItem::new(vec![Line::from(first).alignment(alignment), second.alignment(alignment)])
}

pub(super) fn render_listing(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let searching = !app.query.trim().is_empty();
    let width = usize::from(area.width.saturating_sub(4));
    let (items, count): (Vec<ListItem>, usize) = {
        let visible = app.visible_profiles();
        let items = visible
            .iter()
            .map(|p| card(app, p, width, searching))
            .collect();
        (items, visible.len())
    };

    let title = format!(
        " {} · {} ",
        t(app, title_key(app)),
        t_fmt1(app, "app.listing.showing", count)
    );
    let block = panel(title, true);

    // Admins keep the add hint in an empty directory; search results never offer it.
    let show_add = !searching && gating::current(app).can_create;
    if count == 0 && !show_add {
        let mut lines = vec![Line::from(Span::styled(
            t(app, "app.listing.no_results"),
            Style::default().fg(th.subtext0),
        ))];
        if searching {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("[x] ", Style::default().fg(th.yellow)),
                Span::styled(t(app, "app.listing.clear_search"), Style::default().fg(th.sapphire)),
            ]));
        }
        let paragraph = Paragraph::new(lines)
            .alignment(text_alignment(app))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);
    let list_area = if show_add {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(inner);
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[n] ", Style::default().fg(th.yellow)),
            Span::styled(t(app, "app.listing.add_profile"), Style::default().fg(th.green)),
        ]))
        .alignment(text_alignment(app));
        f.render_widget(hint, split[0]);
        split[1]
    } else {
        inner
    };
    if count == 0 {
        return;
    }

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(Style::default().bg(th.surface1))
        .highlight_symbol("▌ ");
    app.list_state.select(Some(app.selected.min(count - 1)));
    f.render_stateful_widget(list, list_area, &mut app.list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_search_results() {
        let mut app = AppState {
            view: ActiveView::BusinessDirectory,
            ..AppState::default()
        };
        assert_eq!(title_key(&app), "app.listing.business_directory");
        app.query = "dah".into();
        assert_eq!(title_key(&app), "app.listing.search_results");
    }
}
