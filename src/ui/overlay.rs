//! Detail overlay: tabbed read-only view and the admin edit form.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Tabs, Wrap},
};

use crate::i18n::t;
use crate::state::{AppState, DetailTab, EDITOR_FIELDS, EditorField, Profile};
use crate::theme::theme;

use super::helpers::{centered_rect, panel, rating_bar, text_alignment};

/// Width of the fame/popularity bars in cells.
const BAR_WIDTH: u16 = 20;

pub(super) fn render_overlay(f: &mut Frame, app: &AppState, area: Rect) {
    let rect = centered_rect(84, 84, area);
    f.render_widget(Clear, rect);
    if app.overlay.is_editing() {
        if let Some(draft) = app.overlay.draft.as_ref() {
            render_edit_form(f, app, draft, rect);
        }
    } else if let Some(profile) = app.overlay.displayed.as_ref() {
        render_view(f, app, profile, rect);
    }
}

/// Header lines, tab strip, tab body and ratings.
fn render_view(f: &mut Frame, app: &AppState, p: &Profile, rect: Rect) {
    let th = theme();
    let block = panel(format!(" {} ", p.name.resolve(app.locale)), true);
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(inner);

    let mut head = vec![Line::from(vec![
        Span::styled(
            p.role.resolve(app.locale).to_string(),
            Style::default().fg(th.sapphire),
        ),
        Span::styled(
            format!(" · {}", p.location.resolve(app.locale)),
            Style::default().fg(th.subtext0),
        ),
        Span::styled(
            format!(" · {}", t(app, p.category.label_key())),
            Style::default().fg(th.yellow),
        ),
    ])];
    if app.overlay.is_copied(Instant::now()) {
        head.push(Line::from(Span::styled(
            t(app, "app.overlay.link_copied"),
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        )));
    }
    f.render_widget(
        Paragraph::new(head).alignment(text_alignment(app)),
        rows[0],
    );

    let titles: Vec<String> = DetailTab::ALL
        .iter()
        .map(|tab| t(app, tab.label_key()))
        .collect();
    let selected = DetailTab::ALL
        .iter()
        .position(|tab| *tab == app.overlay.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(th.subtext0))
        .highlight_style(Style::default().fg(th.lavender).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, rows[1]);

    f.render_widget(
        Paragraph::new(tab_lines(app, p))
            .alignment(text_alignment(app))
            .wrap(Wrap { trim: false }),
        rows[2],
    );
    render_ratings(f, app, p, rows[3]);
}

/// What: Body lines for the active tab.
///
/// Details:
/// - Overview carries the summary, the services of business profiles and
///   the verification status. Work history and archive have no content yet.
fn tab_lines(app: &AppState, p: &Profile) -> Vec<Line<'static>> {
    let th = theme();
    let heading = |key: &str| {
        Line::from(Span::styled(
            t(app, key),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
    };
    let body = |text: String| Line::from(Span::styled(text, Style::default().fg(th.text)));

    let mut lines = Vec::new();
    match app.overlay.tab {
        DetailTab::Overview => {
            lines.push(heading("app.overlay.summary"));
            lines.push(body(p.bio.resolve(app.locale).to_string()));
            let services = p.visible_services();
            if !services.is_empty() {
                lines.push(Line::from(""));
                lines.push(heading("app.overlay.core_services"));
                for service in services {
                    lines.push(body(format!("• {}", service.resolve(app.locale))));
                }
            }
            lines.push(Line::from(""));
            lines.push(heading("app.overlay.verification_status"));
            let (key, color) = if p.verified {
                ("app.overlay.verified_msg", th.green)
            } else {
                ("app.overlay.unverified_msg", th.overlay1)
            };
            lines.push(Line::from(Span::styled(t(app, key), Style::default().fg(color))));
        }
        DetailTab::Biography => {
            lines.push(heading("app.overlay.early_life"));
            lines.push(body(p.bio.resolve(app.locale).to_string()));
        }
        DetailTab::WorkHistory | DetailTab::Archive => {
            lines.push(Line::from(Span::styled(
                t(app, "app.overlay.placeholder"),
                Style::default().fg(th.overlay1),
            )));
        }
    }
    lines
}

/// Fame and popularity bars; the stored value is printed as-is.
fn render_ratings(f: &mut Frame, app: &AppState, p: &Profile, area: Rect) {
    let th = theme();
    let row = |key: &str, value: i32| {
        Line::from(vec![
            Span::styled(format!("{:<12}", t(app, key)), Style::default().fg(th.subtext0)),
            Span::styled(rating_bar(value, BAR_WIDTH), Style::default().fg(th.sapphire)),
            Span::styled(format!(" {value}"), Style::default().fg(th.text)),
        ])
    };
    let lines = vec![
        Line::from(Span::styled(
            t(app, "app.overlay.influence_score"),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        row("app.overlay.fame", p.ratings.fame),
        row("app.overlay.popularity", p.ratings.popularity),
    ];
    f.render_widget(Paragraph::new(lines).alignment(text_alignment(app)), area);
}

/// Caption and current value of one edit-form row.
fn field_row(app: &AppState, draft: &Profile, field: EditorField) -> (String, String) {
    match field {
        EditorField::Image => (t(app, "app.editor.image_url"), draft.image.clone()),
        EditorField::Verified => (
            t(app, "app.editor.verified"),
            if draft.verified { "[x]" } else { "[ ]" }.to_string(),
        ),
        EditorField::Category => (
            t(app, "app.editor.category"),
            format!("< {} >", t(app, draft.category.label_key())),
        ),
        EditorField::Text(text_field, locale) => (
            format!("{} ({})", t(app, text_field.label_key()), locale.code()),
            text_field.bundle(draft).get(locale).to_string(),
        ),
    }
}

/// What: Render the edit form for the draft.
///
/// Details:
/// - The row under the cursor is highlighted and shows a caret; the list
///   scrolls so the cursor stays visible on short terminals.
fn render_edit_form(f: &mut Frame, app: &AppState, draft: &Profile, rect: Rect) {
    let th = theme();
    let block = panel(format!(" {} ", t(app, "app.editor.title")), true);
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let value_width = usize::from(inner.width.saturating_sub(24));
    let lines: Vec<Line> = EDITOR_FIELDS
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let (label, value) = field_row(app, draft, *field);
            let focused = index == app.overlay.field;
            let label_style = if focused {
                Style::default().fg(th.lavender).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.subtext0)
            };
            let mut spans = vec![
                Span::styled(if focused { "▶ " } else { "  " }, label_style),
                Span::styled(format!("{:<20}", crate::util::fit_width(&label, 20)), label_style),
                Span::styled(crate::util::fit_width(&value, value_width), Style::default().fg(th.text)),
            ];
            if focused && matches!(field, EditorField::Image | EditorField::Text(..)) {
                spans.push(Span::styled("▏", Style::default().fg(th.lavender)));
            }
            Line::from(spans)
        })
        .collect();

    let visible = usize::from(inner.height.max(1));
    let offset = app.overlay.field.saturating_sub(visible.saturating_sub(1));
    let scroll = u16::try_from(offset).unwrap_or(0);
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, LocalizedString};
    use crate::state::Category;

    #[test]
    /// What: Services only appear for business profiles
    fn overview_lists_business_services() {
        let mut app = AppState {
            locale: Locale::En,
            ..AppState::default()
        };
        let mut p = Profile::blank(1, Category::Business);
        p.services = Some(vec![LocalizedString::new("Bangiyo", "Banking", "")]);
        let text: String = tab_lines(&app, &p)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Core services"));
        assert!(text.contains("Banking"));

        p.category = Category::Politician;
        let text: String = tab_lines(&app, &p)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(!text.contains("Banking"));

        app.overlay.tab = DetailTab::Archive;
        let lines = tab_lines(&app, &p);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn edit_rows_show_locale_and_checkbox() {
        let app = AppState {
            locale: Locale::En,
            ..AppState::default()
        };
        let mut draft = Profile::blank(5, Category::Politician);
        draft.verified = true;
        draft.name.ar = "حمزة".into();
        assert_eq!(field_row(&app, &draft, EditorField::Verified).1, "[x]");
        let (label, value) = field_row(
            &app,
            &draft,
            EditorField::Text(crate::state::TextField::Name, Locale::Ar),
        );
        assert_eq!(label, "Name (ar)");
        assert_eq!(value, "حمزة");
    }
}
