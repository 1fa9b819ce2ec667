//! Modal dialogs drawn above the listing and the overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::state::{AppState, INSIGHTS, Modal, ShareTarget};
use crate::theme::theme;

use super::helpers::{centered_fixed, panel, text_alignment};

/// What: Draw a boxed dialog of the given size with `lines` inside.
///
/// Details:
/// - Clears the area first so the overlay underneath does not bleed through.
fn draw_dialog(
    f: &mut Frame,
    area: Rect,
    size: (u16, u16),
    title: String,
    lines: Vec<Line<'static>>,
    alignment: Alignment,
) {
    let rect = centered_fixed(size.0, size.1, area);
    f.render_widget(Clear, rect);
    let paragraph = Paragraph::new(lines)
        .alignment(alignment)
        .wrap(Wrap { trim: true })
        .block(panel(format!(" {title} "), true));
    f.render_widget(paragraph, rect);
}

/// Muted one-line hint such as the dismiss prompt.
fn hint(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(theme().overlay1)))
}

/// Render the active modal, if any.
pub(super) fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let align = text_alignment(app);
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => {
            let lines = vec![
                Line::from(Span::styled(message.clone(), Style::default().fg(th.text))),
                Line::from(""),
                hint(t(app, "app.alerts.dismiss")),
            ];
            draw_dialog(f, area, (56, 7), t(app, "app.alerts.title"), lines, align);
        }
        Modal::AdminLogin { input } => {
            let masked = "•".repeat(input.chars().count());
            let lines = vec![
                Line::from(t(app, "app.admin.prompt")),
                Line::from(""),
                Line::from(vec![
                    Span::styled(masked, Style::default().fg(th.yellow)),
                    Span::styled("▏", Style::default().fg(th.lavender)),
                ]),
            ];
            draw_dialog(f, area, (48, 7), t(app, "app.admin.prompt_title"), lines, align);
        }
        Modal::ConfirmLogout => {
            let lines = vec![
                Line::from(t(app, "app.admin.logout_confirm")),
                Line::from(""),
                hint(t(app, "app.confirm.yes_no")),
            ];
            draw_dialog(f, area, (48, 7), t(app, "app.confirm.title"), lines, align);
        }
        Modal::ConfirmDelete { .. } => {
            let lines = vec![
                Line::from(Span::styled(
                    t(app, "app.confirm.delete"),
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                hint(t(app, "app.confirm.yes_no")),
            ];
            draw_dialog(f, area, (52, 7), t(app, "app.confirm.title"), lines, align);
        }
        Modal::ShareMenu { selected } => {
            let mut lines = vec![hint(t(app, "app.share.via")), Line::from("")];
            for (index, target) in ShareTarget::ALL.iter().enumerate() {
                let focused = index == *selected;
                let style = if focused {
                    Style::default()
                        .fg(th.base)
                        .bg(th.lavender)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(th.text)
                };
                lines.push(Line::from(Span::styled(
                    format!(" {} ", t(app, target.label_key())),
                    style,
                )));
            }
            let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
            draw_dialog(f, area, (40, height), t(app, "app.share.title"), lines, align);
        }
        Modal::Article { index } => {
            let Some(insight) = INSIGHTS.get(*index) else {
                return;
            };
            let lines = vec![
                Line::from(Span::styled(
                    t(app, insight.category_key),
                    Style::default().fg(th.yellow),
                )),
                Line::from(""),
                Line::from(t(app, insight.summary_key)),
                Line::from(""),
                Line::from(t(app, "app.insights.body")),
                Line::from(""),
                hint(t(app, "app.alerts.dismiss")),
            ];
            draw_dialog(f, area, (70, 14), t(app, insight.title_key), lines, align);
        }
        Modal::Help => {
            let keys = [
                "app.help.search",
                "app.help.navigate",
                "app.help.open",
                "app.help.locale",
                "app.help.admin",
                "app.help.overlay",
                "app.help.editor",
                "app.help.quit",
            ];
            let mut lines: Vec<Line<'static>> = keys.iter().map(|k| Line::from(t(app, k))).collect();
            lines.push(Line::from(""));
            lines.push(hint(t(app, "app.alerts.dismiss")));
            let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
            draw_dialog(f, area, (70, height), t(app, "app.help.title"), lines, Alignment::Left);
        }
    }
}
