//! Landing screen: hero, live statistics, category cards, insights and trending profiles.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::i18n::t;
use crate::state::{AppState, INSIGHTS, Profile};
use crate::theme::theme;

use super::helpers::{panel, rating_bar, text_alignment};

/// How many profiles the trending panel lists.
const TRENDING_COUNT: usize = 3;

/// What: Profiles with the highest fame rating.
///
/// Inputs:
/// - `profiles`: Store contents in store order
/// - `count`: Maximum number of entries
///
/// Output:
/// - Up to `count` records, highest fame first; ties keep store order.
pub(super) fn trending(profiles: &[Profile], count: usize) -> Vec<&Profile> {
    let mut ranked: Vec<&Profile> = profiles.iter().collect();
    ranked.sort_by(|a, b| b.ratings.fame.cmp(&a.ratings.fame));
    ranked.truncate(count);
    ranked
}

pub(super) fn render_landing(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(area);
    render_hero(f, app, rows[0]);
    render_category_cards(f, app, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);
    render_insights(f, app, bottom[0]);
    render_trending(f, app, bottom[1]);
}

/// Headline, subtitle and the entry/verified counters.
fn render_hero(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let total = app.store.len();
    let verified = app.store.iter().filter(|p| p.verified).count();
    let title = Style::default().fg(th.text).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            t(app, "app.hero.tag"),
            Style::default().fg(th.sapphire),
        )),
        Line::from(vec![
            Span::styled(t(app, "app.hero.title1"), title),
            Span::raw(" "),
            Span::styled(
                t(app, "app.hero.title2"),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            t(app, "app.hero.sub"),
            Style::default().fg(th.subtext0),
        )),
        Line::from(vec![
            Span::styled(
                format!("{}: ", t(app, "app.hero.total_entries")),
                Style::default().fg(th.overlay1),
            ),
            Span::styled(total.to_string(), Style::default().fg(th.green)),
            Span::raw("   "),
            Span::styled(
                format!("{}: ", t(app, "app.hero.verified")),
                Style::default().fg(th.overlay1),
            ),
            Span::styled(verified.to_string(), Style::default().fg(th.green)),
        ]),
    ];
    let block = panel(format!(" {} ", t(app, "app.hero.live_stats")), false);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(text_alignment(app))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// The two directory entry points; tiles 0 and 1 of the landing cursor.
fn render_category_cards(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let cards = [
        ("app.categories.politician", "app.categories.politician_desc"),
        ("app.categories.business", "app.categories.business_desc"),
    ];
    for (index, (title_key, desc_key)) in cards.into_iter().enumerate() {
        let focused = app.landing_selected == index;
        let paragraph = Paragraph::new(Line::from(Span::styled(
            t(app, desc_key),
            Style::default().fg(th.subtext0),
        )))
        .alignment(text_alignment(app))
        .block(panel(format!(" {} ", t(app, title_key)), focused));
        f.render_widget(paragraph, cols[index]);
    }
}

/// Article teasers; tiles 2.. of the landing cursor.
fn render_insights(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut lines = Vec::new();
    for (index, insight) in INSIGHTS.iter().enumerate() {
        let focused = app.landing_selected == index + 2;
        let marker = if focused { "▶ " } else { "  " };
        let title_style = if focused {
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.text).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("[{}] ", t(app, insight.category_key)),
                Style::default().fg(th.yellow),
            ),
            Span::styled(t(app, insight.title_key), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", t(app, insight.summary_key)),
            Style::default().fg(th.subtext0),
        )));
        lines.push(Line::from(""));
    }
    let block = panel(format!(" {} ", t(app, "app.insights.latest")), false);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(text_alignment(app))
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Most famous profiles with their fame bar.
fn render_trending(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let lines: Vec<Line> = trending(app.store.as_slice(), TRENDING_COUNT)
        .into_iter()
        .enumerate()
        .map(|(rank, p)| {
            Line::from(vec![
                Span::styled(format!("{}. ", rank + 1), Style::default().fg(th.overlay1)),
                Span::styled(
                    p.name.resolve(app.locale).to_string(),
                    Style::default().fg(th.text),
                ),
                Span::raw(" "),
                Span::styled(rating_bar(p.ratings.fame, 8), Style::default().fg(th.sapphire)),
            ])
        })
        .collect();
    let block = panel(format!(" {} ", t(app, "app.insights.trending")), false);
    f.render_widget(
        Paragraph::new(lines).alignment(text_alignment(app)).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Category;

    #[test]
    /// What: Trending ranks by fame and keeps store order for ties
    fn trending_orders_by_fame() {
        let mut a = Profile::blank(1, Category::Politician);
        a.ratings.fame = 40;
        let mut b = Profile::blank(2, Category::Business);
        b.ratings.fame = 90;
        let mut c = Profile::blank(3, Category::Business);
        c.ratings.fame = 40;
        let d = Profile::blank(4, Category::Business);
        let profiles = vec![a, b, c, d];
        let ids: Vec<u64> = trending(&profiles, 3).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
        assert!(trending(&[], 3).is_empty());
    }
}
