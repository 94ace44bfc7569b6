//! Terminal rendering of the [`Screen`](screen::Screen).

pub mod screen;
pub mod text;
pub mod theme;
pub mod view;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::i18n::t;
use crate::state::types::{Card, Language};
use screen::Screen;
use text::wrap_text_to_lines;
use theme::{Theme, theme};

/// What: Draw one frame.
///
/// Details:
/// - Layout from top to bottom: header with language tabs and busy indicator,
///   card list (or error), pagination bar (only when there is more than one page),
///   key hints.
pub fn ui(f: &mut Frame, screen: &Screen) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let pagination_h = u16::from(screen.pagination.visible);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(pagination_h),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, screen, &th, chunks[0]);
    render_body(f, screen, &th, chunks[1]);
    if screen.pagination.visible {
        render_pagination(f, screen, &th, chunks[2]);
    }
    let hints = Paragraph::new(Span::styled(
        t(screen.active_language, "app.footer.hints"),
        Style::default().fg(th.overlay1),
    ))
    .style(Style::default().bg(th.base));
    f.render_widget(hints, chunks[3]);
}

/// Header: app title, language tabs, busy indicator.
fn render_header(f: &mut Frame, screen: &Screen, th: &Theme, area: Rect) {
    let lang = screen.active_language;
    let mut spans = vec![Span::styled(
        format!("{}: ", t(lang, "app.languages.title")),
        Style::default().fg(th.overlay1),
    )];
    for candidate in Language::ALL {
        let style = if candidate == lang {
            Style::default()
                .fg(th.crust)
                .bg(th.lavender)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        spans.push(Span::styled(format!(" {} ", candidate.tab_label()), style));
        spans.push(Span::raw(" "));
    }
    if let Some(busy) = &screen.busy {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} {busy}", screen.spinner()),
            Style::default().fg(th.yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(Span::styled(
                t(lang, "app.title"),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    f.render_widget(header, area);
}

/// Card list, error message, or empty notice.
fn render_body(f: &mut Frame, screen: &Screen, th: &Theme, area: Rect) {
    let lang = screen.active_language;
    let block = Block::default()
        .title(Span::styled(
            format!("{} ({})", t(lang, "app.cards.title"), screen.cards().len()),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    if let Some(message) = screen.error() {
        let p = Paragraph::new(Span::styled(message.to_string(), Style::default().fg(th.red)))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let cards = screen.cards();
    if cards.is_empty() {
        let notice = if screen.busy.is_some() {
            String::new()
        } else {
            t(lang, "app.cards.empty")
        };
        let p = Paragraph::new(Span::styled(notice, Style::default().fg(th.overlay1)))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(p, area);
        return;
    }

    // Borders plus the highlight symbol.
    let text_width = area.width.saturating_sub(4);
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| ListItem::new(card_text(card, lang, th, text_width)))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().bg(th.crust))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(screen.selected));
    f.render_stateful_widget(list, area, &mut state);
}

/// Lines of one card: title, wrapped excerpt, image, link, spacer.
fn card_text(card: &Card, lang: Language, th: &Theme, width: u16) -> Text<'static> {
    let mut lines = vec![Line::from(Span::styled(
        card.title.clone(),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        wrap_text_to_lines(&card.excerpt, width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(th.subtext0)))),
    );
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}: ", t(lang, "app.cards.image")),
            Style::default().fg(th.overlay1),
        ),
        Span::styled(card.image_url.clone(), Style::default().fg(th.overlay1)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}: ", t(lang, "app.cards.read_more")),
            Style::default().fg(th.overlay1),
        ),
        Span::styled(
            card.link.clone(),
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    lines.push(Line::default());
    Text::from(lines)
}

/// Prev control, `current / total`, next control.
fn render_pagination(f: &mut Frame, screen: &Screen, th: &Theme, area: Rect) {
    let lang = screen.active_language;
    let control = |enabled: bool| {
        if enabled {
            Style::default().fg(th.lavender).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(th.surface2)
                .add_modifier(Modifier::DIM)
        }
    };
    let line = Line::from(vec![
        Span::styled(
            t(lang, "app.pagination.prev"),
            control(screen.pagination.prev_enabled),
        ),
        Span::styled(
            format!("   {}   ", screen.pagination.info),
            Style::default().fg(th.text),
        ),
        Span::styled(
            t(lang, "app.pagination.next"),
            control(screen.pagination.next_enabled),
        ),
    ]);
    let p = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(th.base));
    f.render_widget(p, area);
}
