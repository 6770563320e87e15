use hotissue_core::{format_with_commas, AppViewModel, InputMode, NoticeKind, PostCardView};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::constants::{site_color, KEY_HELP};
use super::layout;

pub fn draw(frame: &mut Frame, view: &AppViewModel, list_state: &mut ListState) {
    let areas = layout::split(frame.area());
    draw_header(frame, view, areas.header);
    draw_posts(frame, view, areas.posts, list_state);
    draw_stats(frame, view, areas.stats);
    draw_footer(frame, view, areas.footer);
}

fn draw_header(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled("site ", dim),
        Span::raw(view.site_label.clone()),
        Span::styled("   category ", dim),
        Span::raw(view.category_label.clone()),
        Span::styled("   sort ", dim),
        Span::raw(view.sort_label),
    ];
    if !view.search.is_empty() {
        spans.push(Span::styled("   search ", dim));
        spans.push(Span::styled(
            format!("\"{}\"", view.search),
            Style::default().fg(Color::Yellow),
        ));
    }
    if view.loading {
        spans.push(Span::styled(
            "   fetching...",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(updated) = &view.last_updated {
        spans.push(Span::styled(format!("   updated {updated}"), dim));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Hot Issues "));
    frame.render_widget(header, area);
}

fn draw_posts(frame: &mut Frame, view: &AppViewModel, area: Rect, list_state: &mut ListState) {
    let title = if view.has_more {
        format!(
            " Posts {}/{} (m: more) ",
            view.cards.len(),
            view.filtered_count
        )
    } else {
        format!(" Posts {}/{} ", view.cards.len(), view.filtered_count)
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if view.cards.is_empty() {
        let placeholder = if view.loading {
            "Loading posts..."
        } else {
            "No posts match the current filters."
        };
        let empty = Paragraph::new(placeholder)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view.cards.iter().map(card_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, list_state);
}

fn card_item(card: &PostCardView) -> ListItem<'_> {
    let badge = Span::styled(
        format!(" {} ", card.site_label),
        Style::default().fg(Color::Black).bg(site_color(&card.site)),
    );
    let title_line = Line::from(vec![
        badge,
        Span::raw(" "),
        Span::styled(
            card.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let dim = Style::default().fg(Color::DarkGray);
    let mut meta = vec![Span::styled(card.author.clone(), dim)];
    if let Some(category) = &card.category_label {
        meta.push(Span::raw("  "));
        meta.push(Span::styled(
            category.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }
    for (value, label) in [
        (&card.views, "views"),
        (&card.likes, "likes"),
        (&card.comments, "comments"),
    ] {
        if let Some(value) = value {
            meta.push(Span::styled(format!("  {value} {label}"), dim));
        }
    }

    ListItem::new(Text::from(vec![title_line, Line::from(meta)]))
}

fn draw_stats(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Stats ");
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::new();
    match view.stats_total {
        Some(total) => {
            lines.push(Line::from(vec![
                Span::styled("total crawled ", dim),
                Span::raw(format_with_commas(total)),
            ]));
            for (label, count) in &view.stats_by_site {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label} "), dim),
                    Span::raw(format_with_commas(*count)),
                ]));
            }
        }
        None => lines.push(Line::from(Span::styled("no stats yet", dim))),
    }

    let stats = Paragraph::new(Text::from(lines)).block(block);
    frame.render_widget(stats, area);
}

fn draw_footer(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let (text, style) = footer_line(view);
    frame.render_widget(Paragraph::new(text).style(style), area);
}

/// The footer shows exactly one thing: an active notice wins, then the
/// live search prompt, then the key help line.
fn footer_line(view: &AppViewModel) -> (String, Style) {
    if let Some(notice) = &view.notice {
        let style = match notice.kind {
            NoticeKind::Error => Style::default().fg(Color::Red),
            NoticeKind::Info => Style::default().fg(Color::Green),
        };
        return (format!(" {}", notice.text), style);
    }
    if view.input_mode == InputMode::Search {
        return (
            format!(" /{}", view.search),
            Style::default().fg(Color::Yellow),
        );
    }
    (KEY_HELP.to_string(), Style::default().fg(Color::DarkGray))
}
