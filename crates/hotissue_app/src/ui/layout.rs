use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::constants::{FOOTER_HEIGHT, HEADER_HEIGHT, STATS_PANEL_WIDTH};

/// Screen regions of the main view.
pub struct Areas {
    pub header: Rect,
    pub posts: Rect,
    pub stats: Rect,
    pub footer: Rect,
}

/// Header on top, the one-line footer at the bottom, and the body split
/// between the post list and the stats side panel.
pub fn split(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(STATS_PANEL_WIDTH)])
        .split(rows[1]);

    Areas {
        header: rows[0],
        posts: body[0],
        stats: body[1],
        footer: rows[2],
    }
}
