use ratatui::style::Color;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const STATS_PANEL_WIDTH: u16 = 28;

pub const KEY_HELP: &str =
    " j/k:move  g/G:ends  enter:open  /:search  s:site  c:category  o:sort  m:more  r:refresh  e:export  q:quit";

/// Badge color per site identifier, following the exported page's palette.
pub fn site_color(site: &str) -> Color {
    match site {
        "bobae" => Color::Red,
        "ppomppu" => Color::Blue,
        "fmkorea" => Color::Yellow,
        "dcinside" => Color::Magenta,
        _ => Color::Gray,
    }
}
