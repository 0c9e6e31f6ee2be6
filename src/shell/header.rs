use crate::colors::Theme;
use crate::shell::layout::Frame;
use crate::terminal::Terminal;
use crossterm::style::Color;

pub const HEIGHT: u16 = 3;

/// Top bar: traffic-light dots, title, live clock, session badge
pub fn draw(term: &mut Terminal, theme: &Theme, width: u16, clock: &str) {
    let mut frame = Frame::new(0, 0, width, HEIGHT, "");
    frame.border_color = theme.color(0).0;
    frame.draw(term);

    let y = 1;
    term.set(2, y, '●', Some(Color::Red), false);
    term.set(4, y, '●', Some(Color::Yellow), false);
    term.set(6, y, '●', Some(Color::Green), false);

    let (bright, bold) = theme.color(2);
    term.set_str(9, y, "PORTFOLIO TERMINAL", Some(bright), bold);

    let (mid, _) = theme.color(1);
    let badge = "SESSION: ACTIVE";
    let badge_x = width as i32 - badge.len() as i32 - 2;
    term.set_str(badge_x, y, badge, Some(mid), false);
    term.set_str(badge_x - clock.len() as i32 - 3, y, clock, Some(mid), false);
}
