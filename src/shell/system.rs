use crate::colors::{StatusColor, Theme};
use crate::shell::layout::{format_uptime, Frame};
use crate::terminal::Terminal;
use std::collections::VecDeque;

/// Messages the log feed draws from at random
pub const LOG_MESSAGES: [&str; 5] = [
    "System initialized successfully",
    "Portfolio modules loaded",
    "Network connection established",
    "User interface ready",
    "All systems operational",
];

/// How many log lines are retained
pub const LOG_KEEP: usize = 10;

const STATUS_H: u16 = 6;
const STORAGE_H: u16 = 6;

const STORAGE_ROWS: [&str; 4] = [
    "Filesystem    Size  Used",
    "/skills       8.0G  7.2G",
    "/projects     12G   9.1G",
    "/experience   4.0G  3.8G",
];

/// Right-hand column: STATUS, LOGS and STORAGE boxes stacked vertically
pub fn draw(
    term: &mut Terminal,
    theme: &Theme,
    frame: &Frame,
    uptime_secs: u64,
    logs: &VecDeque<String>,
    blink: bool,
) {
    frame.draw(term);

    let ix = frame.inner_x();
    let iw = frame.inner_width();
    let ih = frame.inner_height();
    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);
    let (bright, _) = theme.color(2);

    // STATUS box
    let mut status = Frame::new(ix, frame.inner_y(), iw, STATUS_H, "STATUS");
    status.title_color = bright;
    status.border_color = dim;
    status.draw(term);
    {
        let mut pane = term.pane(
            status.inner_x() + 1,
            status.inner_y(),
            status.inner_width().saturating_sub(2),
            status.inner_height(),
        );
        pane.set_str(0, 0, "UPTIME", Some(dim), false);
        pane.set_str_right(0, &format_uptime(uptime_secs), Some(mid), false);
        pane.set_str(0, 1, "STATUS", Some(dim), false);
        pane.set_str_right(1, "ONLINE", Some(StatusColor::Good.color()), true);
        pane.set_str(0, 2, "LOAD", Some(dim), false);
        pane.set_str_right(2, "0.42", Some(mid), false);
        pane.set_str(0, 3, "PROC", Some(dim), false);
        pane.set_str_right(3, "127", Some(mid), false);
    }

    // LOGS box takes whatever vertical space is left
    let logs_h = ih.saturating_sub(STATUS_H + STORAGE_H).max(3);
    let logs_y = frame.inner_y() + STATUS_H as i32;
    let mut feed = Frame::new(ix, logs_y, iw, logs_h, "LOGS");
    feed.title_color = bright;
    feed.border_color = dim;
    feed.draw(term);
    {
        let mut pane = term.pane(
            feed.inner_x() + 1,
            feed.inner_y(),
            feed.inner_width().saturating_sub(2),
            feed.inner_height(),
        );
        let visible = pane.height().saturating_sub(1) as usize;
        let skip = logs.len().saturating_sub(visible);
        let mut row = 0;
        for line in logs.iter().skip(skip) {
            pane.set_str(0, row, line, Some(dim), false);
            row += 1;
        }
        if blink {
            pane.set(0, row, '█', Some(mid), false);
        }
    }

    // STORAGE box pinned to the bottom
    let storage_y = frame.inner_y() + ih.saturating_sub(STORAGE_H) as i32;
    let mut storage = Frame::new(ix, storage_y, iw, STORAGE_H, "STORAGE");
    storage.title_color = bright;
    storage.border_color = dim;
    storage.draw(term);
    {
        let mut pane = term.pane(
            storage.inner_x() + 1,
            storage.inner_y(),
            storage.inner_width().saturating_sub(2),
            storage.inner_height(),
        );
        pane.set_str(0, 0, STORAGE_ROWS[0], Some(mid), false);
        for (i, row) in STORAGE_ROWS[1..].iter().enumerate() {
            pane.set_str(0, 1 + i as i32, row, Some(dim), false);
        }
    }
}
