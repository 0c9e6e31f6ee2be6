use crate::colors::{self, Theme};
use crate::config::Section;
use crate::shell::layout::Frame;
use crate::terminal::Terminal;

/// Static hint box content under the section list
const HINTS: [&str; 3] = [
    "$ whoami → about",
    "$ ls projects → projects",
    "$ cat skills → skills",
];

/// File-listing style navigation: one entry per section, cursor marker
/// on the active one, quick-command hints at the bottom.
pub fn draw(term: &mut Terminal, theme: &Theme, frame: &Frame, cursor: usize, active: Section) {
    frame.draw(term);
    let mut pane = term.pane(
        frame.inner_x() + 1,
        frame.inner_y(),
        frame.inner_width().saturating_sub(2),
        frame.inner_height(),
    );

    pane.set_str(0, 0, "$ ls -la /portfolio", Some(colors::PROMPT), true);
    pane.set_str(
        0,
        1,
        &format!("total {} items", Section::ALL.len()),
        Some(colors::PROMPT_DIM),
        false,
    );

    let (bright, _) = theme.color(2);
    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);

    for (i, section) in Section::ALL.iter().enumerate() {
        let row = 3 + (i as i32) * 2;
        if *section == active {
            pane.set(0, row, '▶', Some(bright), true);
        }
        let (color, heavy) = if i == cursor {
            (bright, true)
        } else if *section == active {
            (mid, true)
        } else {
            (mid, false)
        };
        pane.set_str(2, row, section.script(), Some(color), heavy);
        pane.set_str(4, row + 1, section.description(), Some(dim), false);
    }

    let hint_y = 3 + Section::ALL.len() as i32 * 2 + 1;
    pane.set_str(0, hint_y, "Quick Commands:", Some(dim), false);
    for (i, hint) in HINTS.iter().enumerate() {
        pane.set_str(0, hint_y + 1 + i as i32, hint, Some(colors::PROMPT_DIM), false);
    }
}
