use crate::colors::{self, StatusColor, Theme};
use crate::config::Section;
use crate::content::{self, Identity};
use crate::shell::layout::{format_thousands, Frame};
use crate::terminal::{Pane, Terminal};
use crossterm::style::Color;

const METER_W: usize = 12;

/// Everything the content panel needs for one frame
pub struct View<'a> {
    pub section: Section,
    pub shown_chars: usize,
    pub scroll: i32,
    pub command: Option<&'a str>,
    pub notice: Option<&'a str>,
    pub blink: bool,
}

/// Draws the center panel and returns how many content rows the active
/// section produced, so the caller can clamp scrolling.
pub fn draw(
    term: &mut Terminal,
    theme: &Theme,
    frame: &Frame,
    view: &View,
    identity: &Identity,
) -> i32 {
    frame.draw(term);

    let fx = frame.inner_x() + 1;
    let ih = frame.inner_height();

    term.set_str(
        fx,
        frame.inner_y(),
        &format!("{}@portfolio:~$", view.section.name()),
        Some(colors::PROMPT_DIM),
        false,
    );

    let rows = {
        let mut pane = term.pane(
            fx,
            frame.inner_y() + 2,
            frame.inner_width().saturating_sub(2),
            ih.saturating_sub(4),
        );
        let start = -view.scroll;
        let end = match view.section {
            Section::About => draw_about(&mut pane, theme, start, view.shown_chars),
            Section::Projects => draw_projects(&mut pane, theme, start),
            Section::Skills => draw_skills(&mut pane, theme, start),
            Section::Resume => draw_resume(&mut pane, theme, start),
            Section::Contact => draw_contact(&mut pane, theme, start, identity),
        };
        end + view.scroll
    };

    let footer_y = frame.inner_y() + ih as i32 - 2;
    match view.command {
        Some(input) => {
            term.set_str(fx, footer_y, &format!("$ {}", input), Some(colors::PROMPT), true);
            if view.blink {
                term.set(
                    fx + 2 + input.chars().count() as i32,
                    footer_y,
                    '█',
                    Some(colors::PROMPT),
                    false,
                );
            }
        }
        None => {
            let cmds = content::quick_commands(view.section);
            let (dim, _) = theme.color(0);
            term.set_str(fx, footer_y, &format!("Quick: {}", cmds.join(" · ")), Some(dim), false);
        }
    }
    if let Some(notice) = view.notice {
        term.set_str(fx, footer_y + 1, notice, Some(StatusColor::Critical.color()), false);
    }

    rows
}

/// Typewritten bio. Shell prompt lines render green, prose in the
/// scheme color, with a block cursor at the reveal point.
fn draw_about(pane: &mut Pane, theme: &Theme, mut row: i32, shown: usize) -> i32 {
    let (mid, _) = theme.color(1);
    let text: String = content::ABOUT_TEXT.chars().take(shown).collect();
    let done = shown >= content::ABOUT_TEXT.chars().count();

    let mut last_len = 0;
    for line in text.split('\n') {
        if line.starts_with('$') {
            pane.set_str(0, row, line, Some(colors::PROMPT), true);
        } else {
            pane.set_str(0, row, line, Some(mid), false);
        }
        last_len = line.chars().count();
        row += 1;
    }
    if !done {
        pane.set(last_len as i32, row - 1, '█', Some(colors::PROMPT), false);
    }
    row + 1
}

fn draw_projects(pane: &mut Pane, theme: &Theme, mut row: i32) -> i32 {
    let (bright, _) = theme.color(2);
    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);

    for project in &content::PROJECTS {
        pane.set_str(0, row, &format!("> {}", project.name), Some(bright), true);
        let tag = format!("[{}]", project.status.label());
        pane.set_str_right(row, &tag, Some(project.status.status_color().color()), true);
        row += 1;
        pane.set_str(2, row, project.description, Some(mid), false);
        row += 1;
        pane.set_str(2, row, &project.tech.join(" · "), Some(dim), false);
        row += 1;
        pane.set_str(
            2,
            row,
            &format!("Lines of code: {}", format_thousands(project.lines)),
            Some(dim),
            false,
        );
        row += 2;
    }

    for (i, line) in content::GIT_LOG_LINES.iter().enumerate() {
        if i == 0 {
            pane.set_str(0, row, line, Some(colors::PROMPT), true);
        } else {
            pane.set_str(0, row, line, Some(colors::PROMPT_DIM), false);
        }
        row += 1;
    }
    row + 1
}

fn draw_skills(pane: &mut Pane, theme: &Theme, mut row: i32) -> i32 {
    let (bright, _) = theme.color(2);
    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);

    for category in &content::SKILL_CATEGORIES {
        pane.set_str(0, row, &format!("└── {}/", category.name), Some(colors::PROMPT), true);
        row += 1;
        for skill in category.skills {
            pane.set_str(4, row, skill.name, Some(mid), false);
            let filled = (skill.level as usize * METER_W) / 100;
            pane.set_str(18, row, &"█".repeat(filled), Some(bright), false);
            pane.set_str(
                18 + filled as i32,
                row,
                &"░".repeat(METER_W - filled),
                Some(Color::DarkGrey),
                false,
            );
            pane.set_str(
                19 + METER_W as i32,
                row,
                &format!("{:>3}%  {}y", skill.level, skill.years),
                Some(dim),
                false,
            );
            row += 1;
        }
        row += 1;
    }

    pane.set_str(0, row, "$ which tools", Some(colors::PROMPT), true);
    row += 1;
    for chunk in content::TOOLS.chunks(5) {
        pane.set_str(2, row, &chunk.join("  "), Some(mid), false);
        row += 1;
    }
    row += 1;

    pane.set_str(0, row, "$ uptime", Some(colors::PROMPT), true);
    row += 1;
    pane.set_str(0, row, content::UPTIME_JOKE, Some(dim), false);
    row + 2
}

fn draw_resume(pane: &mut Pane, theme: &Theme, mut row: i32) -> i32 {
    let (bright, _) = theme.color(2);
    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);
    let edu = &content::EDUCATION;

    pane.set_str(0, row, "## EDUCATION", Some(bright), true);
    row += 1;
    pane.set_str(2, row, edu.degree, Some(mid), false);
    pane.set_str_right(row, edu.period, Some(dim), false);
    row += 1;
    pane.set_str(2, row, edu.school, Some(dim), false);
    pane.set_str_right(row, &format!("GPA {}", edu.gpa), Some(dim), false);
    row += 1;
    pane.set_str(2, row, &format!("{} · {}", edu.location, edu.graduation), Some(dim), false);
    row += 2;

    pane.set_str(0, row, "## EXPERIENCE", Some(bright), true);
    row += 1;
    for job in &content::EXPERIENCE {
        pane.set_str(2, row, &format!("{} @ {}", job.position, job.company), Some(mid), true);
        pane.set_str_right(row, job.period, Some(dim), false);
        row += 1;
        pane.set_str(2, row, job.description, Some(dim), false);
        row += 1;
        for achievement in job.achievements {
            pane.set_str(4, row, &format!("- {}", achievement), Some(dim), false);
            row += 1;
        }
        row += 1;
    }

    pane.set_str(0, row, "## COURSEWORK", Some(bright), true);
    row += 1;
    for chunk in content::COURSEWORK.chunks(2) {
        let line = if chunk.len() == 2 {
            format!("{:<32}{}", chunk[0], chunk[1])
        } else {
            chunk[0].to_string()
        };
        pane.set_str(2, row, &line, Some(dim), false);
        row += 1;
    }
    row += 1;

    pane.set_str(0, row, "## ACTIVITIES", Some(bright), true);
    row += 1;
    for activity in &content::ACTIVITIES {
        pane.set_str(2, row, &format!("- {}", activity), Some(dim), false);
        row += 1;
    }
    row += 1;

    pane.set_str(0, row, content::WC_FOOTER[0], Some(colors::PROMPT), true);
    row += 1;
    pane.set_str(0, row, content::WC_FOOTER[1], Some(colors::PROMPT_DIM), false);
    row + 2
}

fn draw_contact(pane: &mut Pane, theme: &Theme, mut row: i32, identity: &Identity) -> i32 {
    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);

    pane.set_str(0, row, "$ cat contact.txt", Some(colors::PROMPT), true);
    row += 2;

    let channels = [
        ("NAME", identity.name.as_str()),
        ("EMAIL", identity.email.as_str()),
        ("GITHUB", identity.github.as_str()),
        ("LINKEDIN", identity.linkedin.as_str()),
    ];
    for (label, value) in channels {
        pane.set_str(2, row, label, Some(dim), false);
        pane.set_str(12, row, value, Some(mid), false);
        row += 1;
    }
    row += 1;

    pane.set_str(2, row, "STATUS", Some(dim), false);
    pane.set_str(12, row, "Available for opportunities", Some(Color::Green), true);
    row += 2;

    for (i, line) in content::PING_FOOTER.iter().enumerate() {
        if i == 0 {
            pane.set_str(0, row, line, Some(colors::PROMPT), true);
        } else {
            pane.set_str(0, row, line, Some(dim), false);
        }
        row += 1;
    }
    row + 1
}
