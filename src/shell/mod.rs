//! Desktop shell: header, navigation, content and system panels in a
//! single cooperative frame loop. The globe view borrows the terminal
//! while open and hands it back on exit.

pub mod header;
pub mod layout;
pub mod nav;
pub mod panel;
pub mod system;

use crate::boot;
use crate::colors::Theme;
use crate::config::{DeviceClass, ProfileOverride, Section, ShellConfig};
use crate::content::{self, Identity};
use crate::globe::{self, NetStatus, ViewExit};
use crate::help;
use crate::settings::Settings;
use crate::shell::layout::Frame;
use crate::terminal::Terminal;
use crate::timer::Interval;
use chrono::Local;
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::io;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

const TYPE_MS: u64 = 30;
const STATUS_BAR_H: u16 = 3;

/// Per-character reveal for the about section. Progress is a pure
/// function of time since the last restart, so pacing is stable at any
/// frame rate.
pub struct Typewriter {
    started: Instant,
    total: usize,
    skipped: bool,
}

impl Typewriter {
    pub fn new(total: usize) -> Self {
        Self {
            started: Instant::now(),
            total,
            skipped: false,
        }
    }

    pub fn restart(&mut self) {
        self.started = Instant::now();
        self.skipped = false;
    }

    pub fn skip(&mut self) {
        self.skipped = true;
    }

    pub fn shown(&self) -> usize {
        if self.skipped {
            self.total
        } else {
            chars_at(self.started.elapsed().as_millis() as u64, self.total)
        }
    }

    pub fn done(&self) -> bool {
        self.shown() >= self.total
    }
}

fn chars_at(elapsed_ms: u64, total: usize) -> usize {
    ((elapsed_ms / TYPE_MS) as usize).min(total)
}

/// Footer prompt state. History recall walks from the most recent
/// entry backwards.
pub struct CommandLine {
    pub input: String,
    history: Vec<String>,
    recall: Option<usize>,
}

impl CommandLine {
    fn new() -> Self {
        Self {
            input: String::new(),
            history: Vec::new(),
            recall: None,
        }
    }

    fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.recall = None;
    }

    fn backspace(&mut self) {
        self.input.pop();
    }

    fn recall_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.recall {
            None => 0,
            Some(i) => (i + 1).min(self.history.len() - 1),
        };
        self.recall = Some(next);
        self.input = self.history[self.history.len() - 1 - next].clone();
    }

    fn recall_next(&mut self) {
        match self.recall {
            None => {}
            Some(0) => {
                self.recall = None;
                self.input.clear();
            }
            Some(i) => {
                self.recall = Some(i - 1);
                self.input = self.history[self.history.len() - 1 - (i - 1)].clone();
            }
        }
    }

    /// Clears the prompt, recording non-empty input in the history
    fn take(&mut self) -> String {
        let cmd = self.input.trim().to_string();
        if !cmd.is_empty() {
            self.history.push(cmd.clone());
        }
        self.input.clear();
        self.recall = None;
        cmd
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Goto(Section),
    Globe,
    Help,
    Clear,
    Quit,
}

/// Maps typed commands to actions. Accepts the quick-command strings
/// and a few obvious aliases; anything unknown is None.
pub fn parse_command(input: &str) -> Option<Command> {
    let cmd = input.trim().trim_start_matches("$ ").trim().to_lowercase();
    match cmd.as_str() {
        "whoami" | "about" | "about.sh" | "cat about.txt" | "ls -la /personal" => {
            Some(Command::Goto(Section::About))
        }
        "projects" | "projects.sh" | "ls projects" | "ls -la /projects" | "cat projects.md"
        | "git log --oneline" => Some(Command::Goto(Section::Projects)),
        "skills" | "skills.sh" | "cat skills" | "cat /proc/skills" | "ls skills/"
        | "cat specializations.txt" => Some(Command::Goto(Section::Skills)),
        "resume" | "resume.sh" | "cat resume.md" | "cat experience.txt" | "cat education.txt" => {
            Some(Command::Goto(Section::Resume))
        }
        "contact" | "contact.sh" | "cat contact.txt" | "ping social-media"
        | "curl -x get /contact" => Some(Command::Goto(Section::Contact)),
        "globe" | "netmap" | "world" => Some(Command::Globe),
        "help" | "man portfolio" => Some(Command::Help),
        "clear" | "cls" => Some(Command::Clear),
        "exit" | "quit" | "logout" | "shutdown" => Some(Command::Quit),
        _ => None,
    }
}

struct ShellState {
    section: Section,
    cursor: usize,
    command: Option<CommandLine>,
    typewriter: Typewriter,
    scroll: i32,
    content_rows: i32,
    notice: Option<String>,
    show_help: bool,
    uptime_secs: u64,
    clock: String,
    second_timer: Interval,
    logs: VecDeque<String>,
    log_timer: Interval,
}

impl ShellState {
    fn new(section: Section) -> Self {
        Self {
            section,
            cursor: section.index(),
            command: None,
            typewriter: Typewriter::new(content::ABOUT_TEXT.chars().count()),
            scroll: 0,
            content_rows: 0,
            notice: None,
            show_help: false,
            uptime_secs: 0,
            clock: Local::now().format("%H:%M:%S").to_string(),
            second_timer: Interval::every_ms(1000),
            logs: VecDeque::new(),
            log_timer: Interval::every_ms(5000),
        }
    }

    /// Switch sections; selecting the active one again finishes the
    /// typewriter instead of restarting it.
    fn activate(&mut self, section: Section) {
        if section == self.section {
            self.typewriter.skip();
            return;
        }
        self.section = section;
        self.cursor = section.index();
        self.scroll = 0;
        self.notice = None;
        self.typewriter.restart();
    }

    fn tick(&mut self, rng: &mut StdRng) {
        if self.second_timer.fire() {
            self.uptime_secs += 1;
            self.clock = Local::now().format("%H:%M:%S").to_string();
        }
        if self.log_timer.fire() {
            let msg = system::LOG_MESSAGES[rng.gen_range(0..system::LOG_MESSAGES.len())];
            let stamp = Local::now().format("%H:%M:%S");
            self.logs.push_back(format!("[{}] {}", stamp, msg));
            while self.logs.len() > system::LOG_KEEP {
                self.logs.pop_front();
            }
        }
    }
}

enum KeyOutcome {
    Handled,
    OpenGlobe,
    Quit,
}

fn handle_key(state: &mut ShellState, theme: &mut Theme, code: KeyCode) -> KeyOutcome {
    // An open prompt swallows everything except its own controls
    if let Some(line) = state.command.as_mut() {
        match code {
            KeyCode::Esc => state.command = None,
            KeyCode::Enter => {
                let input = line.take();
                state.command = None;
                if input.is_empty() {
                    return KeyOutcome::Handled;
                }
                return match parse_command(&input) {
                    Some(Command::Goto(section)) => {
                        state.activate(section);
                        KeyOutcome::Handled
                    }
                    Some(Command::Globe) => KeyOutcome::OpenGlobe,
                    Some(Command::Help) => {
                        state.show_help = true;
                        KeyOutcome::Handled
                    }
                    Some(Command::Clear) => {
                        state.notice = None;
                        state.scroll = 0;
                        KeyOutcome::Handled
                    }
                    Some(Command::Quit) => KeyOutcome::Quit,
                    None => {
                        state.notice = Some(format!("sh: command not found: {}", input));
                        KeyOutcome::Handled
                    }
                };
            }
            KeyCode::Up => line.recall_prev(),
            KeyCode::Down => line.recall_next(),
            KeyCode::Backspace => line.backspace(),
            KeyCode::Char(c) => line.push_char(c),
            _ => {}
        }
        return KeyOutcome::Handled;
    }

    if theme.handle_key(code) {
        return KeyOutcome::Handled;
    }

    match code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Esc => {
            if state.show_help {
                state.show_help = false;
            } else if state.notice.is_some() {
                state.notice = None;
            } else {
                return KeyOutcome::Quit;
            }
        }
        KeyCode::Char('?') => state.show_help = !state.show_help,
        KeyCode::Char('g') => return KeyOutcome::OpenGlobe,
        KeyCode::Char(':') | KeyCode::Char('/') => state.command = Some(CommandLine::new()),
        KeyCode::Up | KeyCode::Char('k') => {
            state.cursor = state
                .cursor
                .checked_sub(1)
                .unwrap_or(Section::ALL.len() - 1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.cursor = (state.cursor + 1) % Section::ALL.len();
        }
        KeyCode::Enter => state.activate(Section::ALL[state.cursor]),
        KeyCode::Tab => {
            let next = state.section.next();
            state.activate(next);
        }
        KeyCode::Char(c @ '1'..='5') => {
            state.activate(Section::ALL[c as usize - '1' as usize]);
        }
        KeyCode::PageUp => state.scroll = (state.scroll - 5).max(0),
        KeyCode::PageDown => state.scroll += 5,
        _ => {}
    }
    KeyOutcome::Handled
}

pub fn run(config: &ShellConfig) -> io::Result<()> {
    let settings = Settings::load();
    let identity = Identity::resolve(&settings);
    let home = settings.home_coords();

    let seed = config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let mut term = Terminal::new(true)?;
    let mut theme = Theme::new(0);

    if !config.skip_boot {
        if !boot::run(&mut term)? {
            return Ok(());
        }
    }

    let help_text = help::build_help(
        "Portfolio Desktop",
        &[
            ("j/k/arrows", "move selection"),
            ("Enter", "open section"),
            ("Tab", "next section"),
            ("1-5", "jump to section"),
            (": or /", "command prompt"),
            ("PgUp/PgDn", "scroll content"),
            ("g", "network globe"),
        ],
    );

    let mut state = ShellState::new(config.start_section);
    let mut net: Option<NetStatus> = None;
    let mut frame: u64 = 0;

    term.clear_screen()?;

    loop {
        term.resize_if_needed()?;
        let (width, height) = term.size();

        if let Some((code, _)) = term.check_key()? {
            match handle_key(&mut state, &mut theme, code) {
                KeyOutcome::Quit => return Ok(()),
                KeyOutcome::OpenGlobe => {
                    let status = net.get_or_insert_with(|| NetStatus::new(config.offline));
                    let exit = globe::run_view(
                        &mut term,
                        &mut theme,
                        status,
                        &mut rng,
                        config.time_step,
                        config.profile,
                        home,
                    )?;
                    if exit == ViewExit::Quit {
                        return Ok(());
                    }
                    term.clear_screen()?;
                }
                KeyOutcome::Handled => {}
            }
        }

        state.tick(&mut rng);
        if let Some(status) = net.as_mut() {
            status.tick(&mut rng);
        }

        // Clamp against the previous frame's measured content height
        let visible = height as i32 - (header::HEIGHT + STATUS_BAR_H) as i32 - 6;
        state.scroll = state
            .scroll
            .clamp(0, (state.content_rows - visible.max(1)).max(0));

        render(&mut term, &theme, &mut state, &identity, config.profile, width, height, frame);
        if state.show_help {
            help::render_help_overlay(&mut term, width, height, &help_text);
        }
        term.present()?;
        term.sleep(config.time_step);
        frame += 1;
    }
}

#[allow(clippy::too_many_arguments)]
fn render(
    term: &mut Terminal,
    theme: &Theme,
    state: &mut ShellState,
    identity: &Identity,
    profile: ProfileOverride,
    width: u16,
    height: u16,
    frame: u64,
) {
    term.clear();
    header::draw(term, theme, width, &state.clock);

    let body_y = header::HEIGHT as i32;
    let body_h = height.saturating_sub(header::HEIGHT + STATUS_BAR_H);
    let blink = frame % 16 < 8;

    let (nav_w, content_w, system_w) = match profile.class_for(width) {
        DeviceClass::Wide => {
            let nav = width / 4;
            let content = width / 2;
            (nav, content, width - nav - content)
        }
        DeviceClass::Compact => {
            let nav = width / 3;
            (nav, width - nav, 0)
        }
    };

    let nav_frame = themed_frame(0, body_y, nav_w, body_h, "", theme);
    nav::draw(term, theme, &nav_frame, state.cursor, state.section);

    let content_frame = themed_frame(nav_w as i32, body_y, content_w, body_h, "MAIN SHELL", theme);
    let view = panel::View {
        section: state.section,
        shown_chars: state.typewriter.shown(),
        scroll: state.scroll,
        command: state.command.as_ref().map(|c| c.input.as_str()),
        notice: state.notice.as_deref(),
        blink,
    };
    let rows = panel::draw(term, theme, &content_frame, &view, identity);
    state.content_rows = rows;

    if system_w > 0 {
        let system_frame = themed_frame(
            (nav_w + content_w) as i32,
            body_y,
            system_w,
            body_h,
            "SYSTEM",
            theme,
        );
        system::draw(term, theme, &system_frame, state.uptime_secs, &state.logs, blink);
    }

    draw_status_bar(term, theme, width, height);
}

fn themed_frame(x: i32, y: i32, width: u16, height: u16, title: &str, theme: &Theme) -> Frame {
    let mut frame = Frame::new(x, y, width, height, title);
    frame.border_color = theme.color(0).0;
    frame.title_color = theme.color(2).0;
    frame
}

fn draw_status_bar(term: &mut Terminal, theme: &Theme, width: u16, height: u16) {
    let y0 = height as i32 - STATUS_BAR_H as i32;
    let mut frame = Frame::new(0, y0, width, STATUS_BAR_H, "");
    frame.border_color = theme.color(0).0;
    frame.draw(term);

    let (mid, _) = theme.color(1);
    let (dim, _) = theme.color(0);
    term.set_str(2, y0 + 1, "STATUS: ONLINE", Some(dim), false);
    let right = "CPU: 45%   MEM: 2.1GB   NET: 127.0.0.1";
    term.set_str(width as i32 - right.len() as i32 - 2, y0 + 1, right, Some(mid), false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_map_to_sections() {
        assert_eq!(parse_command("whoami"), Some(Command::Goto(Section::About)));
        assert_eq!(parse_command("$ whoami"), Some(Command::Goto(Section::About)));
        assert_eq!(parse_command("cat about.txt"), Some(Command::Goto(Section::About)));
        assert_eq!(parse_command("ls -la /projects"), Some(Command::Goto(Section::Projects)));
        assert_eq!(parse_command("cat /proc/skills"), Some(Command::Goto(Section::Skills)));
        assert_eq!(parse_command("cat resume.md"), Some(Command::Goto(Section::Resume)));
        assert_eq!(parse_command("curl -X GET /contact"), Some(Command::Goto(Section::Contact)));
        assert_eq!(parse_command("globe"), Some(Command::Globe));
        assert_eq!(parse_command("  EXIT  "), Some(Command::Quit));
        assert_eq!(parse_command("rm -rf /"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn history_recall_is_most_recent_first() {
        let mut line = CommandLine::new();
        line.input = "first".into();
        line.take();
        line.input = "second".into();
        line.take();

        line.recall_prev();
        assert_eq!(line.input, "second");
        line.recall_prev();
        assert_eq!(line.input, "first");
        // Pinned at the oldest entry
        line.recall_prev();
        assert_eq!(line.input, "first");

        line.recall_next();
        assert_eq!(line.input, "second");
        // Walking past the newest entry clears the prompt
        line.recall_next();
        assert_eq!(line.input, "");
    }

    #[test]
    fn blank_input_is_not_recorded() {
        let mut line = CommandLine::new();
        line.input = "   ".into();
        assert_eq!(line.take(), "");
        line.recall_prev();
        assert_eq!(line.input, "");
    }

    #[test]
    fn typewriter_reveals_at_fixed_rate() {
        assert_eq!(chars_at(0, 100), 0);
        assert_eq!(chars_at(29, 100), 0);
        assert_eq!(chars_at(30, 100), 1);
        assert_eq!(chars_at(300, 100), 10);
        assert_eq!(chars_at(30 * 1000, 100), 100);
    }

    #[test]
    fn activation_resets_view_state() {
        let mut state = ShellState::new(Section::About);
        state.scroll = 7;
        state.notice = Some("sh: command not found: x".into());

        state.activate(Section::Projects);
        assert_eq!(state.section, Section::Projects);
        assert_eq!(state.cursor, Section::Projects.index());
        assert_eq!(state.scroll, 0);
        assert!(state.notice.is_none());

        // Re-selecting the active section finishes the reveal instead
        state.activate(Section::Projects);
        assert!(state.typewriter.done());
    }
}
