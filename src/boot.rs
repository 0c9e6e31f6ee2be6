//! Simulated OS boot sequence shown before the desktop comes up.

use crate::terminal::Terminal;
use crate::timer::Interval;
use chrono::Local;
use crossterm::event::KeyCode;
use crossterm::style::Color;
use std::io;
use std::time::{Duration, Instant};

const BOOT_SCRIPT: [&str; 6] = [
    "Initializing system...",
    "Loading kernel modules...",
    "Mounting filesystems...",
    "Starting network services...",
    "Loading user interface...",
    "Portfolio OS v2.1.0 ready.",
];

const STEP_MS: u64 = 600;
const DOT_MS: u64 = 300;
const HOLD_MS: u64 = 1000;
const BAR_WIDTH: usize = 40;

const SPINNER: [char; 6] = ['⠋', '⠙', '⠸', '⠴', '⠦', '⠇'];

/// Progression of the boot script. Timers live outside so the ordering
/// rules stay testable: one line per step, dots cycling independently.
pub struct BootSequence {
    stamps: Vec<String>, // one timestamp per revealed line
    dots: usize,
}

impl BootSequence {
    pub fn new(first_stamp: String) -> Self {
        Self {
            stamps: vec![first_stamp],
            dots: 0,
        }
    }

    /// Reveal the next line. Does nothing once the script is complete.
    pub fn advance_step(&mut self, stamp: String) {
        if !self.complete() {
            self.stamps.push(stamp);
        }
    }

    pub fn advance_dots(&mut self) {
        self.dots = (self.dots + 1) % 4;
    }

    pub fn complete(&self) -> bool {
        self.stamps.len() == BOOT_SCRIPT.len()
    }

    pub fn revealed(&self) -> usize {
        self.stamps.len()
    }

    pub fn progress(&self) -> f32 {
        self.stamps.len() as f32 / BOOT_SCRIPT.len() as f32
    }

    pub fn dots(&self) -> &'static str {
        match self.dots {
            0 => "",
            1 => ".",
            2 => "..",
            _ => "...",
        }
    }

    /// Revealed lines as (timestamp, text) pairs in script order
    pub fn lines(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.stamps
            .iter()
            .map(|s| s.as_str())
            .zip(BOOT_SCRIPT.iter().copied())
    }
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Run the boot sequence until it finishes or a key skips it.
/// Returns false only when the user quit outright (q/Esc).
pub fn run(term: &mut Terminal) -> io::Result<bool> {
    let mut seq = BootSequence::new(timestamp());
    let mut step_timer = Interval::every_ms(STEP_MS);
    let mut dot_timer = Interval::every_ms(DOT_MS);
    let mut ready_at: Option<Instant> = None;
    let mut spinner_frame = 0;

    term.clear_screen()?;

    loop {
        if let Some((code, _)) = term.check_key()? {
            return Ok(!matches!(code, KeyCode::Char('q') | KeyCode::Esc));
        }

        if let Some(at) = ready_at {
            if Instant::now() >= at {
                return Ok(true);
            }
        }

        if dot_timer.fire() {
            seq.advance_dots();
            spinner_frame = (spinner_frame + 1) % SPINNER.len();
        }

        if step_timer.fire() && !seq.complete() {
            seq.advance_step(timestamp());
            if seq.complete() {
                // Hold the finished screen briefly before the desktop
                ready_at = Some(Instant::now() + Duration::from_millis(HOLD_MS));
            }
        }

        term.clear();
        render(term, &seq, spinner_frame);
        term.present()?;
        term.sleep(0.03);
    }
}

fn render(term: &mut Terminal, seq: &BootSequence, spinner_frame: usize) {
    let (width, height) = term.size();
    let total = BOOT_SCRIPT.len() as i32;
    let x0 = (width as i32 - 56).max(0) / 2;
    let y0 = (height as i32 - (total + 7)).max(0) / 2;

    term.set_str(x0, y0, "PORTFOLIO OS", Some(Color::Green), true);
    term.set(x0 + 13, y0, SPINNER[spinner_frame], Some(Color::Green), false);
    term.set_str(x0, y0 + 1, "BIOS v2.1.0", Some(Color::DarkGreen), false);

    for (i, (stamp, line)) in seq.lines().enumerate() {
        let y = y0 + 3 + i as i32;
        let current = i + 1 == seq.revealed() && !seq.complete();
        let (color, bold) = if current {
            (Color::Green, true)
        } else {
            (Color::DarkGreen, false)
        };
        term.set_str(x0, y, &format!("[{}] {}", stamp, line), Some(color), bold);
        if current {
            let used = 11 + line.chars().count() as i32;
            term.set_str(x0 + used, y, seq.dots(), Some(color), bold);
        }
    }

    let bar_y = y0 + 4 + total;
    let filled = (seq.progress() * BAR_WIDTH as f32).round() as usize;
    for i in 0..BAR_WIDTH {
        let (ch, color) = if i < filled {
            ('█', Color::Green)
        } else {
            ('░', Color::DarkGrey)
        };
        term.set(x0 + i as i32, bar_y, ch, Some(color), false);
    }
    let percent = format!(" {:3.0}%", seq.progress() * 100.0);
    term.set_str(
        x0 + BAR_WIDTH as i32,
        bar_y,
        &percent,
        Some(Color::DarkGreen),
        false,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp() -> String {
        "00:00:00".to_string()
    }

    #[test]
    fn lines_reveal_in_script_order() {
        let mut seq = BootSequence::new(stamp());
        assert_eq!(seq.revealed(), 1);
        assert!(!seq.complete());

        for expected in 2..=BOOT_SCRIPT.len() {
            seq.advance_step(stamp());
            assert_eq!(seq.revealed(), expected);
        }
        assert!(seq.complete());

        // Extra steps after completion change nothing
        seq.advance_step(stamp());
        assert_eq!(seq.revealed(), BOOT_SCRIPT.len());

        let texts: Vec<&str> = seq.lines().map(|(_, line)| line).collect();
        assert_eq!(texts, BOOT_SCRIPT.to_vec());
    }

    #[test]
    fn dots_cycle_through_four_states() {
        let mut seq = BootSequence::new(stamp());
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(seq.dots());
            seq.advance_dots();
        }
        assert_eq!(seen, vec!["", ".", "..", "..."]);
        assert_eq!(seq.dots(), "");
    }

    #[test]
    fn progress_reaches_one_at_completion() {
        let mut seq = BootSequence::new(stamp());
        assert!(seq.progress() > 0.0);
        while !seq.complete() {
            seq.advance_step(stamp());
        }
        assert!((seq.progress() - 1.0).abs() < f32::EPSILON);
    }
}
