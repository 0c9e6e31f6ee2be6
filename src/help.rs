use crate::terminal::Terminal;
use crossterm::style::Color;

/// Keys available in every view, appended to each view's own list
const GLOBAL_HELP: &str = "  !/@/#/$    color scheme (phosphor/amber/mono/neon)
  )          default scheme (cyan)
  ?          toggle this help
  q          quit";

/// Assemble a help text from a view title and its key bindings
pub fn build_help(title: &str, bindings: &[(&str, &str)]) -> String {
    let mut help = String::from(title);
    help.push_str("\n\n");
    for (key, action) in bindings {
        help.push_str(&format!("  {:<10} {}\n", key, action));
    }
    help.push_str(GLOBAL_HELP);
    help
}

/// Render a centered help overlay box into the back buffer
pub fn render_help_overlay(term: &mut Terminal, width: u16, height: u16, help_text: &str) {
    if help_text.is_empty() {
        return;
    }

    let lines: Vec<&str> = help_text.lines().collect();
    let text_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_width = text_width + 4; // 2 chars padding each side
    let box_height = lines.len() + 2; // 1 row border top/bottom

    let x0 = ((width as usize).saturating_sub(box_width) / 2) as i32;
    let y0 = ((height as usize).saturating_sub(box_height) / 2) as i32;

    let border = Some(Color::White);
    let text = Some(Color::Grey);

    let horizontal = "─".repeat(box_width - 2);
    term.set_str(x0, y0, &format!("┌{}┐", horizontal), border, false);

    for (i, line) in lines.iter().enumerate() {
        let y = y0 + 1 + i as i32;
        let pad = text_width.saturating_sub(line.chars().count());
        term.set(x0, y, '│', border, false);
        term.set_str(
            x0 + 1,
            y,
            &format!(" {}{} ", line, " ".repeat(pad)),
            text,
            false,
        );
        term.set(x0 + box_width as i32 - 1, y, '│', border, false);
    }

    term.set_str(
        x0,
        y0 + box_height as i32 - 1,
        &format!("└{}┘", horizontal),
        border,
        false,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_help_without_bindings() {
        let help = build_help("Desktop", &[]);
        assert!(help.starts_with("Desktop\n\n"));
        assert!(help.contains("toggle this help"));
        assert!(help.contains("color scheme"));
    }

    #[test]
    fn build_help_with_bindings() {
        let help = build_help("Globe", &[("space", "pause rotation"), ("g", "back")]);
        assert!(help.contains("space"));
        assert!(help.contains("pause rotation"));
        let pause_line = help.lines().find(|l| l.contains("pause")).unwrap();
        let global_line = help.lines().find(|l| l.contains("toggle")).unwrap();
        assert_eq!(pause_line.find("pause"), global_line.find("toggle"));
    }
}
