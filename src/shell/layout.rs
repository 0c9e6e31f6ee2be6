use crate::terminal::Terminal;
use crossterm::style::Color;

// Box drawing characters (rounded)
pub const BOX_TL: char = '╭';
pub const BOX_TR: char = '╮';
pub const BOX_BL: char = '╰';
pub const BOX_BR: char = '╯';
pub const BOX_H: char = '─';
pub const BOX_V: char = '│';
pub const BOX_TITLE_L: char = '┤';
pub const BOX_TITLE_R: char = '├';

/// A bordered panel with a bracketed title on the top edge
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
    pub title: String,
    pub title_color: Color,
    pub border_color: Color,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: u16, height: u16, title: &str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            title: title.to_string(),
            title_color: Color::White,
            border_color: Color::DarkGrey,
        }
    }

    /// Inner content area, excluding the border
    pub fn inner_x(&self) -> i32 {
        self.x + 1
    }

    pub fn inner_y(&self) -> i32 {
        self.y + 1
    }

    pub fn inner_width(&self) -> u16 {
        self.width.saturating_sub(2)
    }

    pub fn inner_height(&self) -> u16 {
        self.height.saturating_sub(2)
    }

    pub fn draw(&self, term: &mut Terminal) {
        let w = self.width as i32;
        let h = self.height as i32;
        let bc = Some(self.border_color);

        term.set(self.x, self.y, BOX_TL, bc, false);
        for i in 1..w - 1 {
            term.set(self.x + i, self.y, BOX_H, bc, false);
        }
        term.set(self.x + w - 1, self.y, BOX_TR, bc, false);

        // Title sits centered in the top border: ┤ title ├
        if !self.title.is_empty() {
            let title_w = self.title.chars().count() as i32 + 4;
            if title_w <= w - 2 {
                let tx = self.x + (w - title_w) / 2;
                term.set(tx, self.y, BOX_TITLE_L, bc, false);
                term.set_str(
                    tx + 1,
                    self.y,
                    &format!(" {} ", self.title),
                    Some(self.title_color),
                    true,
                );
                term.set(tx + title_w - 1, self.y, BOX_TITLE_R, bc, false);
            }
        }

        for i in 1..h - 1 {
            term.set(self.x, self.y + i, BOX_V, bc, false);
            term.set(self.x + w - 1, self.y + i, BOX_V, bc, false);
        }

        term.set(self.x, self.y + h - 1, BOX_BL, bc, false);
        for i in 1..w - 1 {
            term.set(self.x + i, self.y + h - 1, BOX_H, bc, false);
        }
        term.set(self.x + w - 1, self.y + h - 1, BOX_BR, bc, false);
    }
}

/// Group digits with commas: 15420 -> "15,420"
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let first_group = digits.len() % 3;

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - first_group) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Zero-padded HH:MM:SS; hours keep counting past a day
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(15420), "15,420");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn uptime_is_zero_padded() {
        assert_eq!(format_uptime(0), "00:00:00");
        assert_eq!(format_uptime(61), "00:01:01");
        assert_eq!(format_uptime(3661), "01:01:01");
        assert_eq!(format_uptime(86399), "23:59:59");
        // Hours accumulate rather than rolling over
        assert_eq!(format_uptime(90_000), "25:00:00");
    }
}
