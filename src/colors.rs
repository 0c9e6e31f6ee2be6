use crossterm::event::KeyCode;
use crossterm::style::Color;

/// Shell prompt accents stay green across schemes, like a real terminal
pub const PROMPT: Color = Color::Green;
pub const PROMPT_DIM: Color = Color::DarkGreen;

/// Shared color scheme state for the desktop and the globe
#[derive(Clone, Copy)]
pub struct Theme {
    pub scheme: u8,
}

impl Theme {
    pub fn new(default_scheme: u8) -> Self {
        Self {
            scheme: default_scheme,
        }
    }

    /// Handle color scheme key input. Returns true if key was handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('!') => self.scheme = 1, // Shift+1: phosphor
            KeyCode::Char('@') => self.scheme = 2, // Shift+2: amber
            KeyCode::Char('#') => self.scheme = 3, // Shift+3: mono
            KeyCode::Char('$') => self.scheme = 4, // Shift+4: neon
            KeyCode::Char(')') => self.scheme = 0, // Shift+0: cyan (default)
            _ => return false,
        }
        true
    }

    /// Color for an intensity step (0 darkest .. 3 brightest)
    pub fn color(&self, intensity: u8) -> (Color, bool) {
        scheme_color(self.scheme, intensity, false)
    }
}

/// Get color from scheme based on intensity (0-3)
pub fn scheme_color(scheme: u8, intensity: u8, bold: bool) -> (Color, bool) {
    match scheme {
        1 => match intensity {
            // Green (phosphor CRT)
            0 => (Color::DarkGreen, false),
            1 => (Color::Green, false),
            2 => (Color::Green, bold),
            _ => (Color::AnsiValue(10), true), // Bright green
        },
        2 => match intensity {
            // Yellow/Gold (amber CRT)
            0 => (Color::DarkYellow, false),
            1 => (Color::Yellow, false),
            2 => (Color::Yellow, bold),
            _ => (Color::AnsiValue(11), true), // Bright yellow
        },
        3 => match intensity {
            // White/Grey (mono)
            0 => (Color::DarkGrey, false),
            1 => (Color::Grey, false),
            2 => (Color::White, bold),
            _ => (Color::White, true),
        },
        4 => match intensity {
            // Blue/Magenta (neon)
            0 => (Color::DarkBlue, false),
            1 => (Color::Blue, false),
            2 => (Color::Magenta, bold),
            _ => (Color::AnsiValue(13), true), // Bright magenta
        },
        _ => match intensity {
            // Default: Cyan terminal chrome
            0 => (Color::DarkCyan, false),
            1 => (Color::Cyan, false),
            2 => (Color::Cyan, bold),
            _ => (Color::AnsiValue(14), true), // Bright cyan
        },
    }
}

/// Semantic status colors for tags and indicators. These stay fixed no
/// matter the scheme so "Production" always reads green.
#[derive(Clone, Copy)]
pub enum StatusColor {
    Good,     // online, production
    Warning,  // in development
    Critical, // errors
    Info,     // active, neutral facts
}

impl StatusColor {
    pub fn color(&self) -> Color {
        match self {
            StatusColor::Good => Color::Green,
            StatusColor::Warning => Color::Yellow,
            StatusColor::Critical => Color::Red,
            StatusColor::Info => Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_keys_update_theme() {
        let mut theme = Theme::new(0);
        assert!(theme.handle_key(KeyCode::Char('!')));
        assert_eq!(theme.scheme, 1);
        assert!(theme.handle_key(KeyCode::Char(')')));
        assert_eq!(theme.scheme, 0);
        assert!(!theme.handle_key(KeyCode::Char('q')));
        assert_eq!(theme.scheme, 0);
    }

    #[test]
    fn top_intensity_is_always_bold() {
        for scheme in 0..=4 {
            let (_, bold) = scheme_color(scheme, 3, false);
            assert!(bold, "scheme {} top intensity should be bold", scheme);
        }
    }
}
