use crossterm::event::KeyCode;
use crossterm::style::Color;

/// Live-cell color scheme, switched with Shift+digit
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorState {
    pub scheme: u8,
}

impl ColorState {
    /// Handle color scheme key input. Returns true if key was handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('!') => self.scheme = 1,  // Shift+1: fire
            KeyCode::Char('@') => self.scheme = 2,  // Shift+2: ice
            KeyCode::Char('#') => self.scheme = 3,  // Shift+3: mono
            KeyCode::Char(')') => self.scheme = 0,  // Shift+0: green
            _ => return false,
        }
        true
    }

    /// Color for a live cell. Crowded cells (3 neighbors) are brightest,
    /// cells about to die are dimmest.
    pub fn live_cell(&self, neighbors: usize) -> (Color, bool) {
        let intensity = match neighbors {
            2 => 1,
            3 => 2,
            _ => 0,
        };
        scheme_color(self.scheme, intensity)
    }

    pub fn grid_line(&self) -> Color {
        Color::DarkGrey
    }

    pub fn status(&self, running: bool) -> Color {
        if running {
            scheme_color(self.scheme, 2).0
        } else {
            Color::Yellow
        }
    }
}

/// Get color from scheme based on intensity (0-2)
fn scheme_color(scheme: u8, intensity: u8) -> (Color, bool) {
    match scheme {
        1 => match intensity {  // Red/Yellow (fire)
            0 => (Color::DarkRed, false),
            1 => (Color::Red, false),
            _ => (Color::Yellow, true),
        },
        2 => match intensity {  // Blue/Cyan (ice)
            0 => (Color::DarkBlue, false),
            1 => (Color::Blue, false),
            _ => (Color::Cyan, true),
        },
        3 => match intensity {  // White/Grey (mono)
            0 => (Color::DarkGrey, false),
            1 => (Color::Grey, false),
            _ => (Color::White, true),
        },
        _ => match intensity {  // Default: green
            0 => (Color::DarkGreen, false),
            1 => (Color::Green, false),
            _ => (Color::AnsiValue(10), true),  // Bright green
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_digits_select_schemes() {
        let mut colors = ColorState::default();
        assert!(colors.handle_key(KeyCode::Char('@')));
        assert_eq!(colors.scheme, 2);
        assert!(colors.handle_key(KeyCode::Char(')')));
        assert_eq!(colors.scheme, 0);
        assert!(!colors.handle_key(KeyCode::Char('x')));
    }

    #[test]
    fn stable_cells_are_bold() {
        let colors = ColorState::default();
        assert!(colors.live_cell(3).1);
        assert!(!colors.live_cell(1).1);
    }
}
