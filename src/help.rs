use crate::terminal::Terminal;
use crossterm::style::Color;

pub const HELP_TEXT: &str = "\
LIFEGRID
Enter    Start the simulation
Click    Bring a cell to life
R-click  Kill a cell
Up       Randomize (paused)
c        Clear (paused)
p        Next pattern (paused)
g        Toggle grid overlay
!@#)     Color scheme
?        Close help
q/Esc    Quit";

/// Render a centered help overlay box with the provided text.
pub fn render_help_overlay(term: &mut Terminal, help_text: &str) {
    if help_text.is_empty() {
        return;
    }

    let (width, height) = term.size();
    let lines: Vec<&str> = help_text.lines().collect();
    let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_width = max_width + 4; // 2 chars padding each side
    let box_height = lines.len() + 2; // 1 row padding top/bottom

    // Center the box
    let start_x = (width as usize).saturating_sub(box_width) / 2;
    let start_y = (height as usize).saturating_sub(box_height) / 2;

    let border = Some(Color::White);
    let text = Some(Color::Grey);

    let horizontal = "─".repeat(box_width - 2);
    term.set_str(start_x as i32, start_y as i32, &format!("┌{horizontal}┐"), border, false);

    for (i, line) in lines.iter().enumerate() {
        let y = (start_y + 1 + i) as i32;
        let padding = max_width.saturating_sub(line.chars().count());
        term.set(start_x as i32, y, '│', border, false);
        term.set_str(
            start_x as i32 + 1,
            y,
            &format!(" {}{} ", line, " ".repeat(padding)),
            text,
            i == 0,
        );
        term.set((start_x + box_width - 1) as i32, y, '│', border, false);
    }

    let bottom_y = (start_y + box_height - 1) as i32;
    term.set_str(start_x as i32, bottom_y, &format!("└{horizontal}┘"), border, false);
}
