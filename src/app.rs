//! Interactive terminal session: input polling, fixed-rate ticking, drawing

use crate::colors::ColorState;
use crate::config::LifeConfig;
use crate::error::AppError;
use crate::grid::ScreenPos;
use crate::help::{render_help_overlay, HELP_TEXT};
use crate::patterns::{Pattern, PATTERNS};
use crate::simulation::{Command, RunState, Simulation, Trigger};
use crate::terminal::{Input, Terminal};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton};
use std::time::{Duration, Instant};

/// Upper bound on how long one loop iteration waits for input
const FRAME: Duration = Duration::from_millis(16);

/// Renderer-side state; the simulation knows nothing about it
struct ViewState {
    show_grid: bool,
    show_help: bool,
    colors: ColorState,
    next_pattern: usize,
    dirty: bool,
}

enum Action {
    Quit,
    Command(Command),
    Redraw,
    Nothing,
}

impl ViewState {
    fn handle_key(&mut self, code: KeyCode, mods: KeyModifiers, state: RunState) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Enter => Action::Command(Command::Start),
            KeyCode::Up => Action::Command(Command::Randomize),
            KeyCode::Char('c') => Action::Command(Command::Clear),
            // loading is ignored while running; keep the cycle where it is
            KeyCode::Char('p') if state == RunState::Running => Action::Nothing,
            KeyCode::Char('p') => {
                let pattern = &PATTERNS[self.next_pattern % PATTERNS.len()];
                self.next_pattern += 1;
                Action::Command(Command::LoadPattern(pattern))
            }
            KeyCode::Char('g') => {
                self.show_grid = !self.show_grid;
                Action::Redraw
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
                Action::Redraw
            }
            code if self.colors.handle_key(code) => Action::Redraw,
            _ => Action::Nothing,
        }
    }
}

fn click_command(button: MouseButton, x: u16, y: u16) -> Option<Command> {
    let trigger = match button {
        MouseButton::Left => Trigger::Primary,
        MouseButton::Right => Trigger::Secondary,
        MouseButton::Middle => return None,
    };
    Some(Command::Toggle {
        pos: ScreenPos::new(x as i32, y as i32),
        trigger,
    })
}

/// Run the interactive session until the user quits.
///
/// The screen is the terminal minus its last row (status line), measured in
/// character cells.
pub fn run(
    mut config: LifeConfig,
    seed: u64,
    pattern: Option<&'static Pattern>,
) -> Result<(), AppError> {
    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    config.screen_width = width as i32;
    config.screen_height = height.saturating_sub(1) as i32;

    let mut sim = Simulation::new(&config, seed)?;
    if let Some(pattern) = pattern {
        sim.load_pattern(pattern);
    }

    let interval = Duration::from_secs_f32(config.tick_interval());
    let mut view = ViewState {
        show_grid: false,
        show_help: false,
        colors: ColorState::default(),
        next_pattern: 0,
        dirty: true,
    };
    let mut last_tick = Instant::now();

    term.clear_screen()?;

    'main: loop {
        let wait = if sim.is_running() {
            interval.saturating_sub(last_tick.elapsed()).min(FRAME)
        } else {
            FRAME
        };

        let mut next = term.wait_input(wait)?;
        while let Some(input) = next {
            let action = match input {
                Input::Key(code, mods) => view.handle_key(code, mods, sim.state()),
                Input::Click { button, x, y } => {
                    click_command(button, x, y).map_or(Action::Nothing, Action::Command)
                }
                Input::Resize(w, h) => {
                    term.resize(w, h);
                    term.clear_screen()?;
                    Action::Redraw
                }
            };
            match action {
                Action::Quit => break 'main,
                Action::Command(command) => {
                    if matches!(command, Command::Start) {
                        last_tick = Instant::now();
                    }
                    let changes = sim.apply(command);
                    view.dirty |= !changes.is_empty();
                }
                Action::Redraw => view.dirty = true,
                Action::Nothing => {}
            }
            next = term.poll_input()?;
        }

        if sim.is_running() && last_tick.elapsed() >= interval {
            last_tick = Instant::now();
            sim.tick();
            // the generation counter changes even when no cell does
            view.dirty = true;
        }

        if view.dirty {
            draw(&mut term, &sim, &view);
            term.render()?;
            view.dirty = false;
        }
    }

    tracing::info!(generation = sim.generation(), population = sim.population(), "session ended");
    Ok(())
}

fn draw(term: &mut Terminal, sim: &Simulation, view: &ViewState) {
    term.clear();
    let world = sim.world();
    let grid = sim.grid();

    for (coord, rect, alive) in world.cells() {
        if alive {
            let neighbors = grid.neighbors(coord).filter(|n| world.is_alive(*n)).count();
            let (color, bold) = view.colors.live_cell(neighbors);
            let (width, height) = term.size();
            for y in rect.y.max(0)..(rect.y + rect.height).min(height as i32) {
                for x in rect.x.max(0)..(rect.x + rect.width).min(width as i32) {
                    term.set(x, y, '█', Some(color), bold);
                }
            }
        } else if view.show_grid {
            if let Some(cell) = world.cell(coord) {
                term.set(cell.center.x, cell.center.y, '·', Some(view.colors.grid_line()), false);
            }
        }
    }

    let (_, height) = term.size();
    let state = match sim.state() {
        RunState::Running => "RUNNING",
        RunState::Paused => "PAUSED",
    };
    let status = format!(
        " {state}  gen {}  pop {}/{}  ? help ",
        sim.generation(),
        sim.population(),
        sim.grid().len()
    );
    term.set_str(0, height as i32 - 1, &status, Some(view.colors.status(sim.is_running())), true);

    if view.show_help {
        render_help_overlay(term, HELP_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewState {
        ViewState {
            show_grid: false,
            show_help: false,
            colors: ColorState::default(),
            next_pattern: 0,
            dirty: false,
        }
    }

    #[test]
    fn keys_map_to_commands() {
        let mut v = view();
        assert!(matches!(
            v.handle_key(KeyCode::Enter, KeyModifiers::NONE, RunState::Paused),
            Action::Command(Command::Start)
        ));
        assert!(matches!(
            v.handle_key(KeyCode::Up, KeyModifiers::NONE, RunState::Paused),
            Action::Command(Command::Randomize)
        ));
        assert!(matches!(
            v.handle_key(KeyCode::Char('c'), KeyModifiers::NONE, RunState::Paused),
            Action::Command(Command::Clear)
        ));
        assert!(matches!(
            v.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL, RunState::Paused),
            Action::Quit
        ));
    }

    #[test]
    fn grid_overlay_is_view_state() {
        let mut v = view();
        assert!(matches!(
            v.handle_key(KeyCode::Char('g'), KeyModifiers::NONE, RunState::Paused),
            Action::Redraw
        ));
        assert!(v.show_grid);
        v.handle_key(KeyCode::Char('g'), KeyModifiers::NONE, RunState::Paused);
        assert!(!v.show_grid);
    }

    #[test]
    fn pattern_key_cycles() {
        let mut v = view();
        let Action::Command(Command::LoadPattern(first)) =
            v.handle_key(KeyCode::Char('p'), KeyModifiers::NONE, RunState::Paused)
        else {
            panic!("expected a pattern command");
        };
        let Action::Command(Command::LoadPattern(second)) =
            v.handle_key(KeyCode::Char('p'), KeyModifiers::NONE, RunState::Paused)
        else {
            panic!("expected a pattern command");
        };
        assert_eq!(first.name, PATTERNS[0].name);
        assert_eq!(second.name, PATTERNS[1].name);
    }

    #[test]
    fn pattern_cycle_holds_while_running() {
        let mut v = view();
        v.handle_key(KeyCode::Char('p'), KeyModifiers::NONE, RunState::Paused);
        assert!(matches!(
            v.handle_key(KeyCode::Char('p'), KeyModifiers::NONE, RunState::Running),
            Action::Nothing
        ));
        let Action::Command(Command::LoadPattern(next)) =
            v.handle_key(KeyCode::Char('p'), KeyModifiers::NONE, RunState::Paused)
        else {
            panic!("expected a pattern command");
        };
        assert_eq!(next.name, PATTERNS[1].name);
    }

    #[test]
    fn mouse_buttons_pick_trigger() {
        assert!(matches!(
            click_command(MouseButton::Left, 3, 4),
            Some(Command::Toggle { trigger: Trigger::Primary, pos }) if pos == ScreenPos::new(3, 4)
        ));
        assert!(matches!(
            click_command(MouseButton::Right, 0, 0),
            Some(Command::Toggle { trigger: Trigger::Secondary, .. })
        ));
        assert!(click_command(MouseButton::Middle, 0, 0).is_none());
    }
}
