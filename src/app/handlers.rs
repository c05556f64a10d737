//! Keyboard and mouse handling for App.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::App;

impl App {
    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => self.update_terminal_dimensions(width, height),
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key press may change what is drawn
        self.mark_dirty();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('d') => self.toggle_theme(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.step_tab(true),
            KeyCode::Left | KeyCode::Char('h') => self.step_tab(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected_link(),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.select_nth_tab(index);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.set_pointer(mouse.column, mouse.row)
            }
            MouseEventKind::ScrollDown => self.move_cursor(true),
            MouseEventKind::ScrollUp => self.move_cursor(false),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Focus;
    use crate::state::{SkillsTab, StatsTab};
    use crossterm::event::{KeyEventState, MouseButton};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = App::default();
            app.handle_key(key(code));
            assert!(app.should_quit);
        }

        let mut app = App::default();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_d_toggles_dark_mode() {
        let mut app = App::default();
        app.handle_key(key(KeyCode::Char('d')));
        assert!(app.view.dark_mode());
    }

    #[test]
    fn test_tab_then_arrows_switch_stats() {
        let mut app = App::default();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Stats);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.view.stats_tab(), StatsTab::Manga);
        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.view.stats_tab(), StatsTab::Anime);
    }

    #[test]
    fn test_number_keys_select_directly() {
        let mut app = App::default();
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.focus, Focus::Skills);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.view.skills_tab(), SkillsTab::Hacking);
        app.handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.view.skills_tab(), SkillsTab::Editing);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::default();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_event(Event::Key(release));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_resize_updates_dimensions() {
        let mut app = App::default();
        app.handle_event(Event::Resize(120, 40));
        assert_eq!((app.terminal_width, app.terminal_height), (120, 40));
    }

    #[test]
    fn test_mouse_move_sets_pointer() {
        let mut app = App::default();
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.pointer, Some((10, 5)));

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.pointer, Some((10, 5)));
    }
}
