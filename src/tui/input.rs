use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Submit,
    Cancel,
    Quit,
}

/// Single-line editor state; cursor is a char index into `buf`.
struct LineEditor {
    buf: Vec<char>,
    cursor: usize,
    max_len: usize,
    accept: fn(char) -> bool,
}

impl LineEditor {
    fn new(initial: &str, max_len: usize, accept: fn(char) -> bool) -> Self {
        let buf: Vec<char> = initial.chars().filter(|c| accept(*c)).take(max_len).collect();
        let cursor = buf.len();
        Self {
            buf,
            cursor,
            max_len,
            accept,
        }
    }

    fn text(&self) -> String {
        self.buf.iter().collect()
    }

    fn apply(&mut self, key: KeyEvent) -> Option<Outcome> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Some(Outcome::Quit),
            KeyCode::Char('q') if ctrl => return Some(Outcome::Cancel),
            KeyCode::Char('u') if ctrl => {
                self.buf.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Some(Outcome::Cancel),
            KeyCode::Enter => return Some(Outcome::Submit),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buf.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.buf.len() {
                    self.buf.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.buf.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buf.len(),
            KeyCode::Char(c) if !ctrl && (self.accept)(c) && self.buf.len() < self.max_len => {
                self.buf.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        None
    }
}

fn run_editor(prompt: &str, editor: &mut LineEditor) -> Option<String> {
    // Without raw mode we can't edit; hand back the initial value
    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(editor.text()),
    };

    let redraw = |editor: &LineEditor| {
        print!("\r{}: {}\x1b[K", prompt, editor.text());
        print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor);
        flush();
    };
    redraw(editor);

    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                if let Some(outcome) = editor.apply(key) {
                    break outcome;
                }
                redraw(editor);
            }
            Ok(_) => {}
            Err(_) => break Outcome::Cancel,
        }
    };

    drop(guard);
    println!();

    match outcome {
        Outcome::Submit => Some(editor.text()),
        Outcome::Cancel => None,
        Outcome::Quit => {
            // process::exit skips destructors
            reset_terminal();
            std::process::exit(0);
        }
    }
}

/// Free-text input. `None` when cancelled with Esc or Ctrl+Q.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut editor = LineEditor::new(initial_value, 256, |c| !c.is_control());
    run_editor(prompt, &mut editor)
}

/// Digits-only input. `None` when cancelled or left empty.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut editor = LineEditor::new(&initial_value.to_string(), 4, |c| c.is_ascii_digit());
    run_editor(prompt, &mut editor).and_then(|s| s.parse().ok())
}
