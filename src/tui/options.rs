use crate::app::{Action, App, CopyTarget, Notice};
use crate::clipboard::Clipboard;
use crate::pass::{CharacterClass, MAX_LENGTH, MIN_LENGTH};
use crate::random::IndexSource;
use crate::store::KeyValueStore;
use crate::terminal::{clear, reset_terminal};

use super::{enter_prompt, get_editable_input, get_numeric_input, print_help, print_main_screen};

#[derive(Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Apply(Action),
    EditLength,
    Help,
    Quit,
}

/// Parse one menu line. History numbers are 1-based, as displayed.
pub fn parse_menu_command(input: &str) -> Result<MenuCommand, String> {
    let mut parts = input.split_whitespace();
    let head = parts.next().unwrap_or("");
    let arg = parts.next();
    if parts.next().is_some() {
        return Err("Invalid selection".to_string());
    }

    let entry = |arg: Option<&str>| -> Result<usize, String> {
        match arg.map(str::parse::<usize>) {
            Some(Ok(n)) if n >= 1 => Ok(n - 1),
            _ => Err("Enter an entry number, e.g. 'd 2'".to_string()),
        }
    };

    let command = match (head, arg) {
        ("", None) => MenuCommand::Apply(Action::Generate),
        ("1", None) => MenuCommand::EditLength,
        ("2", None) => MenuCommand::Apply(Action::ToggleClass(CharacterClass::Upper)),
        ("3", None) => MenuCommand::Apply(Action::ToggleClass(CharacterClass::Lower)),
        ("4", None) => MenuCommand::Apply(Action::ToggleClass(CharacterClass::Digit)),
        ("5", None) => MenuCommand::Apply(Action::ToggleClass(CharacterClass::Symbol)),
        ("c", None) => MenuCommand::Apply(Action::Copy(CopyTarget::Current)),
        ("c", arg) => MenuCommand::Apply(Action::Copy(CopyTarget::History(entry(arg)?))),
        ("d", arg) => MenuCommand::Apply(Action::Delete(entry(arg)?)),
        ("x", None) => MenuCommand::Apply(Action::Export),
        ("t", None) => MenuCommand::Apply(Action::ToggleTheme),
        ("h" | "help", None) => MenuCommand::Help,
        ("q", None) => MenuCommand::Quit,
        _ => return Err("Invalid selection".to_string()),
    };
    Ok(command)
}

pub fn gen_main_menu<S, C, R>(app: &mut App<S, C, R>)
where
    S: KeyValueStore,
    C: Clipboard,
    R: IndexSource,
{
    let mut notice: Option<Notice> = None;

    loop {
        reset_terminal();
        clear();
        print_main_screen(
            app.state(),
            app.history(),
            app.strength(),
            notice.take().as_ref(),
        );

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => continue,
        };

        match parse_menu_command(&input) {
            Ok(MenuCommand::Apply(action)) => notice = app.update(action),
            Ok(MenuCommand::EditLength) => {
                let prompt = format!("Enter password length ({MIN_LENGTH}-{MAX_LENGTH})");
                if let Some(len) = get_numeric_input(&prompt, app.state().length) {
                    notice = app.update(Action::SetLength(len));
                }
            }
            Ok(MenuCommand::Help) => {
                clear();
                print_help();
                let _ = get_editable_input("Press Enter to return", "");
            }
            Ok(MenuCommand::Quit) => {
                clear();
                break;
            }
            Err(msg) => notice = Some(Notice::error(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_on_enter() {
        assert_eq!(
            parse_menu_command(""),
            Ok(MenuCommand::Apply(Action::Generate))
        );
        assert_eq!(
            parse_menu_command("   "),
            Ok(MenuCommand::Apply(Action::Generate))
        );
    }

    #[test]
    fn test_class_toggles() {
        assert_eq!(
            parse_menu_command("5"),
            Ok(MenuCommand::Apply(Action::ToggleClass(CharacterClass::Symbol)))
        );
        assert_eq!(parse_menu_command("1"), Ok(MenuCommand::EditLength));
    }

    #[test]
    fn test_entry_numbers_are_one_based() {
        assert_eq!(
            parse_menu_command("d 1"),
            Ok(MenuCommand::Apply(Action::Delete(0)))
        );
        assert_eq!(
            parse_menu_command("c 3"),
            Ok(MenuCommand::Apply(Action::Copy(CopyTarget::History(2))))
        );
        assert_eq!(
            parse_menu_command("c"),
            Ok(MenuCommand::Apply(Action::Copy(CopyTarget::Current)))
        );
    }

    #[test]
    fn test_invalid_entries() {
        assert!(parse_menu_command("d").is_err());
        assert!(parse_menu_command("d 0").is_err());
        assert!(parse_menu_command("d x").is_err());
        assert!(parse_menu_command("d 1 2").is_err());
        assert!(parse_menu_command("zz").is_err());
        assert!(parse_menu_command("1 5").is_err());
    }

    #[test]
    fn test_misc_commands() {
        assert_eq!(parse_menu_command("q"), Ok(MenuCommand::Quit));
        assert_eq!(parse_menu_command("help"), Ok(MenuCommand::Help));
        assert_eq!(
            parse_menu_command("t"),
            Ok(MenuCommand::Apply(Action::ToggleTheme))
        );
        assert_eq!(
            parse_menu_command("x"),
            Ok(MenuCommand::Apply(Action::Export))
        );
    }
}
