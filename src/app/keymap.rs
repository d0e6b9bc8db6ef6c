use super::action::Action;
use crate::theme::PaletteType;
use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    /// Extra bindings, key spec -> action name (e.g. `"ctrl-f" = "search"`).
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyMap {
    // List view bindings; input modes are handled in `input.rs`
    pub normal: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut normal = HashMap::new();

        // --- Shared ---
        normal.insert(key(KeyCode::Down), Action::SelectNext);
        normal.insert(key(KeyCode::Up), Action::SelectPrev);
        normal.insert(key(KeyCode::Home), Action::SelectFirst);
        normal.insert(key(KeyCode::End), Action::SelectLast);
        normal.insert(key(KeyCode::Enter), Action::CopyCommand(None));
        normal.insert(key(KeyCode::Esc), Action::CancelMode);
        normal.insert(chr('/'), Action::EnterSearchMode);
        normal.insert(chr('?'), Action::ToggleHelp);
        normal.insert(chr('q'), Action::Quit);

        match config.profile.as_str() {
            "arrows" => {
                normal.insert(key(KeyCode::F(2)), Action::ToggleEdit(None));
                normal.insert(ctrl('y'), Action::CopyCommand(None));
                normal.insert(ctrl('l'), Action::ClearSearch);
                normal.insert(ctrl('t'), Action::EnterThemeSelection);
            }
            profile => {
                if profile != "vim" {
                    tracing::warn!(profile, "unknown key profile, using vim");
                }
                normal.insert(chr('j'), Action::SelectNext);
                normal.insert(chr('k'), Action::SelectPrev);
                normal.insert(chr('g'), Action::SelectFirst);
                normal.insert(chr('G'), Action::SelectLast);
                normal.insert(chr('e'), Action::ToggleEdit(None));
                normal.insert(chr('y'), Action::CopyCommand(None));
                normal.insert(chr('c'), Action::CopyCommand(None));
                normal.insert(chr('C'), Action::ClearSearch);
                normal.insert(chr('T'), Action::EnterThemeSelection);
            }
        }

        if let Some(custom) = &config.custom {
            for (spec, name) in custom {
                match (parse_key(spec), parse_action(name)) {
                    (Some(event), Some(action)) => {
                        normal.insert(event, action);
                    }
                    _ => tracing::warn!(key = %spec, action = %name, "ignoring invalid key binding"),
                }
            }
        }

        Self { normal }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        // Some terminals report shifted symbols with SHIFT set
        let normalized = match event.code {
            KeyCode::Char(_) => KeyEvent::new(event.code, event.modifiers - KeyModifiers::SHIFT),
            _ => KeyEvent::new(event.code, event.modifiers),
        };
        self.normal.get(&normalized).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn chr(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Parses `"x"`, `"ctrl-x"`, `"alt-x"`, `"enter"`, `"f5"` and similar.
fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = spec;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl-") {
            modifiers |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt-") {
            modifiers |= KeyModifiers::ALT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest.to_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        lower => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => KeyCode::F(lower.strip_prefix('f')?.parse().ok()?),
            }
        }
    };
    Some(KeyEvent::new(code, modifiers))
}

/// Action names usable in `[keys.custom]`. `theme_<name>` switches straight to a palette.
fn parse_action(name: &str) -> Option<Action> {
    if let Some(palette) = name.strip_prefix("theme_") {
        return PaletteType::from_str(palette, true)
            .ok()
            .map(Action::SwitchTheme);
    }
    Some(match name {
        "quit" => Action::Quit,
        "select_next" => Action::SelectNext,
        "select_prev" => Action::SelectPrev,
        "select_first" => Action::SelectFirst,
        "select_last" => Action::SelectLast,
        "search" => Action::EnterSearchMode,
        "clear_search" => Action::ClearSearch,
        "edit" => Action::ToggleEdit(None),
        "copy" => Action::CopyCommand(None),
        "help" => Action::ToggleHelp,
        "theme" => Action::EnterThemeSelection,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_profile() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(chr('j')), Some(Action::SelectNext));
        assert_eq!(map.get_action(chr('e')), Some(Action::ToggleEdit(None)));
        assert_eq!(
            map.get_action(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT)),
            Some(Action::EnterThemeSelection)
        );
        assert_eq!(map.get_action(chr('x')), None);
    }

    #[test]
    fn test_arrows_profile_leaves_letters_unbound() {
        let config = KeyConfig {
            profile: "arrows".to_string(),
            custom: None,
        };
        let map = KeyMap::from_config(&config);
        assert_eq!(map.get_action(chr('j')), None);
        assert_eq!(map.get_action(ctrl('y')), Some(Action::CopyCommand(None)));
        assert_eq!(map.get_action(key(KeyCode::Down)), Some(Action::SelectNext));
    }

    #[test]
    fn test_custom_bindings() {
        let custom = HashMap::from([
            ("ctrl-f".to_string(), "search".to_string()),
            ("f5".to_string(), "copy".to_string()),
            ("x".to_string(), "explode".to_string()),
        ]);
        let config = KeyConfig {
            profile: "vim".to_string(),
            custom: Some(custom),
        };
        let map = KeyMap::from_config(&config);
        assert_eq!(map.get_action(ctrl('f')), Some(Action::EnterSearchMode));
        assert_eq!(
            map.get_action(key(KeyCode::F(5))),
            Some(Action::CopyCommand(None))
        );
        assert_eq!(map.get_action(chr('x')), None);
    }

    #[test]
    fn test_custom_theme_bindings() {
        let custom = HashMap::from([
            ("alt-n".to_string(), "theme_nord".to_string()),
            ("alt-g".to_string(), "theme_Gruvbox".to_string()),
            ("alt-s".to_string(), "theme_solarized".to_string()),
        ]);
        let config = KeyConfig {
            profile: "vim".to_string(),
            custom: Some(custom),
        };
        let map = KeyMap::from_config(&config);
        let alt = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT);
        assert_eq!(
            map.get_action(alt('n')),
            Some(Action::SwitchTheme(PaletteType::Nord))
        );
        assert_eq!(
            map.get_action(alt('g')),
            Some(Action::SwitchTheme(PaletteType::Gruvbox))
        );
        assert_eq!(map.get_action(alt('s')), None);
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("enter"), Some(key(KeyCode::Enter)));
        assert_eq!(
            parse_key("ctrl-alt-k"),
            Some(KeyEvent::new(
                KeyCode::Char('k'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            ))
        );
        assert_eq!(parse_key("bogus"), None);
    }
}
