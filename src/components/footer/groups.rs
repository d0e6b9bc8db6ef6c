use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Normal => {
            let selected_editable = state
                .selected
                .and_then(|id| state.template(id))
                .is_some_and(|t| t.editable);

            let mut groups = vec![FooterGroup {
                name: "NAV",
                items: vec![
                    FooterItem::new("j/k", "move"),
                    FooterItem::new("/", "search"),
                    FooterItem {
                        key: "C",
                        desc: "clear",
                        highlighted: !state.ui.search_term.is_empty(),
                    },
                ],
            }];

            let mut command = vec![FooterItem::new("Enter/y", "copy")];
            if selected_editable {
                command.push(FooterItem::new("e", "edit"));
            }
            groups.push(FooterGroup {
                name: "CMD",
                items: command,
            });

            groups.push(FooterGroup {
                name: "APP",
                items: vec![
                    FooterItem::new("T", "theme"),
                    FooterItem::new("?", "help"),
                    FooterItem::new("q", "quit"),
                ],
            });
            groups
        }
        AppMode::Search => vec![FooterGroup {
            name: "SEARCH",
            items: vec![
                FooterItem::new("Enter", "keep"),
                FooterItem::new("Esc", "clear"),
                FooterItem::new("↑/↓", "move"),
            ],
        }],
        AppMode::Edit => vec![FooterGroup {
            name: "EDIT",
            items: vec![
                FooterItem::new("Enter/Esc", "done"),
                FooterItem::new("Ctrl+Y", "copy"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc/?", "close")],
        }],
        AppMode::ThemeSelection => vec![FooterGroup {
            name: "THEME",
            items: vec![
                FooterItem::new("j/k", "move"),
                FooterItem::new("Enter", "apply"),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
    }
}
