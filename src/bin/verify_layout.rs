use gitbuddy::app::action::Action;
use gitbuddy::app::reducer;
use gitbuddy::app::state::AppState;
use gitbuddy::app::ui;
use gitbuddy::domain::models::CommandId;
use gitbuddy::theme::PaletteType;
use ratatui::{backend::TestBackend, Terminal};

fn sweep(app_state: &mut AppState) {
    for width in 0..100 {
        for height in 0..50 {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            let _ = terminal.draw(|f| {
                ui::draw(f, app_state);
            });
        }
    }
}

fn main() {
    let scenarios: Vec<(&str, Vec<Action>)> = vec![
        ("normal", vec![]),
        ("search", vec![Action::EnterSearchMode]),
        (
            "filtered",
            vec![Action::SetSearchTerm("branch".to_string())],
        ),
        (
            "empty result",
            vec![Action::SetSearchTerm("zzzz".to_string())],
        ),
        (
            "edit",
            vec![Action::ToggleEdit(Some(CommandId::new(2, 0)))],
        ),
        ("help", vec![Action::ToggleHelp]),
        ("themes", vec![Action::EnterThemeSelection]),
    ];

    for palette in PaletteType::all() {
        for (name, actions) in &scenarios {
            let mut app_state = AppState::new(&Default::default(), *palette);
            for action in actions {
                reducer::update(&mut app_state, action.clone());
            }
            sweep(&mut app_state);
            println!("{} / {name}: ok", palette.label());
        }
    }

    // Long status line with a value filling the whole command
    let mut app_state = AppState::default();
    let id = CommandId::new(1, 1);
    app_state.ui.editable_values.insert(id, "x".repeat(300));
    app_state.ui.copied = Some(id);
    app_state.set_status(
        format!("Copied: git branch {}", "x".repeat(300)),
        std::time::Duration::from_secs(60),
    );
    sweep(&mut app_state);

    println!("Layout verification completed successfully!");
}
