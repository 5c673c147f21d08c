use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::tasks::TaskListController;
use crate::ui::screen_layout;

use super::{App, Focus, Message, Model, ToastLevel, update};

fn create_test_model() -> Model {
    Model::new(TaskListController::new(), (80, 24))
}

fn model_with_tasks(tasks: &[&str]) -> Model {
    Model::new(
        TaskListController::new().with_tasks(tasks.iter().copied()),
        (80, 24),
    )
}

fn type_text(mut model: Model, text: &str) -> Model {
    for c in text.chars() {
        model = update(model, Message::InputChar(c));
    }
    model
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_typing_then_commit_adds_task() {
    let model = type_text(create_test_model(), "Buy milk");
    let model = update(model, Message::Commit);
    assert_eq!(model.tasks.tasks(), ["Buy milk"]);
    assert!(model.tasks.input().is_empty());
    assert_eq!(model.selected, Some(0));
    assert_eq!(
        model.active_toast().map(|(_, level)| level),
        Some(ToastLevel::Info)
    );
}

#[test]
fn test_commit_blank_input_is_silent() {
    let model = type_text(create_test_model(), "   ");
    let model = update(model, Message::Commit);
    assert!(model.tasks.is_empty());
    assert!(model.active_toast().is_none());
}

#[test]
fn test_edit_then_commit_saves_in_place() {
    let model = model_with_tasks(&["a", "b"]);
    let model = update(model, Message::EditTask(1));
    assert_eq!(model.tasks.input().text(), "b");
    assert_eq!(model.focus, Focus::Input);
    let model = update(model, Message::SetInput("B".to_string()));
    let model = update(model, Message::Commit);
    assert_eq!(model.tasks.tasks(), ["a", "B"]);
    assert_eq!(model.tasks.edit_cursor(), None);
    assert_eq!(model.selected, Some(1));
}

#[test]
fn test_cancel_leaves_list_unchanged() {
    let model = model_with_tasks(&["a"]);
    let model = update(model, Message::EditTask(0));
    let model = update(model, Message::InputBackspace);
    let model = update(model, Message::Cancel);
    assert_eq!(model.tasks.tasks(), ["a"]);
    assert!(model.tasks.input().is_empty());
    assert!(!model.tasks.is_editing());
}

#[test]
fn test_delete_out_of_range_shows_warning() {
    let model = model_with_tasks(&["a"]);
    let model = update(model, Message::DeleteTask(3));
    assert_eq!(model.tasks.tasks(), ["a"]);
    let (message, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Warning);
    assert!(message.contains("out of range"));
}

#[test]
fn test_edit_out_of_range_keeps_idle() {
    let model = model_with_tasks(&["a"]);
    let model = update(model, Message::EditTask(1));
    assert!(!model.tasks.is_editing());
    assert_eq!(
        model.active_toast().map(|(_, level)| level),
        Some(ToastLevel::Warning)
    );
}

#[test]
fn test_delete_selected_clamps_selection() {
    let model = model_with_tasks(&["a", "b", "c"]);
    let model = update(model, Message::SelectRow(2));
    let model = update(model, Message::DeleteSelected);
    assert_eq!(model.tasks.tasks(), ["a", "b"]);
    assert_eq!(model.selected, Some(1));

    let model = update(model, Message::DeleteSelected);
    let model = update(model, Message::DeleteSelected);
    assert!(model.tasks.is_empty());
    assert_eq!(model.selected, None);
}

#[test]
fn test_delete_during_edit_drops_edit_cursor() {
    let model = model_with_tasks(&["a", "b", "c"]);
    let model = update(model, Message::EditTask(2));
    let model = update(model, Message::DeleteTask(0));
    assert_eq!(model.tasks.edit_cursor(), None);
    assert_eq!(model.tasks.input().text(), "c");
    assert_eq!(model.tasks.commit_label(), "Submit");
}

#[test]
fn test_select_next_and_prev_stay_in_bounds() {
    let model = model_with_tasks(&["a", "b"]);
    let model = update(model, Message::SelectNext);
    assert_eq!(model.selected, Some(0));
    let model = update(model, Message::SelectNext);
    let model = update(model, Message::SelectNext);
    assert_eq!(model.selected, Some(1));
    let model = update(model, Message::SelectPrev);
    let model = update(model, Message::SelectPrev);
    assert_eq!(model.selected, Some(0));
}

#[test]
fn test_select_next_on_empty_list_selects_nothing() {
    let model = update(create_test_model(), Message::SelectNext);
    assert_eq!(model.selected, None);
}

#[test]
fn test_selection_scrolls_into_view() {
    let tasks: Vec<String> = (1..=40).map(|i| format!("task {i}")).collect();
    let model = Model::new(TaskListController::new().with_tasks(tasks), (80, 24));
    let capacity = model.visible_rows();
    let model = update(model, Message::SelectRow(30));
    assert!(model.visible_range().contains(&30));
    assert_eq!(model.list_scroll_offset, 30 + 1 - capacity);

    let model = update(model, Message::SelectRow(2));
    assert_eq!(model.list_scroll_offset, 2);
}

#[test]
fn test_scroll_is_clamped_to_list_length() {
    let tasks: Vec<String> = (1..=20).map(|i| format!("task {i}")).collect();
    let model = Model::new(TaskListController::new().with_tasks(tasks), (80, 24));
    let capacity = model.visible_rows();
    let model = update(model, Message::ScrollDown(100));
    assert_eq!(model.list_scroll_offset, 20 - capacity);
    let model = update(model, Message::ScrollUp(100));
    assert_eq!(model.list_scroll_offset, 0);
}

#[test]
fn test_focus_list_selects_first_visible_row() {
    let model = model_with_tasks(&["a", "b"]);
    let model = update(model, Message::SwitchFocus);
    assert_eq!(model.focus, Focus::List);
    assert_eq!(model.selected, Some(0));
    let model = update(model, Message::SwitchFocus);
    assert_eq!(model.focus, Focus::Input);
}

#[test]
fn test_resize_updates_dimensions() {
    let model = update(create_test_model(), Message::Resize(100, 40));
    assert_eq!((model.width, model.height), (100, 40));
}

#[test]
fn test_toggle_help_and_quit() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_toast_expires() {
    let mut model = type_text(create_test_model(), "x");
    model = update(model, Message::Commit);
    assert!(model.active_toast().is_some());
    let later = std::time::Instant::now() + std::time::Duration::from_secs(10);
    assert!(model.expire_toast(later));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_walkthrough_via_messages() {
    let mut model = create_test_model();
    model = update(model, Message::SetInput("Buy milk".to_string()));
    model = update(model, Message::Commit);
    model = update(model, Message::SetInput("Walk dog".to_string()));
    model = update(model, Message::Commit);
    model = update(model, Message::EditTask(0));
    model = update(model, Message::SetInput("Buy oat milk".to_string()));
    model = update(model, Message::Commit);
    assert_eq!(model.tasks.tasks(), ["Buy oat milk", "Walk dog"]);
    model = update(model, Message::DeleteTask(1));
    model = update(model, Message::SetInput("   ".to_string()));
    model = update(model, Message::Commit);
    assert_eq!(model.tasks.tasks(), ["Buy oat milk"]);
}

// Key handling

#[test]
fn test_input_keys_map_to_input_messages() {
    let model = create_test_model();
    assert_eq!(
        App::handle_key(key(KeyCode::Char('x')), &model),
        Some(Message::InputChar('x'))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::Commit)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Esc), &model),
        Some(Message::Cancel)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Tab), &model),
        Some(Message::FocusList)
    );
    // 'q' is text while typing, not quit.
    assert_eq!(
        App::handle_key(key(KeyCode::Char('q')), &model),
        Some(Message::InputChar('q'))
    );
}

#[test]
fn test_ctrl_u_clears_input() {
    let model = create_test_model();
    let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
    assert_eq!(
        App::handle_key(ctrl_u, &model),
        Some(Message::SetInput(String::new()))
    );
}

#[test]
fn test_list_keys_map_to_list_messages() {
    let mut model = model_with_tasks(&["a", "b"]);
    model.focus = Focus::List;
    assert_eq!(
        App::handle_key(key(KeyCode::Char('j')), &model),
        Some(Message::SelectNext)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('d')), &model),
        Some(Message::DeleteSelected)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Enter), &model),
        Some(Message::EditSelected)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('G')), &model),
        Some(Message::SelectRow(1))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('q')), &model),
        Some(Message::Quit)
    );
}

#[test]
fn test_ctrl_c_quits_from_any_focus() {
    let model = create_test_model();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(App::handle_key(ctrl_c, &model), Some(Message::Quit));
}

#[test]
fn test_any_key_hides_help() {
    let mut model = create_test_model();
    model.help_visible = true;
    assert_eq!(
        App::handle_key(key(KeyCode::Char('x')), &model),
        Some(Message::HideHelp)
    );
}

#[test]
fn test_key_release_is_ignored() {
    let model = create_test_model();
    let mut release = key(KeyCode::Char('x'));
    release.kind = KeyEventKind::Release;
    assert_eq!(App::handle_event(&Event::Key(release), &model), None);
}

#[test]
fn test_paste_flattens_newlines() {
    let model = create_test_model();
    let msg = App::handle_event(&Event::Paste("b\r\nc".to_string()), &model);
    assert_eq!(msg, Some(Message::InputPaste("b  c".to_string())));
}

#[test]
fn test_paste_inserts_at_caret() {
    let model = update(create_test_model(), Message::SetInput("Buy milk".to_string()));
    let model = update(model, Message::InputHome);
    let msg = App::handle_event(&Event::Paste("Now: ".to_string()), &model).unwrap();
    let model = update(model, msg);
    assert_eq!(model.tasks.input().text(), "Now: Buy milk");
    assert_eq!(model.tasks.input().cursor(), 5);

    let model = update(model, Message::InputChar('x'));
    assert_eq!(model.tasks.input().text(), "Now: xBuy milk");
}

// Mouse handling

#[test]
fn test_click_buttons_commit_and_cancel() {
    let model = create_test_model();
    let layout = screen_layout(Rect::new(0, 0, 80, 24));
    let submit = layout.submit_button;
    let cancel = layout.cancel_button;
    assert_eq!(
        App::handle_mouse(click(submit.x + 1, submit.y + 1), &model),
        Some(Message::Commit)
    );
    assert_eq!(
        App::handle_mouse(click(cancel.x + 1, cancel.y + 1), &model),
        Some(Message::Cancel)
    );
}

#[test]
fn test_click_row_actions_use_rendered_index() {
    let tasks: Vec<String> = (1..=30).map(|i| format!("task {i}")).collect();
    let mut model = Model::new(TaskListController::new().with_tasks(tasks), (80, 24));
    model = update(model, Message::ScrollDown(5));
    let layout = screen_layout(Rect::new(0, 0, 80, 24));
    let row = layout.row_rect(2);
    let [task, delete, edit] = layout.row_cells(row);

    assert_eq!(
        App::handle_mouse(click(delete.x, row.y), &model),
        Some(Message::DeleteTask(7))
    );
    assert_eq!(
        App::handle_mouse(click(edit.x, row.y), &model),
        Some(Message::EditTask(7))
    );
    assert_eq!(
        App::handle_mouse(click(task.x + 3, row.y), &model),
        Some(Message::SelectRow(7))
    );
}

#[test]
fn test_click_input_focuses_it() {
    let mut model = model_with_tasks(&["a"]);
    model.focus = Focus::List;
    let layout = screen_layout(Rect::new(0, 0, 80, 24));
    assert_eq!(
        App::handle_mouse(click(layout.input.x + 4, layout.input.y + 1), &model),
        Some(Message::FocusInput)
    );
}

#[test]
fn test_wheel_scrolls_list() {
    let model = create_test_model();
    let wheel = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(
        App::handle_mouse(wheel, &model),
        Some(Message::ScrollDown(1))
    );
}
