use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, has_selection: bool) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, has_selection);
        });
    });

    events
}

#[test]
fn test_r_emits_shader_reload_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::R, egui::Modifiers::default()),
        false,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ReloadShadersRequested)));
}

#[test]
fn test_delete_with_selection_emits_delete_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::Delete, egui::Modifiers::default()),
        true,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::DeleteSelectedRequested)));
}

#[test]
fn test_backspace_with_selection_emits_delete_intent() {
    let events = collect_with_key_event(
        key_event(egui::Key::Backspace, egui::Modifiers::default()),
        true,
    );

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::DeleteSelectedRequested)));
}

#[test]
fn test_delete_without_selection_emits_nothing() {
    let events = collect_with_key_event(
        key_event(egui::Key::Delete, egui::Modifiers::default()),
        false,
    );

    assert!(events.is_empty());
}

#[test]
fn test_ctrl_shift_c_emits_clear_intent() {
    let modifiers = egui::Modifiers {
        shift: true,
        ctrl: true,
        command: true,
        ..Default::default()
    };
    let events = collect_with_key_event(key_event(egui::Key::C, modifiers), false);

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::ClearRequested)));
}

#[test]
fn test_plain_c_does_not_clear() {
    let events = collect_with_key_event(
        key_event(egui::Key::C, egui::Modifiers::default()),
        true,
    );

    assert!(!events
        .iter()
        .any(|event| matches!(event, AppIntent::ClearRequested)));
}
