use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::new();
    let a = state.push(ToastKind::Success, "saved", ToastOptions::default());
    let b = state.push(ToastKind::Error, "failed", ToastOptions::default());
    assert!(b > a);
    assert_eq!(state.toasts().len(), 2);
    assert_eq!(state.toasts()[0].message, "saved");
}

#[test]
fn options_carry_description_and_buttons() {
    let mut state = ToastState::new();
    let id = state.push(
        ToastKind::Default,
        "moved",
        ToastOptions::default()
            .description("undo available")
            .action(ToastAction::new("Undo"))
            .cancel(ToastAction::new("Close")),
    );
    let toast = state.get(id).unwrap();
    assert_eq!(toast.description.as_deref(), Some("undo available"));
    assert_eq!(toast.action.as_ref().map(|a| a.label.as_str()), Some("Undo"));
    assert_eq!(toast.cancel.as_ref().map(|a| a.label.as_str()), Some("Close"));
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = ToastState::new();
    let a = state.push(ToastKind::Info, "a", ToastOptions::default());
    let b = state.push(ToastKind::Info, "b", ToastOptions::default());
    assert!(state.dismiss(a));
    assert!(!state.dismiss(a));
    assert!(state.get(b).is_some());
    assert_eq!(state.toasts().len(), 1);
}

#[test]
fn dismiss_all_clears_queue() {
    let mut state = ToastState::new();
    state.push(ToastKind::Info, "a", ToastOptions::default());
    state.push(ToastKind::Warning, "b", ToastOptions::default());
    state.dismiss_all();
    assert!(state.toasts().is_empty());
}

#[test]
fn visible_is_newest_first_and_capped() {
    let mut state = ToastState::new();
    for i in 0..5 {
        state.push(ToastKind::Default, format!("t{i}"), ToastOptions::default());
    }
    let shown: Vec<_> = state.visible().map(|t| t.message.as_str()).collect();
    assert_eq!(shown, vec!["t4", "t3", "t2"]);
}

#[test]
fn settle_replaces_loading_toast() {
    let mut state = ToastState::new();
    let id = state.push(ToastKind::Loading, "saving", ToastOptions::default());
    assert_eq!(state.get(id).unwrap().duration_ms(), None);

    assert!(state.settle(id, ToastKind::Success, "saved"));
    let toast = state.get(id).unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "saved");
    assert_eq!(toast.duration_ms(), Some(DEFAULT_DURATION_MS));
}

#[test]
fn settle_after_dismiss_is_noop() {
    let mut state = ToastState::new();
    let id = state.push(ToastKind::Loading, "saving", ToastOptions::default());
    state.dismiss(id);
    assert!(!state.settle(id, ToastKind::Error, "failed"));
}

#[test]
fn css_modifiers_are_distinct() {
    let kinds = [
        ToastKind::Default,
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Info,
        ToastKind::Warning,
        ToastKind::Loading,
    ];
    let mut modifiers: Vec<_> = kinds.iter().map(|k| k.css_modifier()).collect();
    modifiers.dedup();
    assert_eq!(modifiers.len(), kinds.len());
}

#[test]
fn headless_tone_keeps_typed_kinds_and_defaults_to_info() {
    for kind in [ToastKind::Success, ToastKind::Error, ToastKind::Info, ToastKind::Warning] {
        assert_eq!(ToastKind::headless_tone(Some(kind)), kind);
    }
    assert_eq!(ToastKind::headless_tone(None), ToastKind::Info);
    assert_eq!(ToastKind::headless_tone(Some(ToastKind::Loading)), ToastKind::Info);
    assert_eq!(ToastKind::headless_tone(Some(ToastKind::Default)), ToastKind::Info);
}

#[test]
fn headless_flag_is_carried_and_auto_dismisses() {
    let mut state = ToastState::new();
    let plain = state.push(ToastKind::Info, "plain", ToastOptions::default());
    let bare = state.push(
        ToastKind::headless_tone(Some(ToastKind::Warning)),
        "bare",
        ToastOptions::default().description("details").headless(),
    );
    assert!(!state.get(plain).unwrap().headless);
    let toast = state.get(bare).unwrap();
    assert!(toast.headless);
    assert_eq!(toast.kind, ToastKind::Warning);
    assert_eq!(toast.description.as_deref(), Some("details"));
    assert_eq!(toast.duration_ms(), Some(DEFAULT_DURATION_MS));
}
