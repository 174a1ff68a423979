use approx::assert_relative_eq;
use glam::Vec2;
use motion_profile_editor::app::TouchContact;
use motion_profile_editor::{AppCommand, AppController, AppIntent, AppState};
use motion_profile_editor::{ConfigPatch, MotionPath, SegmentDef};

/// App-State mit Standard-Profil (ein Pfad, 25 Samples) und fixer
/// Canvas-Größe. Bei 650 px Breite und 50 px Padding links/rechts ist
/// die Punktbreite 550/24 px; das Geschwindigkeitsband liegt bei
/// y ∈ [200, 368].
fn editor_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [650.0, 400.0];
    state
}

fn contact(id: u64, x: f32, y: f32) -> TouchContact {
    TouchContact {
        id,
        pos: Vec2::new(x, y),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Datei- und App-Steuerung
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_save_without_known_path_opens_save_dialog() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");

    // Kein Dateipfad bekannt → Save-As-Dialog statt Schreiben
    assert!(state.ui.show_save_file_dialog);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::SaveProfile { path } => assert!(path.is_none()),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_new_profile_resets_document_history_and_view() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(50.0, 284.0),
            },
        )
        .unwrap();
    state.view.scroll_offset = 120.0;
    state.ui.current_file_path = Some("alt.json".to_string());
    assert!(state.can_undo());

    controller
        .handle_intent(&mut state, AppIntent::NewProfileRequested)
        .expect("NewProfileRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.keyframe_count(), 0);
    assert!(!state.can_undo());
    assert_eq!(state.view.scroll_offset, 0.0);
    assert!(state.ui.current_file_path.is_none());
}

#[test]
fn test_save_and_load_roundtrip_through_intents() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(325.0, 242.0),
            },
        )
        .unwrap();
    assert_eq!(state.keyframe_count(), 1);

    let path = std::env::temp_dir().join("motion_profile_editor_flow_test.json");
    let path_str = path.to_string_lossy().to_string();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected {
                path: path_str.clone(),
            },
        )
        .expect("Speichern sollte funktionieren");
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path_str.as_str()));

    // Frisches Programm, Datei laden
    let mut state = editor_state();
    controller
        .handle_intent(&mut state, AppIntent::FileSelected { path: path_str })
        .expect("Laden sollte funktionieren");

    assert_eq!(state.keyframe_count(), 1);
    let keyframe = &state.profile.active_path().unwrap().keyframes()[0];
    assert_relative_eq!(keyframe.x_pos, 0.5, epsilon = 1e-4);
    assert_relative_eq!(keyframe.y_pos, 0.75, epsilon = 1e-4);

    let _ = std::fs::remove_file(path);
}

// ═══════════════════════════════════════════════════════════════════
// Keyframe-Bearbeitung über die Canvas-Intents
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_canvas_press_adds_keyframe_at_domain_position() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    // Bandmitte am linken Inhaltsrand
    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(50.0, 284.0),
            },
        )
        .expect("CanvasPressed sollte ohne Fehler durchlaufen");

    assert_eq!(state.keyframe_count(), 1);
    let keyframe = &state.profile.active_path().unwrap().keyframes()[0];
    assert_eq!(keyframe.segment, 0);
    assert_relative_eq!(keyframe.x_pos, 0.0, epsilon = 1e-4);
    assert_relative_eq!(keyframe.y_pos, 0.5, epsilon = 1e-4);
    assert!(!keyframe.follow_bent_rate);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::AddKeyframeAtPosition { pos } => {
            assert_eq!(pos.segment, 0);
        }
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_canvas_press_in_padding_is_ignored() {
    let mut controller = AppController::new();
    let mut state = editor_state();
    let log_len = state.command_log.len();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(10.0, 284.0),
            },
        )
        .unwrap();

    // Nicht auflösbar → kein Command, kein Keyframe
    assert_eq!(state.keyframe_count(), 0);
    assert_eq!(state.command_log.len(), log_len);
}

#[test]
fn test_canvas_press_outside_speed_band_is_ignored() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(325.0, 30.0),
            },
        )
        .unwrap();

    assert_eq!(state.keyframe_count(), 0);
}

#[test]
fn test_add_keyframe_is_undoable_and_redoable() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(325.0, 284.0),
            },
        )
        .unwrap();
    assert_eq!(state.keyframe_count(), 1);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("UndoRequested sollte funktionieren");
    assert_eq!(state.keyframe_count(), 0);
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("Rückgängig: Keyframe hinzufügen")
    );

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("RedoRequested sollte funktionieren");
    assert_eq!(state.keyframe_count(), 1);

    let keyframe = &state.profile.active_path().unwrap().keyframes()[0];
    assert_relative_eq!(keyframe.x_pos, 0.5, epsilon = 1e-4);
    assert_relative_eq!(keyframe.y_pos, 0.5, epsilon = 1e-4);
}

#[test]
fn test_drag_moves_are_recorded_per_step() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(50.0, 284.0),
            },
        )
        .unwrap();
    let uid = state.profile.active_path().unwrap().keyframes()[0].uid;

    // Zwei Drag-Schritte: erst nach rechts, dann nach unten
    controller
        .handle_intent(
            &mut state,
            AppIntent::KeyframeDragMoved {
                uid,
                pos_px: Vec2::new(325.0, 284.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::KeyframeDragMoved {
                uid,
                pos_px: Vec2::new(325.0, 242.0),
            },
        )
        .unwrap();

    let keyframe = state.profile.active_path().unwrap().keyframe(uid).unwrap();
    assert_relative_eq!(keyframe.x_pos, 0.5, epsilon = 1e-4);
    assert_relative_eq!(keyframe.y_pos, 0.75, epsilon = 1e-4);

    // Verschieben verschmilzt nie: Add + 2 Schritte = 3 Einträge
    assert_eq!(state.history.depths(), (3, 0));

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    let keyframe = state.profile.active_path().unwrap().keyframe(uid).unwrap();
    assert_relative_eq!(keyframe.x_pos, 0.5, epsilon = 1e-4);
    assert_relative_eq!(keyframe.y_pos, 0.5, epsilon = 1e-4);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    let keyframe = state.profile.active_path().unwrap().keyframe(uid).unwrap();
    assert_relative_eq!(keyframe.x_pos, 0.0, epsilon = 1e-4);
    assert_relative_eq!(keyframe.y_pos, 0.5, epsilon = 1e-4);
}

#[test]
fn test_keyframe_click_toggles_follow_bent_rate() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(325.0, 284.0),
            },
        )
        .unwrap();
    let uid = state.profile.active_path().unwrap().keyframes()[0].uid;
    assert!(!state.profile.active_path().unwrap().keyframe(uid).unwrap().follow_bent_rate);

    controller
        .handle_intent(&mut state, AppIntent::KeyframeClicked { uid })
        .expect("KeyframeClicked sollte funktionieren");
    assert!(state.profile.active_path().unwrap().keyframe(uid).unwrap().follow_bent_rate);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert!(!state.profile.active_path().unwrap().keyframe(uid).unwrap().follow_bent_rate);
}

#[test]
fn test_keyframe_removal_is_undoable() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(325.0, 242.0),
            },
        )
        .unwrap();
    let uid = state.profile.active_path().unwrap().keyframes()[0].uid;

    controller
        .handle_intent(&mut state, AppIntent::KeyframeRemovalRequested { uid })
        .expect("Entfernen sollte funktionieren");
    assert_eq!(state.keyframe_count(), 0);

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert_eq!(state.keyframe_count(), 1);
    let keyframe = state.profile.active_path().unwrap().keyframe(uid).unwrap();
    assert_relative_eq!(keyframe.y_pos, 0.75, epsilon = 1e-4);
}

#[test]
fn test_removing_unknown_keyframe_records_nothing() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(&mut state, AppIntent::KeyframeRemovalRequested { uid: 99 })
        .expect("Unbekannte ID sollte robust ignoriert werden");

    // Nicht angewendet → nicht aufgezeichnet
    assert!(!state.can_undo());
}

#[test]
fn test_removal_clears_hovered_keyframe() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(325.0, 284.0),
            },
        )
        .unwrap();
    let uid = state.profile.active_path().unwrap().keyframes()[0].uid;

    controller
        .handle_intent(&mut state, AppIntent::KeyframeHovered { uid: Some(uid) })
        .unwrap();
    assert_eq!(state.ui.hovered_keyframe, Some(uid));

    controller
        .handle_intent(&mut state, AppIntent::KeyframeRemovalRequested { uid })
        .unwrap();
    assert_eq!(state.ui.hovered_keyframe, None);
}

// ═══════════════════════════════════════════════════════════════════
// Verschmelzen schneller Änderungsfolgen
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_rapid_config_commits_coalesce_to_one_entry() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    let first = ConfigPatch {
        speed_max: Some(50.0),
        ..ConfigPatch::default()
    };
    controller
        .handle_intent(&mut state, AppIntent::ConfigValueCommitted { patch: first })
        .unwrap();

    let second = ConfigPatch {
        speed_max: Some(60.0),
        ..ConfigPatch::default()
    };
    controller
        .handle_intent(&mut state, AppIntent::ConfigValueCommitted { patch: second })
        .unwrap();

    assert_relative_eq!(
        state.profile.active_path().unwrap().config.speed_max,
        60.0
    );
    // Beide Commits innerhalb des Merge-Fensters → ein Eintrag
    assert_eq!(state.history.depths(), (1, 0));

    // Undo springt auf den Zustand vor dem ERSTEN Commit zurück
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .unwrap();
    assert_relative_eq!(
        state.profile.active_path().unwrap().config.speed_max,
        40.0
    );
}

#[test]
fn test_merge_window_zero_disables_coalescing() {
    let mut controller = AppController::new();
    let mut state = editor_state();
    state.options.merge_window_ms = 0;

    let first = ConfigPatch {
        speed_max: Some(50.0),
        ..ConfigPatch::default()
    };
    controller
        .handle_intent(&mut state, AppIntent::ConfigValueCommitted { patch: first })
        .unwrap();

    let second = ConfigPatch {
        speed_max: Some(60.0),
        ..ConfigPatch::default()
    };
    controller
        .handle_intent(&mut state, AppIntent::ConfigValueCommitted { patch: second })
        .unwrap();

    assert_eq!(state.history.depths(), (2, 0));
}

#[test]
fn test_empty_config_patch_records_nothing() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ConfigValueCommitted {
                patch: ConfigPatch::default(),
            },
        )
        .unwrap();

    assert!(!state.can_undo());
}

// ═══════════════════════════════════════════════════════════════════
// Scrollen und Ansicht
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_wheel_scroll_is_clamped_to_content() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    // Weit über das Inhaltsende hinaus scrollen
    controller
        .handle_intent(
            &mut state,
            AppIntent::WheelScrolled {
                delta: Vec2::new(-10000.0, 0.0),
            },
        )
        .unwrap();

    // max_scroll = Punktbreite · (n−2) = 550/24 · 23
    assert_relative_eq!(state.view.scroll_offset, 527.083, epsilon = 1e-2);

    // Und zurück über den Anfang hinaus
    controller
        .handle_intent(
            &mut state,
            AppIntent::WheelScrolled {
                delta: Vec2::new(20000.0, 0.0),
            },
        )
        .unwrap();
    assert_eq!(state.view.scroll_offset, 0.0);
}

#[test]
fn test_wheel_axis_dominance_follows_bias() {
    let mut controller = AppController::new();
    let mut state = editor_state();
    state.view.scroll_offset = 100.0;

    // |dx| ≤ 1.5·|dy| → vertikale Achse gewinnt
    controller
        .handle_intent(
            &mut state,
            AppIntent::WheelScrolled {
                delta: Vec2::new(1.0, 4.0),
            },
        )
        .unwrap();
    assert_relative_eq!(state.view.scroll_offset, 96.0, epsilon = 1e-3);

    // |dx| > 1.5·|dy| → horizontale Achse gewinnt
    controller
        .handle_intent(
            &mut state,
            AppIntent::WheelScrolled {
                delta: Vec2::new(30.0, 2.0),
            },
        )
        .unwrap();
    assert_relative_eq!(state.view.scroll_offset, 66.0, epsilon = 1e-3);
}

#[test]
fn test_scroll_reset_requested() {
    let mut controller = AppController::new();
    let mut state = editor_state();
    state.view.scroll_offset = 100.0;

    controller
        .handle_intent(&mut state, AppIntent::ScrollResetRequested)
        .unwrap();

    assert_eq!(state.view.scroll_offset, 0.0);
}

#[test]
fn test_viewport_shrink_reclamps_scroll() {
    let mut controller = AppController::new();
    let mut state = editor_state();
    state.view.scroll_offset = 527.0;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [300.0, 400.0],
            },
        )
        .unwrap();

    // Neuer Inhalt 200 px breit → max_scroll = 200/24 · 23
    assert_relative_eq!(state.view.scroll_offset, 191.667, epsilon = 1e-2);
}

#[test]
fn test_path_switch_resets_scroll_and_hover() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    let second_id = state
        .profile
        .add_path(MotionPath::new("Pfad 2", vec![SegmentDef::new(10)]));
    state.view.scroll_offset = 100.0;
    state.ui.hovered_keyframe = Some(7);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ActivePathSelected {
                path_id: second_id,
            },
        )
        .expect("Pfadwechsel sollte funktionieren");

    assert_eq!(state.profile.active_path_id, Some(second_id));
    assert_eq!(state.view.scroll_offset, 0.0);
    assert_eq!(state.ui.hovered_keyframe, None);
}

#[test]
fn test_switch_to_unknown_path_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = editor_state();
    let active_before = state.profile.active_path_id;
    state.view.scroll_offset = 42.0;

    controller
        .handle_intent(
            &mut state,
            AppIntent::ActivePathSelected { path_id: 999 },
        )
        .expect("Unbekannte Pfad-Id sollte robust ignoriert werden");

    assert_eq!(state.profile.active_path_id, active_before);
    assert_relative_eq!(state.view.scroll_offset, 42.0);
}

// ═══════════════════════════════════════════════════════════════════
// Touch-Gesten von Kontakt-Frames bis zum Dokument
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_touch_tap_adds_keyframe() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::TouchFrame {
                contacts: vec![contact(1, 325.0, 284.0)],
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::TouchFrame { contacts: vec![] })
        .unwrap();

    assert_eq!(state.keyframe_count(), 1);
    let keyframe = &state.profile.active_path().unwrap().keyframes()[0];
    assert_relative_eq!(keyframe.x_pos, 0.5, epsilon = 1e-4);
    assert_relative_eq!(keyframe.y_pos, 0.5, epsilon = 1e-4);
}

#[test]
fn test_touch_tap_on_marker_toggles_follow() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CanvasPressed {
                pos_px: Vec2::new(325.0, 284.0),
            },
        )
        .unwrap();
    let uid = state.profile.active_path().unwrap().keyframes()[0].uid;

    // Tippen knapp neben dem Marker, innerhalb des Pick-Radius
    controller
        .handle_intent(
            &mut state,
            AppIntent::TouchFrame {
                contacts: vec![contact(1, 329.0, 287.0)],
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::TouchFrame { contacts: vec![] })
        .unwrap();

    assert_eq!(state.keyframe_count(), 1);
    assert!(state.profile.active_path().unwrap().keyframe(uid).unwrap().follow_bent_rate);
}

#[test]
fn test_touch_drag_scrolls_without_adding_keyframes() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::TouchFrame {
                contacts: vec![contact(1, 300.0, 284.0)],
            },
        )
        .unwrap();
    // 40 px nach links: über der Schwelle, Inhalt folgt dem Finger
    controller
        .handle_intent(
            &mut state,
            AppIntent::TouchFrame {
                contacts: vec![contact(1, 260.0, 284.0)],
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::TouchFrame { contacts: vec![] })
        .unwrap();

    assert_relative_eq!(state.view.scroll_offset, 40.0, epsilon = 1e-3);
    assert_eq!(state.keyframe_count(), 0);
}

#[test]
fn test_touch_below_threshold_still_taps() {
    let mut controller = AppController::new();
    let mut state = editor_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::TouchFrame {
                contacts: vec![contact(1, 300.0, 284.0)],
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::TouchFrame {
                contacts: vec![contact(1, 310.0, 284.0)],
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::TouchFrame { contacts: vec![] })
        .unwrap();

    // Unter der Schwelle: kein Scrollen, Tippen an der letzten Position
    assert_eq!(state.view.scroll_offset, 0.0);
    assert_eq!(state.keyframe_count(), 1);
}
