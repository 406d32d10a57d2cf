//! Integration tests for the dispatch engine.
//!
//! These tests drive `Dispatcher` end-to-end with a `RecordingSink` and check
//! the decisions and the synthetic output for complete key sequences.

use std::sync::Arc;

use neo_core::inject::mock::RecordingSink;
use neo_core::layer::tables::{LAYER1, LAYER2, LAYER3, LAYER4};
use neo_core::{
    injection_path, DispatchDecision, Dispatcher, InjectionPath, KeyDirection, LayerId,
    PhysicalKeyEvent, SyntheticKeyEvent, VirtualKey,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const CAPS: u32 = 0x3A;
const LSHIFT: u32 = 0x2A;
const ALTGR: u32 = 0x38;
const END: u32 = 0x4F;

fn setup() -> (Dispatcher, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    (Dispatcher::new(sink.clone()), sink)
}

/// An ordinary letter-area key; the virtual key is irrelevant to the tables.
fn key(scan_code: u32, direction: KeyDirection) -> PhysicalKeyEvent {
    PhysicalKeyEvent::new(scan_code, VirtualKey(0x41), direction)
}

/// The single synthetic event expected for `ch`.
fn expected_event(ch: char, direction: KeyDirection) -> SyntheticKeyEvent {
    match injection_path(ch) {
        InjectionPath::VirtualKey(vk) => SyntheticKeyEvent::virtual_key(vk, direction),
        InjectionPath::Literal => SyntheticKeyEvent::unicode(ch as u16, direction),
    }
}

fn assert_round_trip(dispatcher: &mut Dispatcher, sink: &RecordingSink, table: &[Option<char>]) {
    for (scan_code, entry) in table.iter().enumerate() {
        let Some(ch) = *entry else { continue };
        for direction in [KeyDirection::Down, KeyDirection::Up] {
            sink.clear();

            let decision = dispatcher.handle_key(&key(scan_code as u32, direction));

            assert_eq!(decision, DispatchDecision::Suppress, "scan code {scan_code:#04X}");
            assert_eq!(
                sink.events(),
                vec![expected_event(ch, direction)],
                "scan code {scan_code:#04X} ({ch:?})"
            );
        }
    }
}

// ── Round-trip character mapping ──────────────────────────────────────────────

#[test]
fn test_layer1_round_trip() {
    let (mut dispatcher, sink) = setup();
    assert_eq!(dispatcher.active_layer(), LayerId::Layer1);

    assert_round_trip(&mut dispatcher, &sink, &LAYER1);
}

#[test]
fn test_layer2_round_trip() {
    let (mut dispatcher, sink) = setup();
    dispatcher.handle_key(&PhysicalKeyEvent::down(LSHIFT, VirtualKey::LSHIFT));
    assert_eq!(dispatcher.active_layer(), LayerId::Layer2);

    assert_round_trip(&mut dispatcher, &sink, &LAYER2);
}

#[test]
fn test_layer3_round_trip() {
    let (mut dispatcher, sink) = setup();
    dispatcher.handle_key(&PhysicalKeyEvent::down(CAPS, VirtualKey::CAPITAL));
    assert_eq!(dispatcher.active_layer(), LayerId::Layer3);

    assert_round_trip(&mut dispatcher, &sink, &LAYER3);
}

#[test]
fn test_layer4_emits_navigation_keys() {
    let (mut dispatcher, sink) = setup();
    dispatcher.handle_key(&PhysicalKeyEvent::down(0x56, VirtualKey::OEM_102));
    assert_eq!(dispatcher.active_layer(), LayerId::Layer4);

    for (scan_code, entry) in LAYER4.iter().enumerate() {
        let Some(vk) = *entry else { continue };
        sink.clear();

        let decision = dispatcher.handle_key(&key(scan_code as u32, KeyDirection::Down));

        assert_eq!(decision, DispatchDecision::Suppress);
        assert_eq!(
            sink.events(),
            vec![SyntheticKeyEvent::virtual_key(vk, KeyDirection::Down)]
        );
    }
}

// ── ASCII-alnum routing ───────────────────────────────────────────────────────

#[test]
fn test_ascii_alnum_routes_through_virtual_keys() {
    for ch in ('a'..='z').chain('A'..='Z').chain('0'..='9') {
        let expected = VirtualKey(ch.to_ascii_uppercase() as u16);
        assert_eq!(injection_path(ch), InjectionPath::VirtualKey(expected), "{ch}");
    }
}

#[test]
fn test_other_characters_route_through_literal_injection() {
    let tables = [&LAYER1, &LAYER2, &LAYER3];
    for ch in tables.iter().flat_map(|t| t.iter()).flatten() {
        if !ch.is_ascii_alphanumeric() {
            assert_eq!(injection_path(*ch), InjectionPath::Literal, "{ch:?}");
        }
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn test_mod3_underscore_scenario() {
    // Arrange
    let (mut dispatcher, sink) = setup();

    // Act + Assert: Mod3 down
    let decision = dispatcher.handle_key(&PhysicalKeyEvent::down(CAPS, VirtualKey::CAPITAL));
    assert_eq!(decision, DispatchDecision::Suppress);
    assert!(dispatcher.modifier_state().mod3_held);
    assert_eq!(dispatcher.active_layer(), LayerId::Layer3);

    // Act + Assert: the key at scan code 0x11 types '_'
    let decision = dispatcher.handle_key(&key(0x11, KeyDirection::Down));
    assert_eq!(decision, DispatchDecision::Suppress);
    assert_eq!(
        sink.events(),
        vec![SyntheticKeyEvent::unicode('_' as u16, KeyDirection::Down)]
    );

    // Act + Assert: Mod3 up
    let decision = dispatcher.handle_key(&PhysicalKeyEvent::up(CAPS, VirtualKey::CAPITAL));
    assert_eq!(decision, DispatchDecision::Suppress);
    assert!(!dispatcher.modifier_state().mod3_held);
    assert_eq!(dispatcher.active_layer(), LayerId::Layer1);
}

#[test]
fn test_bypass_scenario() {
    let (mut dispatcher, sink) = setup();
    let toggle = PhysicalKeyEvent::down(END, VirtualKey::END).with_extended(true);

    assert_eq!(dispatcher.handle_key(&toggle), DispatchDecision::PassThrough);
    assert!(dispatcher.modifier_state().bypass_requested);
    assert_eq!(dispatcher.active_layer(), LayerId::Bypass);

    let traffic = [
        key(0x20, KeyDirection::Down),
        key(0x20, KeyDirection::Up),
        PhysicalKeyEvent::up(END, VirtualKey::END).with_extended(true),
        PhysicalKeyEvent::down(LSHIFT, VirtualKey::LSHIFT),
        key(0x11, KeyDirection::Down),
        PhysicalKeyEvent::up(LSHIFT, VirtualKey::LSHIFT),
        PhysicalKeyEvent::down(0x1D, VirtualKey::LCONTROL),
        PhysicalKeyEvent::up(0x1D, VirtualKey::LCONTROL),
    ];
    for event in &traffic {
        assert_eq!(dispatcher.handle_key(event), DispatchDecision::PassThrough, "{event:?}");
    }
    assert!(sink.events().is_empty(), "bypass mode must not inject anything");

    dispatcher.handle_key(&toggle);
    assert_eq!(dispatcher.active_layer(), LayerId::Layer1);
    assert_eq!(
        dispatcher.handle_key(&key(0x20, KeyDirection::Down)),
        DispatchDecision::Suppress
    );
}

#[test]
fn test_mod4_left_control_suppression_window() {
    let (mut dispatcher, sink) = setup();
    let lctrl = PhysicalKeyEvent::down(0x1D, VirtualKey::LCONTROL);

    dispatcher.handle_key(&PhysicalKeyEvent::down(ALTGR, VirtualKey::RMENU).with_extended(true));
    assert_eq!(
        sink.events(),
        vec![SyntheticKeyEvent::virtual_key(VirtualKey::LCONTROL, KeyDirection::Up)],
        "the companion control press is released before handle_key returns"
    );

    for _ in 0..5 {
        assert_eq!(dispatcher.handle_key(&lctrl), DispatchDecision::Suppress);
    }

    dispatcher.handle_key(&PhysicalKeyEvent::up(ALTGR, VirtualKey::RMENU).with_extended(true));
    assert_eq!(dispatcher.handle_key(&lctrl), DispatchDecision::PassThrough);
}

#[test]
fn test_mod4_wins_over_mod3_when_both_held() {
    let (mut dispatcher, sink) = setup();

    dispatcher.handle_key(&PhysicalKeyEvent::down(CAPS, VirtualKey::CAPITAL));
    dispatcher.handle_key(&PhysicalKeyEvent::down(0x56, VirtualKey::OEM_102));
    assert_eq!(dispatcher.active_layer(), LayerId::Layer4);

    dispatcher.handle_key(&key(0x12, KeyDirection::Down));
    assert_eq!(
        sink.events(),
        vec![SyntheticKeyEvent::virtual_key(VirtualKey::UP, KeyDirection::Down)]
    );

    dispatcher.handle_key(&PhysicalKeyEvent::up(0x56, VirtualKey::OEM_102));
    assert_eq!(dispatcher.active_layer(), LayerId::Layer3);
}

#[test]
fn test_shift_is_forwarded_so_applications_see_it() {
    let (mut dispatcher, _sink) = setup();

    let down = dispatcher.handle_key(&PhysicalKeyEvent::down(0x36, VirtualKey::RSHIFT));
    let up = dispatcher.handle_key(&PhysicalKeyEvent::up(0x36, VirtualKey::RSHIFT));

    assert_eq!(down, DispatchDecision::PassThrough);
    assert_eq!(up, DispatchDecision::PassThrough);
    assert_eq!(dispatcher.active_layer(), LayerId::Layer1);
}

// ── Robustness ────────────────────────────────────────────────────────────────

#[test]
fn test_injected_events_never_change_anything() {
    let (mut dispatcher, sink) = setup();
    let injected = [
        PhysicalKeyEvent::down(CAPS, VirtualKey::CAPITAL),
        PhysicalKeyEvent::down(END, VirtualKey::END),
        PhysicalKeyEvent::down(ALTGR, VirtualKey::RMENU),
        PhysicalKeyEvent::down(0x20, VirtualKey(0x44)),
        PhysicalKeyEvent::up(0x11, VirtualKey(0x57)),
    ];

    for event in injected {
        let decision = dispatcher.handle_key(&event.with_injected(true));
        assert_eq!(decision, DispatchDecision::PassThrough);
    }

    assert_eq!(dispatcher.active_layer(), LayerId::Layer1);
    assert!(sink.events().is_empty());
}

#[test]
fn test_out_of_range_scan_codes_pass_through_on_every_layer() {
    let (mut dispatcher, sink) = setup();
    let layer_keys = [
        None,
        Some(PhysicalKeyEvent::down(LSHIFT, VirtualKey::LSHIFT)),
        Some(PhysicalKeyEvent::down(CAPS, VirtualKey::CAPITAL)),
        Some(PhysicalKeyEvent::down(0x56, VirtualKey::OEM_102)),
    ];

    for modifier in layer_keys {
        if let Some(event) = modifier {
            dispatcher.handle_key(&event);
        }
        for scan_code in [0, 64, 0x1FF, 0xFFFF, u32::MAX] {
            assert_eq!(
                dispatcher.handle_key(&key(scan_code, KeyDirection::Down)),
                DispatchDecision::PassThrough,
                "{} scan code {scan_code:#X}",
                dispatcher.active_layer()
            );
        }
    }
    assert!(sink.events().is_empty());
}

#[test]
fn test_function_keys_pass_through_unmodified() {
    let (mut dispatcher, sink) = setup();

    // F1 is scan code 0x3B, inside the table range but unmapped.
    let decision = dispatcher.handle_key(&PhysicalKeyEvent::down(0x3B, VirtualKey(0x70)));

    assert_eq!(decision, DispatchDecision::PassThrough);
    assert!(sink.events().is_empty());
}
