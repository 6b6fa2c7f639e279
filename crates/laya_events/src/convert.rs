//! Native record conversion (RawEvent -> Event)
//!
//! [`from_raw`] is pure: it reads one record, copies the fields of the
//! member selected by the tag, and never allocates. Tags without a typed
//! counterpart come back as [`Unrecognized`].

use crate::error::Unrecognized;
use crate::event::{
    DisplayIndex, Event, JoystickAxisEvent, JoystickButtonEvent, JoystickHatEvent, KeyEvent,
    MouseButtonEvent, MouseMotionEvent, MouseWheelEvent, QuitEvent, TextEditingEvent,
    TextInputEvent, WindowEvent, WindowEventData, WindowEventKind, WindowPosition, WindowSize,
};
use crate::id::{JoystickId, MouseId, WindowId};
use crate::input::{
    ButtonState, HatPosition, KeyMod, Keycode, MouseButton, MouseButtonMask, Scancode, TextBuffer,
    WheelDirection,
};
use crate::raw::{
    event_type as et, RawEvent, RawJoyAxisEvent, RawJoyButtonEvent, RawJoyHatEvent,
    RawKeyboardEvent, RawMouseButtonEvent, RawMouseMotionEvent, RawMouseWheelEvent,
    RawTextEditingEvent, RawTextInputEvent, RawWindowEvent,
};

/// Convert one native record
pub fn from_raw(raw: &RawEvent) -> Result<Event, Unrecognized> {
    let tag = raw.kind();

    // SAFETY (all member reads below): every member is plain data valid for
    // any bit pattern and every RawEvent has all of its bytes initialized.
    // The tag decides which member is meaningful.
    let event = match tag {
        et::QUIT => Event::Quit(QuitEvent {
            timestamp: raw.common().timestamp,
        }),

        et::WINDOW_FIRST..=et::WINDOW_LAST => {
            let kind = convert_window_kind(tag).ok_or(Unrecognized { tag })?;
            Event::Window(convert_window(unsafe { &raw.window }, kind))
        }

        et::KEY_DOWN | et::KEY_UP => Event::Key(convert_key(unsafe { &raw.key })),
        et::TEXT_INPUT => Event::TextInput(convert_text_input(unsafe { &raw.text })),
        et::TEXT_EDITING => Event::TextEditing(convert_text_editing(unsafe { &raw.edit })),

        et::MOUSE_MOTION => Event::MouseMotion(convert_mouse_motion(unsafe { &raw.motion })),
        et::MOUSE_BUTTON_DOWN | et::MOUSE_BUTTON_UP => {
            Event::MouseButton(convert_mouse_button(unsafe { &raw.button }))
        }
        et::MOUSE_WHEEL => Event::MouseWheel(convert_mouse_wheel(unsafe { &raw.wheel })),

        et::JOYSTICK_AXIS_MOTION => {
            Event::JoystickAxis(convert_joystick_axis(unsafe { &raw.jaxis }))
        }
        et::JOYSTICK_BUTTON_DOWN | et::JOYSTICK_BUTTON_UP => {
            Event::JoystickButton(convert_joystick_button(unsafe { &raw.jbutton }))
        }
        et::JOYSTICK_HAT_MOTION => Event::JoystickHat(convert_joystick_hat(unsafe { &raw.jhat })),

        _ => return Err(Unrecognized { tag }),
    };

    Ok(event)
}

impl TryFrom<&RawEvent> for Event {
    type Error = Unrecognized;

    fn try_from(raw: &RawEvent) -> Result<Self, Self::Error> {
        from_raw(raw)
    }
}

/// Map a native window tag to its sub-type
///
/// Tags inside the window range that have no sub-type here return `None`.
pub fn convert_window_kind(tag: u32) -> Option<WindowEventKind> {
    let kind = match tag {
        et::WINDOW_SHOWN => WindowEventKind::Shown,
        et::WINDOW_HIDDEN => WindowEventKind::Hidden,
        et::WINDOW_EXPOSED => WindowEventKind::Exposed,
        et::WINDOW_MOVED => WindowEventKind::Moved,
        et::WINDOW_RESIZED => WindowEventKind::Resized,
        et::WINDOW_PIXEL_SIZE_CHANGED => WindowEventKind::SizeChanged,
        et::WINDOW_MINIMIZED => WindowEventKind::Minimized,
        et::WINDOW_MAXIMIZED => WindowEventKind::Maximized,
        et::WINDOW_RESTORED => WindowEventKind::Restored,
        et::WINDOW_MOUSE_ENTER => WindowEventKind::MouseEnter,
        et::WINDOW_MOUSE_LEAVE => WindowEventKind::MouseLeave,
        et::WINDOW_FOCUS_GAINED => WindowEventKind::FocusGained,
        et::WINDOW_FOCUS_LOST => WindowEventKind::FocusLost,
        et::WINDOW_CLOSE_REQUESTED => WindowEventKind::CloseRequested,
        et::WINDOW_HIT_TEST => WindowEventKind::HitTest,
        et::WINDOW_ICCPROF_CHANGED => WindowEventKind::IccProfileChanged,
        et::WINDOW_DISPLAY_CHANGED => WindowEventKind::DisplayChanged,
        _ => return None,
    };
    Some(kind)
}

/// Build the window payload that belongs to `kind`
pub fn convert_window_data(kind: WindowEventKind, data1: i32, data2: i32) -> WindowEventData {
    match kind {
        WindowEventKind::Moved => WindowEventData::Position(WindowPosition { x: data1, y: data2 }),
        WindowEventKind::Resized | WindowEventKind::SizeChanged => {
            WindowEventData::Size(WindowSize {
                width: data1,
                height: data2,
            })
        }
        WindowEventKind::DisplayChanged => WindowEventData::Display(DisplayIndex(data1)),
        _ => WindowEventData::None,
    }
}

fn convert_window(raw: &RawWindowEvent, kind: WindowEventKind) -> WindowEvent {
    WindowEvent {
        timestamp: raw.timestamp,
        window_id: WindowId::new(raw.window_id),
        kind,
        data: convert_window_data(kind, raw.data1, raw.data2),
    }
}

/// Pressed for the "down" tag of a pair, released otherwise
fn convert_state(tag: u32, down_tag: u32) -> ButtonState {
    if tag == down_tag {
        ButtonState::Pressed
    } else {
        ButtonState::Released
    }
}

fn convert_key(raw: &RawKeyboardEvent) -> KeyEvent {
    KeyEvent {
        timestamp: raw.timestamp,
        window_id: WindowId::new(raw.window_id),
        state: convert_state(raw.kind, et::KEY_DOWN),
        scancode: Scancode(raw.scancode),
        keycode: Keycode(raw.keycode),
        modifiers: KeyMod::from_bits_retain(raw.modifiers),
        repeat: raw.repeat != 0,
    }
}

fn convert_text_input(raw: &RawTextInputEvent) -> TextInputEvent {
    TextInputEvent {
        timestamp: raw.timestamp,
        window_id: WindowId::new(raw.window_id),
        text: TextBuffer::from_nul_terminated(&raw.text),
    }
}

fn convert_text_editing(raw: &RawTextEditingEvent) -> TextEditingEvent {
    TextEditingEvent {
        timestamp: raw.timestamp,
        window_id: WindowId::new(raw.window_id),
        text: TextBuffer::from_nul_terminated(&raw.text),
        start: raw.start,
        length: raw.length,
    }
}

fn convert_mouse_motion(raw: &RawMouseMotionEvent) -> MouseMotionEvent {
    MouseMotionEvent {
        timestamp: raw.timestamp,
        window_id: WindowId::new(raw.window_id),
        mouse_id: MouseId::new(raw.which),
        buttons: MouseButtonMask::from_bits_retain(raw.state),
        x: raw.x,
        y: raw.y,
        xrel: raw.xrel,
        yrel: raw.yrel,
    }
}

fn convert_mouse_button(raw: &RawMouseButtonEvent) -> MouseButtonEvent {
    MouseButtonEvent {
        timestamp: raw.timestamp,
        window_id: WindowId::new(raw.window_id),
        mouse_id: MouseId::new(raw.which),
        button: MouseButton::from_native(raw.button),
        state: convert_state(raw.kind, et::MOUSE_BUTTON_DOWN),
        clicks: raw.clicks,
        x: raw.x,
        y: raw.y,
    }
}

fn convert_mouse_wheel(raw: &RawMouseWheelEvent) -> MouseWheelEvent {
    MouseWheelEvent {
        timestamp: raw.timestamp,
        window_id: WindowId::new(raw.window_id),
        mouse_id: MouseId::new(raw.which),
        x: raw.integer_x,
        y: raw.integer_y,
        precise_x: raw.x,
        precise_y: raw.y,
        direction: match raw.direction {
            1 => WheelDirection::Flipped,
            _ => WheelDirection::Normal,
        },
    }
}

fn convert_joystick_axis(raw: &RawJoyAxisEvent) -> JoystickAxisEvent {
    JoystickAxisEvent {
        timestamp: raw.timestamp,
        joystick_id: JoystickId::new(raw.which),
        axis: raw.axis,
        value: raw.value,
    }
}

fn convert_joystick_button(raw: &RawJoyButtonEvent) -> JoystickButtonEvent {
    JoystickButtonEvent {
        timestamp: raw.timestamp,
        joystick_id: JoystickId::new(raw.which),
        button: raw.button,
        state: convert_state(raw.kind, et::JOYSTICK_BUTTON_DOWN),
    }
}

fn convert_joystick_hat(raw: &RawJoyHatEvent) -> JoystickHatEvent {
    JoystickHatEvent {
        timestamp: raw.timestamp,
        joystick_id: JoystickId::new(raw.which),
        hat: raw.hat,
        position: HatPosition::from_bits_retain(raw.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(tag: u32, data1: i32, data2: i32) -> WindowEvent {
        match from_raw(&RawEvent::window(tag, 1000, 42, data1, data2)) {
            Ok(Event::Window(ev)) => ev,
            other => panic!("expected window event, got {:?}", other),
        }
    }

    #[test]
    fn test_quit() {
        let ev = from_raw(&RawEvent::quit(77)).unwrap();
        assert_eq!(ev, Event::Quit(QuitEvent { timestamp: 77 }));
    }

    #[test]
    fn test_window_moved_carries_position_only() {
        let ev = window(et::WINDOW_MOVED, 100, 200);
        assert_eq!(ev.timestamp, 1000);
        assert_eq!(ev.window_id, WindowId::new(42));
        assert_eq!(ev.kind, WindowEventKind::Moved);
        assert_eq!(ev.data, WindowEventData::Position(WindowPosition { x: 100, y: 200 }));
        assert_eq!(ev.size(), None);
        assert_eq!(ev.display(), None);
    }

    #[test]
    fn test_window_resized_and_size_changed_carry_size() {
        let resized = window(et::WINDOW_RESIZED, 800, 600);
        assert_eq!(resized.kind, WindowEventKind::Resized);
        assert_eq!(
            resized.size(),
            Some(WindowSize {
                width: 800,
                height: 600
            })
        );
        assert_eq!(resized.position(), None);

        let changed = window(et::WINDOW_PIXEL_SIZE_CHANGED, 1024, 768);
        assert_eq!(changed.kind, WindowEventKind::SizeChanged);
        assert_eq!(
            changed.size(),
            Some(WindowSize {
                width: 1024,
                height: 768
            })
        );
    }

    #[test]
    fn test_window_display_changed_carries_index() {
        let ev = window(et::WINDOW_DISPLAY_CHANGED, 2, 0);
        assert_eq!(ev.data, WindowEventData::Display(DisplayIndex(2)));
        assert_eq!(ev.position(), None);
        assert_eq!(ev.size(), None);
    }

    #[test]
    fn test_payloadless_window_events_have_no_data() {
        let cases = [
            (et::WINDOW_SHOWN, WindowEventKind::Shown),
            (et::WINDOW_HIDDEN, WindowEventKind::Hidden),
            (et::WINDOW_EXPOSED, WindowEventKind::Exposed),
            (et::WINDOW_MINIMIZED, WindowEventKind::Minimized),
            (et::WINDOW_MAXIMIZED, WindowEventKind::Maximized),
            (et::WINDOW_RESTORED, WindowEventKind::Restored),
            (et::WINDOW_MOUSE_ENTER, WindowEventKind::MouseEnter),
            (et::WINDOW_MOUSE_LEAVE, WindowEventKind::MouseLeave),
            (et::WINDOW_FOCUS_GAINED, WindowEventKind::FocusGained),
            (et::WINDOW_FOCUS_LOST, WindowEventKind::FocusLost),
            (et::WINDOW_CLOSE_REQUESTED, WindowEventKind::CloseRequested),
            (et::WINDOW_HIT_TEST, WindowEventKind::HitTest),
            (et::WINDOW_ICCPROF_CHANGED, WindowEventKind::IccProfileChanged),
        ];
        for (tag, kind) in cases {
            // Nonzero data must not leak into payload-less kinds
            let ev = window(tag, 5, 6);
            assert_eq!(ev.kind, kind);
            assert_eq!(ev.data, WindowEventData::None, "{:?}", kind);
        }
    }

    #[test]
    fn test_unmapped_window_tags_are_unrecognized() {
        for tag in [
            et::WINDOW_METAL_VIEW_RESIZED,
            et::WINDOW_DISPLAY_SCALE_CHANGED,
            et::WINDOW_DESTROYED,
        ] {
            assert_eq!(
                from_raw(&RawEvent::window(tag, 0, 1, 0, 0)),
                Err(Unrecognized { tag })
            );
        }
    }

    #[test]
    fn test_unknown_tag_is_unrecognized() {
        assert_eq!(
            from_raw(&RawEvent::with_kind(0x7777, 0)),
            Err(Unrecognized { tag: 0x7777 })
        );
        assert!(from_raw(&RawEvent::with_kind(et::USER, 0)).is_err());
        assert!(from_raw(&RawEvent::with_kind(et::JOYSTICK_BALL_MOTION, 0)).is_err());
    }

    #[test]
    fn test_key_pressed_and_released() {
        let raw: RawEvent = RawKeyboardEvent {
            kind: et::KEY_DOWN,
            timestamp: 5,
            window_id: 3,
            scancode: Scancode::ESCAPE.0,
            keycode: Keycode::ESCAPE.0,
            modifiers: (KeyMod::LSHIFT | KeyMod::NUM).bits(),
            down: 1,
            repeat: 1,
            ..Default::default()
        }
        .into();
        let Ok(Event::Key(key)) = from_raw(&raw) else {
            panic!("expected key event");
        };
        assert_eq!(key.state, ButtonState::Pressed);
        assert_eq!(key.scancode, Scancode::ESCAPE);
        assert_eq!(key.keycode, Keycode::ESCAPE);
        assert!(key.modifiers.shift());
        assert!(key.modifiers.contains(KeyMod::NUM));
        assert!(key.repeat);
        assert_eq!(key.window_id, WindowId::new(3));

        let Ok(Event::Key(key)) = from_raw(&RawEvent::key(false, 6, 3, 4, 'a' as u32)) else {
            panic!("expected key event");
        };
        assert_eq!(key.state, ButtonState::Released);
        assert_eq!(key.keycode.as_char(), Some('a'));
        assert!(!key.repeat);
    }

    #[test]
    fn test_text_input_copies_bounded_text() {
        let Ok(Event::TextInput(text)) = from_raw(&RawEvent::text_input(1, 2, "héllo")) else {
            panic!("expected text input");
        };
        assert_eq!(text.text.as_str(), "héllo");
        assert_eq!(text.window_id, WindowId::new(2));
    }

    #[test]
    fn test_text_editing_selection() {
        let raw: RawEvent = RawTextEditingEvent {
            kind: et::TEXT_EDITING,
            window_id: 1,
            start: 2,
            length: 3,
            text: crate::raw::nul_terminated("かな"),
            ..Default::default()
        }
        .into();
        let Ok(Event::TextEditing(edit)) = from_raw(&raw) else {
            panic!("expected text editing");
        };
        assert_eq!(edit.text, "かな");
        assert_eq!((edit.start, edit.length), (2, 3));
    }

    #[test]
    fn test_mouse_motion() {
        let raw: RawEvent = RawMouseMotionEvent {
            kind: et::MOUSE_MOTION,
            window_id: 1,
            which: 4,
            state: (MouseButtonMask::LEFT | MouseButtonMask::RIGHT).bits(),
            x: 10,
            y: 11,
            xrel: -1,
            yrel: 2,
            ..Default::default()
        }
        .into();
        let Ok(Event::MouseMotion(motion)) = from_raw(&raw) else {
            panic!("expected mouse motion");
        };
        assert_eq!(motion.mouse_id, MouseId::new(4));
        assert!(motion.buttons.is_held(MouseButton::Left));
        assert!(motion.buttons.is_held(MouseButton::Right));
        assert!(!motion.buttons.is_held(MouseButton::Middle));
        assert_eq!((motion.x, motion.y, motion.xrel, motion.yrel), (10, 11, -1, 2));
    }

    #[test]
    fn test_mouse_button_maps_unknown_index_to_other() {
        let Ok(Event::MouseButton(btn)) = from_raw(&RawEvent::mouse_button(true, 0, 1, 3, 5, 5))
        else {
            panic!("expected mouse button");
        };
        assert_eq!(btn.button, MouseButton::Right);
        assert_eq!(btn.state, ButtonState::Pressed);
        assert_eq!(btn.clicks, 1);

        let Ok(Event::MouseButton(btn)) = from_raw(&RawEvent::mouse_button(false, 0, 1, 8, 0, 0))
        else {
            panic!("expected mouse button");
        };
        assert_eq!(btn.button, MouseButton::Other(8));
        assert_eq!(btn.state, ButtonState::Released);
    }

    #[test]
    fn test_mouse_wheel_keeps_both_precisions() {
        let raw: RawEvent = RawMouseWheelEvent {
            kind: et::MOUSE_WHEEL,
            window_id: 1,
            x: 0.5,
            y: -1.25,
            integer_x: 0,
            integer_y: -1,
            direction: 1,
            ..Default::default()
        }
        .into();
        let Ok(Event::MouseWheel(wheel)) = from_raw(&raw) else {
            panic!("expected mouse wheel");
        };
        assert_eq!((wheel.x, wheel.y), (0, -1));
        assert_eq!((wheel.precise_x, wheel.precise_y), (0.5, -1.25));
        assert_eq!(wheel.direction, WheelDirection::Flipped);
    }

    #[test]
    fn test_joystick_events() {
        let axis: RawEvent = RawJoyAxisEvent {
            kind: et::JOYSTICK_AXIS_MOTION,
            which: 9,
            axis: 1,
            value: -32768,
            ..Default::default()
        }
        .into();
        assert_eq!(
            from_raw(&axis),
            Ok(Event::JoystickAxis(JoystickAxisEvent {
                timestamp: 0,
                joystick_id: JoystickId::new(9),
                axis: 1,
                value: -32768,
            }))
        );

        let button: RawEvent = RawJoyButtonEvent {
            kind: et::JOYSTICK_BUTTON_UP,
            which: 9,
            button: 3,
            ..Default::default()
        }
        .into();
        let Ok(Event::JoystickButton(button)) = from_raw(&button) else {
            panic!("expected joystick button");
        };
        assert_eq!(button.state, ButtonState::Released);
        assert_eq!(button.button, 3);

        let hat: RawEvent = RawJoyHatEvent {
            kind: et::JOYSTICK_HAT_MOTION,
            which: 9,
            hat: 0,
            value: HatPosition::LEFT_UP.bits(),
            ..Default::default()
        }
        .into();
        let Ok(Event::JoystickHat(hat)) = from_raw(&hat) else {
            panic!("expected joystick hat");
        };
        assert_eq!(hat.position, HatPosition::LEFT_UP);
    }

    #[test]
    fn test_try_from_matches_from_raw() {
        let raw = RawEvent::quit(1);
        assert_eq!(Event::try_from(&raw), from_raw(&raw));
    }
}
