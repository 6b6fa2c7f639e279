//! Native event records
//!
//! [`RawEvent`] is this crate's own record layout: a 128-byte `#[repr(C)]`
//! union whose members all begin with the same header (`kind`, `reserved`,
//! `timestamp`). The `kind` tag selects which member is meaningful. Tags use
//! SDL3's numbering, but the member layouts are not SDL3's: coordinates are
//! integers and text is stored inline. A platform layer fills these records
//! field by field; native SDL3 bytes cannot be passed to
//! [`from_bytes`](RawEvent::from_bytes) as-is. Conversion into the typed [`Event`](crate::Event) lives in
//! [`convert`](crate::convert).
//!
//! Every member is made of plain integers, floats and byte arrays with
//! explicit padding fields, so any bit pattern is a valid value of every
//! member. `RawEvent` values can only be created through constructors that
//! initialize all 128 bytes, which is what makes reading any member sound.

use std::fmt;

/// Native event type tags
///
/// Values follow SDL3's numbering. Tags outside the ranges
/// this crate recognizes (including future additions) are reported as
/// [`Unrecognized`](crate::Unrecognized) by conversion.
pub mod event_type {
    pub const FIRST: u32 = 0;

    // Application
    pub const QUIT: u32 = 0x100;

    // Window
    pub const WINDOW_SHOWN: u32 = 0x202;
    pub const WINDOW_HIDDEN: u32 = 0x203;
    pub const WINDOW_EXPOSED: u32 = 0x204;
    pub const WINDOW_MOVED: u32 = 0x205;
    pub const WINDOW_RESIZED: u32 = 0x206;
    pub const WINDOW_PIXEL_SIZE_CHANGED: u32 = 0x207;
    pub const WINDOW_METAL_VIEW_RESIZED: u32 = 0x208;
    pub const WINDOW_MINIMIZED: u32 = 0x209;
    pub const WINDOW_MAXIMIZED: u32 = 0x20A;
    pub const WINDOW_RESTORED: u32 = 0x20B;
    pub const WINDOW_MOUSE_ENTER: u32 = 0x20C;
    pub const WINDOW_MOUSE_LEAVE: u32 = 0x20D;
    pub const WINDOW_FOCUS_GAINED: u32 = 0x20E;
    pub const WINDOW_FOCUS_LOST: u32 = 0x20F;
    pub const WINDOW_CLOSE_REQUESTED: u32 = 0x210;
    pub const WINDOW_HIT_TEST: u32 = 0x211;
    pub const WINDOW_ICCPROF_CHANGED: u32 = 0x212;
    pub const WINDOW_DISPLAY_CHANGED: u32 = 0x213;
    pub const WINDOW_DISPLAY_SCALE_CHANGED: u32 = 0x214;
    pub const WINDOW_SAFE_AREA_CHANGED: u32 = 0x215;
    pub const WINDOW_OCCLUDED: u32 = 0x216;
    pub const WINDOW_ENTER_FULLSCREEN: u32 = 0x217;
    pub const WINDOW_LEAVE_FULLSCREEN: u32 = 0x218;
    pub const WINDOW_DESTROYED: u32 = 0x219;
    pub const WINDOW_HDR_STATE_CHANGED: u32 = 0x21A;
    pub const WINDOW_FIRST: u32 = WINDOW_SHOWN;
    pub const WINDOW_LAST: u32 = WINDOW_HDR_STATE_CHANGED;

    // Keyboard
    pub const KEY_DOWN: u32 = 0x300;
    pub const KEY_UP: u32 = 0x301;
    pub const TEXT_EDITING: u32 = 0x302;
    pub const TEXT_INPUT: u32 = 0x303;

    // Mouse
    pub const MOUSE_MOTION: u32 = 0x400;
    pub const MOUSE_BUTTON_DOWN: u32 = 0x401;
    pub const MOUSE_BUTTON_UP: u32 = 0x402;
    pub const MOUSE_WHEEL: u32 = 0x403;

    // Joystick
    pub const JOYSTICK_AXIS_MOTION: u32 = 0x600;
    pub const JOYSTICK_BALL_MOTION: u32 = 0x601;
    pub const JOYSTICK_HAT_MOTION: u32 = 0x602;
    pub const JOYSTICK_BUTTON_DOWN: u32 = 0x603;
    pub const JOYSTICK_BUTTON_UP: u32 = 0x604;

    // Application-defined events
    pub const USER: u32 = 0x8000;

    pub const LAST: u32 = 0xFFFF;
}

/// Size of every native event record in bytes
pub const RAW_EVENT_SIZE: usize = 128;

/// Native text field capacity (including the NUL terminator)
pub const RAW_TEXT_SIZE: usize = 32;

/// Fields shared by every event record
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawCommonEvent {
    pub kind: u32,
    pub reserved: u32,
    /// Nanoseconds since the native library was initialized
    pub timestamp: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawQuitEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
}

/// Window state change; `data1`/`data2` meaning depends on `kind`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawWindowEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub window_id: u32,
    pub data1: i32,
    pub data2: i32,
    pub padding: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawKeyboardEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub window_id: u32,
    /// Keyboard instance id
    pub which: u32,
    pub scancode: u32,
    pub keycode: u32,
    pub modifiers: u16,
    /// Platform-dependent raw scancode
    pub raw: u16,
    pub down: u8,
    pub repeat: u8,
    pub padding: [u8; 2],
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawTextInputEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub window_id: u32,
    /// NUL-terminated UTF-8
    pub text: [u8; RAW_TEXT_SIZE],
    pub padding: [u8; 4],
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawTextEditingEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub window_id: u32,
    pub start: i32,
    pub length: i32,
    /// NUL-terminated UTF-8
    pub text: [u8; RAW_TEXT_SIZE],
    pub padding: [u8; 4],
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawMouseMotionEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    /// Button state bitmask
    pub state: u32,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
    pub padding: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawMouseButtonEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    /// 1-based native button index
    pub button: u8,
    pub down: u8,
    pub clicks: u8,
    pub padding1: u8,
    pub x: i32,
    pub y: i32,
    pub padding2: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawMouseWheelEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub window_id: u32,
    pub which: u32,
    /// Horizontal amount with float precision
    pub x: f32,
    /// Vertical amount with float precision
    pub y: f32,
    /// 0 = normal, 1 = flipped
    pub direction: u32,
    pub integer_x: i32,
    pub integer_y: i32,
    pub padding: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawJoyAxisEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: u32,
    pub axis: u8,
    pub padding1: [u8; 3],
    pub value: i16,
    pub padding2: [u8; 2],
    pub padding3: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawJoyButtonEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: u32,
    pub button: u8,
    pub down: u8,
    pub padding: [u8; 2],
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawJoyHatEvent {
    pub kind: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: u32,
    pub hat: u8,
    pub value: u8,
    pub padding: [u8; 2],
}

/// A native event record
///
/// Read the tag with [`kind`](RawEvent::kind) and convert with
/// [`from_raw`](crate::from_raw).
#[derive(Clone, Copy)]
#[repr(C)]
pub union RawEvent {
    kind: u32,
    pub(crate) common: RawCommonEvent,
    pub(crate) quit: RawQuitEvent,
    pub(crate) window: RawWindowEvent,
    pub(crate) key: RawKeyboardEvent,
    pub(crate) text: RawTextInputEvent,
    pub(crate) edit: RawTextEditingEvent,
    pub(crate) motion: RawMouseMotionEvent,
    pub(crate) button: RawMouseButtonEvent,
    pub(crate) wheel: RawMouseWheelEvent,
    pub(crate) jaxis: RawJoyAxisEvent,
    pub(crate) jbutton: RawJoyButtonEvent,
    pub(crate) jhat: RawJoyHatEvent,
    bytes: [u8; RAW_EVENT_SIZE],
}

const _: () = assert!(std::mem::size_of::<RawEvent>() == RAW_EVENT_SIZE);
const _: () = assert!(std::mem::size_of::<RawTextEditingEvent>() == 64);
const _: () = assert!(std::mem::size_of::<RawMouseWheelEvent>() == 48);
const _: () = assert!(std::mem::size_of::<RawJoyAxisEvent>() == 32);

impl RawEvent {
    /// An all-zero record
    pub const fn zeroed() -> Self {
        RawEvent {
            bytes: [0; RAW_EVENT_SIZE],
        }
    }

    /// A record carrying only a tag and a timestamp
    ///
    /// Useful for tags without payload and for application-defined tags.
    pub fn with_kind(kind: u32, timestamp: u64) -> Self {
        let mut ev = Self::zeroed();
        ev.common = RawCommonEvent {
            kind,
            reserved: 0,
            timestamp,
        };
        ev
    }

    /// Reinterpret bytes laid out as a [`RawEvent`]
    pub const fn from_bytes(bytes: [u8; RAW_EVENT_SIZE]) -> Self {
        RawEvent { bytes }
    }

    /// The record's bytes
    pub fn to_bytes(&self) -> [u8; RAW_EVENT_SIZE] {
        // SAFETY: every constructor initializes all RAW_EVENT_SIZE bytes
        unsafe { self.bytes }
    }

    /// The type tag
    #[inline]
    pub fn kind(&self) -> u32 {
        // SAFETY: all members start with a u32 tag and all bytes are initialized
        unsafe { self.kind }
    }

    /// The header shared by all records
    #[inline]
    pub fn common(&self) -> RawCommonEvent {
        // SAFETY: plain-data member, all bytes initialized
        unsafe { self.common }
    }

    // ------------------------------------------------------------------------
    // Builders for injecting records (tests, demos, application events)
    // ------------------------------------------------------------------------

    /// Quit request
    pub fn quit(timestamp: u64) -> Self {
        Self::with_kind(event_type::QUIT, timestamp)
    }

    /// Window event with tag `kind`
    pub fn window(kind: u32, timestamp: u64, window_id: u32, data1: i32, data2: i32) -> Self {
        RawWindowEvent {
            kind,
            timestamp,
            window_id,
            data1,
            data2,
            ..Default::default()
        }
        .into()
    }

    /// Key press or release without modifiers
    pub fn key(down: bool, timestamp: u64, window_id: u32, scancode: u32, keycode: u32) -> Self {
        RawKeyboardEvent {
            kind: if down {
                event_type::KEY_DOWN
            } else {
                event_type::KEY_UP
            },
            timestamp,
            window_id,
            scancode,
            keycode,
            down: down as u8,
            ..Default::default()
        }
        .into()
    }

    /// Committed text; truncated to the native field size
    pub fn text_input(timestamp: u64, window_id: u32, text: &str) -> Self {
        RawTextInputEvent {
            kind: event_type::TEXT_INPUT,
            timestamp,
            window_id,
            text: nul_terminated(text),
            ..Default::default()
        }
        .into()
    }

    /// Mouse button press or release
    pub fn mouse_button(
        down: bool,
        timestamp: u64,
        window_id: u32,
        button: u8,
        x: i32,
        y: i32,
    ) -> Self {
        RawMouseButtonEvent {
            kind: if down {
                event_type::MOUSE_BUTTON_DOWN
            } else {
                event_type::MOUSE_BUTTON_UP
            },
            timestamp,
            window_id,
            button,
            down: down as u8,
            clicks: 1,
            x,
            y,
            ..Default::default()
        }
        .into()
    }
}

/// Copy `text` into a native NUL-terminated field, byte-truncating if needed
pub fn nul_terminated(text: &str) -> [u8; RAW_TEXT_SIZE] {
    let mut out = [0u8; RAW_TEXT_SIZE];
    let len = text.len().min(RAW_TEXT_SIZE - 1);
    out[..len].copy_from_slice(&text.as_bytes()[..len]);
    out
}

macro_rules! impl_from_member {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl From<$ty> for RawEvent {
                fn from(member: $ty) -> Self {
                    let mut ev = RawEvent::zeroed();
                    ev.$field = member;
                    ev
                }
            }
        )*
    };
}

impl_from_member! {
    RawCommonEvent => common,
    RawQuitEvent => quit,
    RawWindowEvent => window,
    RawKeyboardEvent => key,
    RawTextInputEvent => text,
    RawTextEditingEvent => edit,
    RawMouseMotionEvent => motion,
    RawMouseButtonEvent => button,
    RawMouseWheelEvent => wheel,
    RawJoyAxisEvent => jaxis,
    RawJoyButtonEvent => jbutton,
    RawJoyHatEvent => jhat,
}

impl Default for RawEvent {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Debug for RawEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let common = self.common();
        f.debug_struct("RawEvent")
            .field("kind", &format_args!("{:#x}", common.kind))
            .field("timestamp", &common.timestamp)
            .finish_non_exhaustive()
    }
}
