//! Typed events
//!
//! [`Event`] is the closed set of event kinds this crate understands. Each
//! kind is a plain `Copy` struct; the enum tag decides which one is active,
//! so a field belonging to another kind cannot be read by mistake.

use crate::id::{JoystickId, MouseId, WindowId};
use crate::input::{
    ButtonState, HatPosition, KeyMod, Keycode, MouseButton, MouseButtonMask, Scancode, TextBuffer,
    WheelDirection,
};

/// A converted native event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Application should terminate its main loop
    Quit(QuitEvent),
    /// Window state change
    Window(WindowEvent),
    /// Key press or release
    Key(KeyEvent),
    /// Committed text input
    TextInput(TextInputEvent),
    /// In-progress IME composition
    TextEditing(TextEditingEvent),
    /// Mouse moved
    MouseMotion(MouseMotionEvent),
    /// Mouse button press or release
    MouseButton(MouseButtonEvent),
    /// Mouse wheel scrolled
    MouseWheel(MouseWheelEvent),
    /// Joystick axis moved
    JoystickAxis(JoystickAxisEvent),
    /// Joystick button press or release
    JoystickButton(JoystickButtonEvent),
    /// Joystick hat moved
    JoystickHat(JoystickHatEvent),
}

/// Fieldless discriminant of [`Event`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Quit,
    Window,
    Key,
    TextInput,
    TextEditing,
    MouseMotion,
    MouseButton,
    MouseWheel,
    JoystickAxis,
    JoystickButton,
    JoystickHat,
}

impl Event {
    /// Which kind of event this is
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Quit(_) => EventKind::Quit,
            Event::Window(_) => EventKind::Window,
            Event::Key(_) => EventKind::Key,
            Event::TextInput(_) => EventKind::TextInput,
            Event::TextEditing(_) => EventKind::TextEditing,
            Event::MouseMotion(_) => EventKind::MouseMotion,
            Event::MouseButton(_) => EventKind::MouseButton,
            Event::MouseWheel(_) => EventKind::MouseWheel,
            Event::JoystickAxis(_) => EventKind::JoystickAxis,
            Event::JoystickButton(_) => EventKind::JoystickButton,
            Event::JoystickHat(_) => EventKind::JoystickHat,
        }
    }

    /// Native timestamp in nanoseconds
    pub fn timestamp(&self) -> u64 {
        match self {
            Event::Quit(e) => e.timestamp,
            Event::Window(e) => e.timestamp,
            Event::Key(e) => e.timestamp,
            Event::TextInput(e) => e.timestamp,
            Event::TextEditing(e) => e.timestamp,
            Event::MouseMotion(e) => e.timestamp,
            Event::MouseButton(e) => e.timestamp,
            Event::MouseWheel(e) => e.timestamp,
            Event::JoystickAxis(e) => e.timestamp,
            Event::JoystickButton(e) => e.timestamp,
            Event::JoystickHat(e) => e.timestamp,
        }
    }

    /// The window this event targets
    ///
    /// Returns `None` for kinds that are not tied to a window (quit and
    /// joystick events).
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            Event::Window(e) => Some(e.window_id),
            Event::Key(e) => Some(e.window_id),
            Event::TextInput(e) => Some(e.window_id),
            Event::TextEditing(e) => Some(e.window_id),
            Event::MouseMotion(e) => Some(e.window_id),
            Event::MouseButton(e) => Some(e.window_id),
            Event::MouseWheel(e) => Some(e.window_id),
            Event::Quit(_)
            | Event::JoystickAxis(_)
            | Event::JoystickButton(_)
            | Event::JoystickHat(_) => None,
        }
    }

    /// Check if this is a quit request
    pub fn is_quit(&self) -> bool {
        matches!(self, Event::Quit(_))
    }

    /// Check if this is a window close request
    pub fn is_close_requested(&self) -> bool {
        matches!(
            self,
            Event::Window(WindowEvent {
                kind: WindowEventKind::CloseRequested,
                ..
            })
        )
    }
}

// ============================================================================
// Application
// ============================================================================

/// Application quit request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuitEvent {
    pub timestamp: u64,
}

// ============================================================================
// Window
// ============================================================================

/// Window event sub-types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindowEventKind {
    /// Window has been shown
    Shown,
    /// Window has been hidden
    Hidden,
    /// Window has been exposed and should be redrawn
    Exposed,
    /// Window has been moved; carries a position
    Moved,
    /// Window has been resized; carries a size
    Resized,
    /// Window pixel size changed; carries a size
    SizeChanged,
    /// Window has been minimized
    Minimized,
    /// Window has been maximized
    Maximized,
    /// Window has been restored to normal size and position
    Restored,
    /// Window gained mouse focus
    MouseEnter,
    /// Window lost mouse focus
    MouseLeave,
    /// Window gained keyboard focus
    FocusGained,
    /// Window lost keyboard focus
    FocusLost,
    /// The window manager requests that the window be closed
    CloseRequested,
    /// Window had a hit test that was not the normal one
    HitTest,
    /// The ICC profile of the window's display changed
    IccProfileChanged,
    /// Window moved to another display; carries a display index
    DisplayChanged,
}

/// Window position in screen coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

/// Window size in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

/// Index of a display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayIndex(pub i32);

/// Payload of a window event
///
/// `None` means no data applies to the sub-type, which is distinct from
/// data that happens to be zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowEventData {
    #[default]
    None,
    Position(WindowPosition),
    Size(WindowSize),
    Display(DisplayIndex),
}

/// Window state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowEvent {
    pub timestamp: u64,
    pub window_id: WindowId,
    pub kind: WindowEventKind,
    pub data: WindowEventData,
}

impl WindowEvent {
    /// New position, for `Moved` events only
    pub fn position(&self) -> Option<WindowPosition> {
        match (self.kind, self.data) {
            (WindowEventKind::Moved, WindowEventData::Position(pos)) => Some(pos),
            _ => None,
        }
    }

    /// New size, for `Resized` and `SizeChanged` events only
    pub fn size(&self) -> Option<WindowSize> {
        match (self.kind, self.data) {
            (
                WindowEventKind::Resized | WindowEventKind::SizeChanged,
                WindowEventData::Size(size),
            ) => Some(size),
            _ => None,
        }
    }

    /// New display, for `DisplayChanged` events only
    pub fn display(&self) -> Option<DisplayIndex> {
        match (self.kind, self.data) {
            (WindowEventKind::DisplayChanged, WindowEventData::Display(index)) => Some(index),
            _ => None,
        }
    }
}

// ============================================================================
// Keyboard and text
// ============================================================================

/// Key press or release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub timestamp: u64,
    pub window_id: WindowId,
    pub state: ButtonState,
    /// Physical key
    pub scancode: Scancode,
    /// Logical key under the current layout
    pub keycode: Keycode,
    pub modifiers: KeyMod,
    /// Generated by key repeat
    pub repeat: bool,
}

/// Committed text input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextInputEvent {
    pub timestamp: u64,
    pub window_id: WindowId,
    pub text: TextBuffer,
}

/// In-progress IME composition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextEditingEvent {
    pub timestamp: u64,
    pub window_id: WindowId,
    pub text: TextBuffer,
    /// Start of the selection within the composition
    pub start: i32,
    /// Length of the selection
    pub length: i32,
}

// ============================================================================
// Mouse
// ============================================================================

/// Mouse moved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseMotionEvent {
    pub timestamp: u64,
    pub window_id: WindowId,
    pub mouse_id: MouseId,
    /// Buttons held during the motion
    pub buttons: MouseButtonMask,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

/// Mouse button press or release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseButtonEvent {
    pub timestamp: u64,
    pub window_id: WindowId,
    pub mouse_id: MouseId,
    pub button: MouseButton,
    pub state: ButtonState,
    /// 1 for single-click, 2 for double-click, ...
    pub clicks: u8,
    pub x: i32,
    pub y: i32,
}

/// Mouse wheel scrolled
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseWheelEvent {
    pub timestamp: u64,
    pub window_id: WindowId,
    pub mouse_id: MouseId,
    /// Whole steps scrolled horizontally, positive to the right
    pub x: i32,
    /// Whole steps scrolled vertically, positive away from the user
    pub y: i32,
    pub precise_x: f32,
    pub precise_y: f32,
    pub direction: WheelDirection,
}

impl MouseWheelEvent {
    /// Scroll amounts with the platform's flip undone
    pub fn normalized(&self) -> (f32, f32) {
        match self.direction {
            WheelDirection::Normal => (self.precise_x, self.precise_y),
            WheelDirection::Flipped => (-self.precise_x, -self.precise_y),
        }
    }
}

// ============================================================================
// Joystick
// ============================================================================

/// Joystick axis moved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoystickAxisEvent {
    pub timestamp: u64,
    pub joystick_id: JoystickId,
    pub axis: u8,
    /// -32768 to 32767
    pub value: i16,
}

/// Joystick button press or release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoystickButtonEvent {
    pub timestamp: u64,
    pub joystick_id: JoystickId,
    pub button: u8,
    pub state: ButtonState,
}

/// Joystick hat moved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoystickHatEvent {
    pub timestamp: u64,
    pub joystick_id: JoystickId,
    pub hat: u8,
    pub position: HatPosition,
}
