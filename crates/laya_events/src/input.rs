//! Input value types for keyboard, mouse, and joystick events
//!
//! Codes and masks reported by the native library are open sets: a newer
//! native version may report a scancode or modifier bit this crate has no
//! name for. Those types are therefore newtypes or bitflags that retain
//! every bit, never closed enums.

use bitflags::bitflags;
use std::fmt;

/// Pressed/released state shared by keys, mouse buttons, and joystick buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Button or key went down
    Pressed,
    /// Button or key went up
    Released,
}

impl ButtonState {
    /// Check if this is a press
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

// ============================================================================
// Keyboard
// ============================================================================

/// Physical key position, independent of keyboard layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scancode(pub u32);

impl Scancode {
    pub const UNKNOWN: Self = Self(0);

    // Letters
    pub const A: Self = Self(4);
    pub const B: Self = Self(5);
    pub const C: Self = Self(6);
    pub const D: Self = Self(7);
    pub const E: Self = Self(8);
    pub const F: Self = Self(9);
    pub const G: Self = Self(10);
    pub const H: Self = Self(11);
    pub const I: Self = Self(12);
    pub const J: Self = Self(13);
    pub const K: Self = Self(14);
    pub const L: Self = Self(15);
    pub const M: Self = Self(16);
    pub const N: Self = Self(17);
    pub const O: Self = Self(18);
    pub const P: Self = Self(19);
    pub const Q: Self = Self(20);
    pub const R: Self = Self(21);
    pub const S: Self = Self(22);
    pub const T: Self = Self(23);
    pub const U: Self = Self(24);
    pub const V: Self = Self(25);
    pub const W: Self = Self(26);
    pub const X: Self = Self(27);
    pub const Y: Self = Self(28);
    pub const Z: Self = Self(29);

    // Number row
    pub const NUM_1: Self = Self(30);
    pub const NUM_2: Self = Self(31);
    pub const NUM_3: Self = Self(32);
    pub const NUM_4: Self = Self(33);
    pub const NUM_5: Self = Self(34);
    pub const NUM_6: Self = Self(35);
    pub const NUM_7: Self = Self(36);
    pub const NUM_8: Self = Self(37);
    pub const NUM_9: Self = Self(38);
    pub const NUM_0: Self = Self(39);

    // Control keys
    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);

    // Function keys
    pub const F1: Self = Self(58);
    pub const F2: Self = Self(59);
    pub const F3: Self = Self(60);
    pub const F4: Self = Self(61);
    pub const F5: Self = Self(62);
    pub const F6: Self = Self(63);
    pub const F7: Self = Self(64);
    pub const F8: Self = Self(65);
    pub const F9: Self = Self(66);
    pub const F10: Self = Self(67);
    pub const F11: Self = Self(68);
    pub const F12: Self = Self(69);

    // Navigation
    pub const INSERT: Self = Self(73);
    pub const HOME: Self = Self(74);
    pub const PAGE_UP: Self = Self(75);
    pub const DELETE: Self = Self(76);
    pub const END: Self = Self(77);
    pub const PAGE_DOWN: Self = Self(78);
    pub const RIGHT: Self = Self(79);
    pub const LEFT: Self = Self(80);
    pub const DOWN: Self = Self(81);
    pub const UP: Self = Self(82);

    // Modifiers
    pub const LCTRL: Self = Self(224);
    pub const LSHIFT: Self = Self(225);
    pub const LALT: Self = Self(226);
    pub const LGUI: Self = Self(227);
    pub const RCTRL: Self = Self(228);
    pub const RSHIFT: Self = Self(229);
    pub const RALT: Self = Self(230);
    pub const RGUI: Self = Self(231);
}

/// Layout-dependent virtual key code
///
/// Printable keys carry their (lowercase) character value. Keys without a
/// character are the scancode with [`Keycode::SCANCODE_MASK`] set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keycode(pub u32);

impl Keycode {
    /// Bit marking a keycode derived from a scancode
    pub const SCANCODE_MASK: u32 = 1 << 30;

    pub const UNKNOWN: Self = Self(0);
    pub const RETURN: Self = Self('\r' as u32);
    pub const ESCAPE: Self = Self(0x1b);
    pub const BACKSPACE: Self = Self(0x08);
    pub const TAB: Self = Self('\t' as u32);
    pub const SPACE: Self = Self(' ' as u32);
    pub const DELETE: Self = Self(0x7f);

    pub const F1: Self = Self::from_scancode(Scancode::F1);
    pub const F2: Self = Self::from_scancode(Scancode::F2);
    pub const F3: Self = Self::from_scancode(Scancode::F3);
    pub const F4: Self = Self::from_scancode(Scancode::F4);
    pub const F5: Self = Self::from_scancode(Scancode::F5);
    pub const F6: Self = Self::from_scancode(Scancode::F6);
    pub const F7: Self = Self::from_scancode(Scancode::F7);
    pub const F8: Self = Self::from_scancode(Scancode::F8);
    pub const F9: Self = Self::from_scancode(Scancode::F9);
    pub const F10: Self = Self::from_scancode(Scancode::F10);
    pub const F11: Self = Self::from_scancode(Scancode::F11);
    pub const F12: Self = Self::from_scancode(Scancode::F12);

    pub const INSERT: Self = Self::from_scancode(Scancode::INSERT);
    pub const HOME: Self = Self::from_scancode(Scancode::HOME);
    pub const PAGE_UP: Self = Self::from_scancode(Scancode::PAGE_UP);
    pub const END: Self = Self::from_scancode(Scancode::END);
    pub const PAGE_DOWN: Self = Self::from_scancode(Scancode::PAGE_DOWN);
    pub const RIGHT: Self = Self::from_scancode(Scancode::RIGHT);
    pub const LEFT: Self = Self::from_scancode(Scancode::LEFT);
    pub const DOWN: Self = Self::from_scancode(Scancode::DOWN);
    pub const UP: Self = Self::from_scancode(Scancode::UP);

    pub const LCTRL: Self = Self::from_scancode(Scancode::LCTRL);
    pub const LSHIFT: Self = Self::from_scancode(Scancode::LSHIFT);
    pub const LALT: Self = Self::from_scancode(Scancode::LALT);
    pub const LGUI: Self = Self::from_scancode(Scancode::LGUI);
    pub const RCTRL: Self = Self::from_scancode(Scancode::RCTRL);
    pub const RSHIFT: Self = Self::from_scancode(Scancode::RSHIFT);
    pub const RALT: Self = Self::from_scancode(Scancode::RALT);
    pub const RGUI: Self = Self::from_scancode(Scancode::RGUI);

    /// Keycode for a key that has no character value
    pub const fn from_scancode(scancode: Scancode) -> Self {
        Self(scancode.0 | Self::SCANCODE_MASK)
    }

    /// Keycode for a printable character
    pub const fn from_char(ch: char) -> Self {
        Self(ch as u32)
    }

    /// The character this key produces, if it is a printable key
    pub fn as_char(self) -> Option<char> {
        if self.0 & Self::SCANCODE_MASK != 0 {
            return None;
        }
        char::from_u32(self.0).filter(|c| !c.is_control())
    }
}

bitflags! {
    /// Modifier keys held during a key event
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyMod: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LEVEL5 = 0x0004;
        const LCTRL = 0x0040;
        const RCTRL = 0x0080;
        const LALT = 0x0100;
        const RALT = 0x0200;
        const LGUI = 0x0400;
        const RGUI = 0x0800;
        const NUM = 0x1000;
        const CAPS = 0x2000;
        const MODE = 0x4000;
        const SCROLL = 0x8000;

        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        const GUI = Self::LGUI.bits() | Self::RGUI.bits();
    }
}

impl KeyMod {
    /// Either shift key is held
    pub fn shift(self) -> bool {
        self.intersects(Self::SHIFT)
    }

    /// Either control key is held
    pub fn ctrl(self) -> bool {
        self.intersects(Self::CTRL)
    }

    /// Either alt key is held (Option on macOS)
    pub fn alt(self) -> bool {
        self.intersects(Self::ALT)
    }

    /// Either GUI key is held (Command on macOS, Windows key on Windows)
    pub fn gui(self) -> bool {
        self.intersects(Self::GUI)
    }

    /// Check if only ctrl is held among shift/ctrl/alt/gui
    ///
    /// Lock states (num, caps, scroll) are ignored.
    pub fn ctrl_only(self) -> bool {
        self.ctrl() && !self.shift() && !self.alt() && !self.gui()
    }
}

// ============================================================================
// Mouse
// ============================================================================

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Right mouse button
    Right,
    /// First extra button (usually "back")
    X1,
    /// Second extra button (usually "forward")
    X2,
    /// Any other button, by native index
    Other(u8),
}

impl MouseButton {
    /// Map a native button index (1-based)
    pub fn from_native(index: u8) -> Self {
        match index {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            4 => MouseButton::X1,
            5 => MouseButton::X2,
            n => MouseButton::Other(n),
        }
    }

    /// The native button index
    pub fn to_native(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::X1 => 4,
            MouseButton::X2 => 5,
            MouseButton::Other(n) => n,
        }
    }
}

bitflags! {
    /// Mouse buttons held during a motion event
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtonMask: u32 {
        const LEFT = 1 << 0;
        const MIDDLE = 1 << 1;
        const RIGHT = 1 << 2;
        const X1 = 1 << 3;
        const X2 = 1 << 4;
    }
}

impl MouseButtonMask {
    /// Check whether `button` is held
    pub fn is_held(self, button: MouseButton) -> bool {
        match button.to_native() {
            0 => false,
            n if n <= 32 => self.bits() & (1 << (n - 1)) != 0,
            _ => false,
        }
    }
}

/// Scroll direction convention reported with wheel events
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    /// Positive y scrolls away from the user
    #[default]
    Normal,
    /// The platform inverts scrolling ("natural" scrolling); x and y are negated
    Flipped,
}

// ============================================================================
// Joystick
// ============================================================================

bitflags! {
    /// Joystick hat position
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HatPosition: u8 {
        const UP = 0x01;
        const RIGHT = 0x02;
        const DOWN = 0x04;
        const LEFT = 0x08;

        const RIGHT_UP = Self::RIGHT.bits() | Self::UP.bits();
        const RIGHT_DOWN = Self::RIGHT.bits() | Self::DOWN.bits();
        const LEFT_UP = Self::LEFT.bits() | Self::UP.bits();
        const LEFT_DOWN = Self::LEFT.bits() | Self::DOWN.bits();
    }
}

impl HatPosition {
    /// Hat at rest
    pub const CENTERED: Self = Self::empty();

    /// Check if the hat is at rest
    pub fn is_centered(self) -> bool {
        self.is_empty()
    }
}

// ============================================================================
// Text
// ============================================================================

/// Inline capacity of a [`TextBuffer`], including the native NUL terminator
pub const TEXT_CAPACITY: usize = 32;

/// Fixed-capacity inline UTF-8 text
///
/// Holds at most `TEXT_CAPACITY - 1` bytes. Content is always valid UTF-8:
/// input longer than the capacity is cut at the last character boundary that
/// fits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextBuffer {
    bytes: [u8; TEXT_CAPACITY],
    len: u8,
}

impl TextBuffer {
    /// Empty text
    pub const EMPTY: Self = Self {
        bytes: [0; TEXT_CAPACITY],
        len: 0,
    };

    /// Copy `text`, truncating at a character boundary if it does not fit
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(TEXT_CAPACITY - 1);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        Self::from_valid(&text.as_bytes()[..end])
    }

    /// Copy a native NUL-terminated buffer
    ///
    /// Reads up to the first NUL (or the capacity) and keeps the longest
    /// valid UTF-8 prefix.
    pub fn from_nul_terminated(raw: &[u8]) -> Self {
        let limit = raw.len().min(TEXT_CAPACITY - 1);
        let raw = &raw[..limit];
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        let raw = &raw[..end];
        let valid = match std::str::from_utf8(raw) {
            Ok(_) => raw.len(),
            Err(e) => e.valid_up_to(),
        };
        Self::from_valid(&raw[..valid])
    }

    fn from_valid(bytes: &[u8]) -> Self {
        let mut buf = Self::EMPTY;
        buf.bytes[..bytes.len()].copy_from_slice(bytes);
        buf.len = bytes.len() as u8;
        buf
    }

    /// The text
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// The text as bytes (no terminator)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Check if the text is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_native_mapping() {
        assert_eq!(MouseButton::from_native(1), MouseButton::Left);
        assert_eq!(MouseButton::from_native(2), MouseButton::Middle);
        assert_eq!(MouseButton::from_native(3), MouseButton::Right);
        assert_eq!(MouseButton::from_native(4), MouseButton::X1);
        assert_eq!(MouseButton::from_native(5), MouseButton::X2);
        assert_eq!(MouseButton::from_native(9), MouseButton::Other(9));
        assert_eq!(MouseButton::Other(9).to_native(), 9);
    }

    #[test]
    fn test_button_mask_held() {
        let mask = MouseButtonMask::LEFT | MouseButtonMask::X2;
        assert!(mask.is_held(MouseButton::Left));
        assert!(mask.is_held(MouseButton::X2));
        assert!(!mask.is_held(MouseButton::Right));
        assert!(!mask.is_held(MouseButton::Other(0)));
    }

    #[test]
    fn test_keymod_combined_flags() {
        let mods = KeyMod::from_bits_retain(0x0080 | 0x1000);
        assert!(mods.ctrl());
        assert!(!mods.shift());
        assert!(mods.ctrl_only());
        assert!(mods.contains(KeyMod::NUM));

        let mods = KeyMod::LCTRL | KeyMod::LSHIFT;
        assert!(!mods.ctrl_only());
    }

    #[test]
    fn test_keymod_retains_unknown_bits() {
        let mods = KeyMod::from_bits_retain(0x0008);
        assert_eq!(mods.bits(), 0x0008);
        assert!(!mods.shift() && !mods.ctrl() && !mods.alt() && !mods.gui());
    }

    #[test]
    fn test_keycode_chars() {
        assert_eq!(Keycode::from_char('a').as_char(), Some('a'));
        assert_eq!(Keycode::SPACE.as_char(), Some(' '));
        assert_eq!(Keycode::ESCAPE.as_char(), None);
        assert_eq!(Keycode::F1.as_char(), None);
        assert_eq!(Keycode::F1.0, 58 | Keycode::SCANCODE_MASK);
    }

    #[test]
    fn test_hat_centered() {
        assert!(HatPosition::CENTERED.is_centered());
        assert!(!HatPosition::LEFT_UP.is_centered());
        assert!(HatPosition::LEFT_UP.contains(HatPosition::UP));
    }

    #[test]
    fn test_text_buffer_short() {
        let text = TextBuffer::new("héllo");
        assert_eq!(text.as_str(), "héllo");
        assert_eq!(text.len(), 6);
        assert!(!text.is_empty());
        assert_eq!(text, "héllo");
    }

    #[test]
    fn test_text_buffer_truncates_at_char_boundary() {
        // 10 three-byte characters = 30 bytes, plus one more does not fit
        let long = "日本語日本語日本語日本";
        assert_eq!(long.len(), 33);
        let text = TextBuffer::new(long);
        assert_eq!(text.len(), 30);
        assert_eq!(text.as_str(), "日本語日本語日本語日");
    }

    #[test]
    fn test_text_buffer_from_nul_terminated() {
        let mut raw = [0u8; TEXT_CAPACITY];
        raw[..3].copy_from_slice(b"abc");
        raw[4] = b'z';
        assert_eq!(TextBuffer::from_nul_terminated(&raw).as_str(), "abc");
    }

    #[test]
    fn test_text_buffer_unterminated_native_input() {
        let raw = [b'x'; TEXT_CAPACITY];
        let text = TextBuffer::from_nul_terminated(&raw);
        assert_eq!(text.len(), TEXT_CAPACITY - 1);
    }

    #[test]
    fn test_text_buffer_drops_split_character() {
        // "é" is 0xC3 0xA9; keep only the first byte of it
        let raw = [b'a', 0xC3, 0];
        assert_eq!(TextBuffer::from_nul_terminated(&raw).as_str(), "a");
    }
}
