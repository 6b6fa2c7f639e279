//! Strong identifier types
//!
//! Native handles are plain `u32` values. Each kind of handle gets its own
//! newtype so a window id can never be passed where a renderer id (or a raw
//! integer) is expected. Construction is always explicit via `new`; there is
//! no `From<u32>`:
//!
//! ```compile_fail
//! use laya_events::WindowId;
//!
//! let _: WindowId = 5u32.into();
//! ```
//!
//! ```
//! use laya_events::WindowId;
//!
//! assert_eq!(WindowId::new(5).value(), 5);
//! ```

use std::fmt;

macro_rules! strong_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            /// The invalid (zero) id
            pub const INVALID: Self = Self(0);

            /// Wrap a raw native id
            #[inline]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Get the raw native id
            #[inline]
            pub const fn value(self) -> u32 {
                self.0
            }

            /// Check whether the id is valid (non-zero)
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

strong_id!(
    /// Native window identifier
    WindowId,
    "window"
);

strong_id!(
    /// Native renderer identifier
    RendererId,
    "renderer"
);

strong_id!(
    /// Mouse device instance identifier
    MouseId,
    "mouse"
);

strong_id!(
    /// Joystick device instance identifier
    JoystickId,
    "joystick"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        assert_eq!(WindowId::default(), WindowId::INVALID);
        assert!(!WindowId::default().is_valid());
        assert!(!RendererId::default().is_valid());
    }

    #[test]
    fn test_explicit_construction() {
        let id = WindowId::new(42);
        assert!(id.is_valid());
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        let mut ids = vec![WindowId::new(3), WindowId::new(1), WindowId::new(2)];
        ids.sort();
        assert_eq!(ids, [WindowId::new(1), WindowId::new(2), WindowId::new(3)]);
        assert!(WindowId::new(1) < WindowId::new(2));
    }

    #[test]
    fn test_display_names_the_kind() {
        assert_eq!(WindowId::new(7).to_string(), "window#7");
        assert_eq!(JoystickId::new(2).to_string(), "joystick#2");
    }
}
