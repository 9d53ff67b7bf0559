//! Held-key tracking
//!
//! Four logical inputs, one per paddle direction. Key-down/key-up handlers
//! flip the flags; the simulation reads them once per frame. Everything else
//! on the keyboard is ignored without touching the state.

/// The four logical control inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleInput {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

/// Currently-held control keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    left_up: bool,
    left_down: bool,
    right_up: bool,
    right_down: bool,
}

impl HeldKeys {
    /// Map a DOM key name to a logical input. Left paddle on `z`/`s`,
    /// right paddle on the arrow keys; anything else is unrecognized.
    pub fn input_for_key(key: &str) -> Option<PaddleInput> {
        match key {
            "z" => Some(PaddleInput::LeftUp),
            "s" => Some(PaddleInput::LeftDown),
            "ArrowUp" => Some(PaddleInput::RightUp),
            "ArrowDown" => Some(PaddleInput::RightDown),
            _ => None,
        }
    }

    pub fn set_held(&mut self, input: PaddleInput, held: bool) {
        match input {
            PaddleInput::LeftUp => self.left_up = held,
            PaddleInput::LeftDown => self.left_down = held,
            PaddleInput::RightUp => self.right_up = held,
            PaddleInput::RightDown => self.right_down = held,
        }
    }

    pub fn is_held(&self, input: PaddleInput) -> bool {
        match input {
            PaddleInput::LeftUp => self.left_up,
            PaddleInput::LeftDown => self.left_down,
            PaddleInput::RightUp => self.right_up,
            PaddleInput::RightDown => self.right_down,
        }
    }

    /// Apply a key event by DOM key name. Returns true if the key was one of
    /// the four recognized inputs.
    pub fn handle_key(&mut self, key: &str, held: bool) -> bool {
        match Self::input_for_key(key) {
            Some(input) => {
                self.set_held(input, held);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(HeldKeys::input_for_key("z"), Some(PaddleInput::LeftUp));
        assert_eq!(HeldKeys::input_for_key("s"), Some(PaddleInput::LeftDown));
        assert_eq!(
            HeldKeys::input_for_key("ArrowUp"),
            Some(PaddleInput::RightUp)
        );
        assert_eq!(
            HeldKeys::input_for_key("ArrowDown"),
            Some(PaddleInput::RightDown)
        );
    }

    #[test]
    fn test_press_and_release() {
        let mut keys = HeldKeys::default();
        assert!(!keys.is_held(PaddleInput::RightUp));

        assert!(keys.handle_key("ArrowUp", true));
        assert!(keys.is_held(PaddleInput::RightUp));

        assert!(keys.handle_key("ArrowUp", false));
        assert!(!keys.is_held(PaddleInput::RightUp));
    }

    #[test]
    fn test_unrecognized_keys_leave_state_unchanged() {
        let mut keys = HeldKeys::default();
        keys.handle_key("z", true);
        let before = keys;

        for key in ["Escape", "Enter", " ", "a", "ArrowLeft", "Z", "S"] {
            assert!(!keys.handle_key(key, true));
            assert!(!keys.handle_key(key, false));
        }
        assert_eq!(keys, before);
    }
}
