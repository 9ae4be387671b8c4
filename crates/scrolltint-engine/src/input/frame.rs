use super::types::{InputEvent, Key, KeyState, Modifiers, MouseWheelDelta};

/// Input accumulated since the previous frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Current modifier state; persists across frames.
    pub modifiers: Modifiers,

    /// Key presses this frame in arrival order, repeats included.
    pub keys_pressed: Vec<Key>,

    /// Wheel deltas this frame in arrival order.
    pub wheel: Vec<MouseWheelDelta>,
}

impl InputFrame {
    pub fn apply(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = m,
            InputEvent::Key { key, state: KeyState::Pressed, .. } => self.keys_pressed.push(key),
            InputEvent::Key { .. } => {}
            InputEvent::MouseWheel(delta) => self.wheel.push(delta),
            // Modifier releases can be lost while unfocused.
            InputEvent::Focused(false) => self.modifiers = Modifiers::default(),
            InputEvent::Focused(true) => {}
        }
    }

    /// True when the frame carries anything a frame callback would act on.
    pub fn has_activity(&self) -> bool {
        !self.keys_pressed.is_empty() || !self.wheel.is_empty()
    }

    /// Clears per-frame deltas; modifier state is kept.
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.wheel.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presses_and_wheel_accumulate_until_cleared() {
        let mut f = InputFrame::default();
        f.apply(InputEvent::Key { key: Key::PageDown, state: KeyState::Pressed, repeat: false });
        f.apply(InputEvent::Key { key: Key::PageDown, state: KeyState::Released, repeat: false });
        f.apply(InputEvent::MouseWheel(MouseWheelDelta::Line { y: 1.0 }));
        assert_eq!(f.keys_pressed, vec![Key::PageDown]);
        assert_eq!(f.wheel.len(), 1);
        assert!(f.has_activity());

        f.clear();
        assert!(!f.has_activity());
    }

    #[test]
    fn focus_loss_resets_modifiers() {
        let mut f = InputFrame::default();
        f.apply(InputEvent::ModifiersChanged(Modifiers { shift: true, ..Modifiers::default() }));
        f.clear();
        assert!(f.modifiers.shift);
        f.apply(InputEvent::Focused(false));
        assert_eq!(f.modifiers, Modifiers::default());
    }
}
