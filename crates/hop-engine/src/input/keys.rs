/// Raw keyboard events as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
}

/// Keys the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Space bar, the jump button.
    Space,
}

impl Key {
    pub const COUNT: usize = 1;
    pub const ALL: [Key; Key::COUNT] = [Key::Space];

    /// Map a DOM `keyCode` to a key. Unknown codes map to `None`.
    pub fn from_code(key_code: u32) -> Option<Self> {
        match key_code {
            32 => Some(Key::Space),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Key::Space => "space",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Last known held/released state of every `Key`.
/// Sampled by the update; no events are buffered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatus {
    held: [bool; Key::COUNT],
}

impl KeyStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a raw event. Returns true if the key is recognised, in which case
    /// the caller should suppress the browser's default handling.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        let (key_code, held) = match event {
            InputEvent::KeyDown { key_code } => (key_code, true),
            InputEvent::KeyUp { key_code } => (key_code, false),
        };
        match Key::from_code(key_code) {
            Some(key) => {
                self.set(key, held);
                true
            }
            None => false,
        }
    }

    pub fn set(&mut self, key: Key, held: bool) {
        self.held[key.index()] = held;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}
