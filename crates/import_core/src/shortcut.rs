/// Which modifier is the platform's "primary" one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutPlatform {
    /// Cmd.
    Mac,
    /// Ctrl.
    Other,
}

impl ShortcutPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            ShortcutPlatform::Mac
        } else {
            ShortcutPlatform::Other
        }
    }
}

impl Default for ShortcutPlatform {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS, Super/Windows elsewhere.
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
    pub const META: Modifiers = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Enter plus the platform's primary modifier.
    pub fn submit_for(platform: ShortcutPlatform) -> Self {
        let modifiers = match platform {
            ShortcutPlatform::Mac => Modifiers::META,
            ShortcutPlatform::Other => Modifiers::CTRL,
        };
        Self::new(Key::Enter, modifiers)
    }

    pub fn is_submit(&self, platform: ShortcutPlatform) -> bool {
        if self.key != Key::Enter {
            return false;
        }
        match platform {
            ShortcutPlatform::Mac => self.modifiers.meta,
            ShortcutPlatform::Other => self.modifiers.ctrl,
        }
    }
}

/// Where keyboard focus is when a key is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TextInput,
    Elsewhere,
}
