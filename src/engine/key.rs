// src/engine/key.rs

//! Key classification: maps raw key descriptors onto the semantic predicates
//! the navigation, reordering and selection engines dispatch on.
//!
//! Up and left are always equivalent in effect, as are down and right; the
//! vim bindings (`k`/`j`/`h`/`l`) mirror the arrow keys and `t`/`b` mirror
//! PageUp/PageDown.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A flattened key descriptor. Holding ctrl, meta (alt/super) or shift
/// together with a directional or edge key means "move the group" rather
/// than "move the cursor".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl From<KeyEvent> for KeyPress {
    fn from(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            meta: event.modifiers.contains(KeyModifiers::ALT)
                || event.modifiers.contains(KeyModifiers::SUPER)
                || event.modifiers.contains(KeyModifiers::META),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

impl KeyPress {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    pub fn shifted(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            meta: false,
            shift: true,
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self.code, KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K'))
    }

    pub fn is_down(&self) -> bool {
        matches!(self.code, KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J'))
    }

    pub fn is_left(&self) -> bool {
        matches!(self.code, KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H'))
    }

    pub fn is_right(&self) -> bool {
        matches!(self.code, KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L'))
    }

    pub fn is_up_or_left(&self) -> bool {
        self.is_up() || self.is_left()
    }

    pub fn is_down_or_right(&self) -> bool {
        self.is_down() || self.is_right()
    }

    pub fn is_vertical(&self) -> bool {
        self.is_up() || self.is_down()
    }

    pub fn is_horizontal(&self) -> bool {
        self.is_left() || self.is_right()
    }

    pub fn is_directional(&self) -> bool {
        self.is_vertical() || self.is_horizontal()
    }

    pub fn is_top(&self) -> bool {
        matches!(self.code, KeyCode::PageUp | KeyCode::Char('t') | KeyCode::Char('T'))
    }

    pub fn is_bottom(&self) -> bool {
        matches!(self.code, KeyCode::PageDown | KeyCode::Char('b') | KeyCode::Char('B'))
    }

    pub fn is_top_or_bottom(&self) -> bool {
        self.is_top() || self.is_bottom()
    }

    /// Any of ctrl/meta/shift turns a directional or edge key into a group
    /// move.
    pub fn is_group_modified(&self) -> bool {
        self.ctrl || self.meta || self.shift
    }

    pub fn is_place_command(&self) -> bool {
        matches!(self.code, KeyCode::Char('m') | KeyCode::Char('M'))
    }

    /// `m` places checked items immediately above the active item.
    pub fn is_place_above(&self) -> bool {
        self.code == KeyCode::Char('m') && !self.shift
    }

    /// `M` (shift+m) places checked items immediately below the active item.
    pub fn is_place_below(&self) -> bool {
        self.code == KeyCode::Char('M') || (self.code == KeyCode::Char('m') && self.shift)
    }

    pub fn is_space(&self) -> bool {
        self.code == KeyCode::Char(' ')
    }

    pub fn is_enter(&self) -> bool {
        self.code == KeyCode::Enter
    }

    /// `?` or `H`. Checked before the directional predicates, so `H` never
    /// reaches the left-movement path.
    pub fn is_help(&self) -> bool {
        matches!(self.code, KeyCode::Char('?') | KeyCode::Char('H'))
    }

    pub fn is_toggle_all(&self) -> bool {
        self.code == KeyCode::Char('a')
    }

    pub fn is_invert(&self) -> bool {
        self.code == KeyCode::Char('i')
    }

    /// 1-based digit jump, `1` through `9`.
    pub fn digit(&self) -> Option<usize> {
        match self.code {
            KeyCode::Char(c @ '1'..='9') => Some(c as usize - '0' as usize),
            _ => None,
        }
    }
}
