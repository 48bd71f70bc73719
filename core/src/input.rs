//! Key-to-action mapping.
//!
//! Keys are described independently of any terminal library; the shell
//! translates its own events into [`Key`] before dispatching.

use crate::{Mode, Step, Viewer};

/// A key press the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    Enter,
    Tab,
    BackTab,
    Esc,
    Char(char),
}

/// Something the viewer can do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Navigate(Step),
    ToggleAnswer,
    JumpRandom,
    SwitchMode(Mode),
    FocusImage(Step),
    OpenFocusedImage,
    CloseModal,
}

/// Map `key` to an action, honouring the current preconditions.
///
/// Returns `None` when the key is unbound or its precondition does not
/// hold, in which case the caller should let the key fall through.
pub fn dispatch(viewer: &Viewer, key: Key) -> Option<Action> {
    let session = viewer.session();

    // the overlay swallows everything but its close keys
    if viewer.modal().is_open() {
        return match key {
            Key::Esc | Key::Char('x') | Key::Char('X') => Some(Action::CloseModal),
            _ => None,
        };
    }

    match key {
        Key::Left if session.can_go_prev() => Some(Action::Navigate(Step::Prev)),
        Key::Right if session.can_go_next() => Some(Action::Navigate(Step::Next)),
        Key::Space => Some(Action::ToggleAnswer),
        Key::Char('r') | Key::Char('R') if session.mode() == Mode::Exam => {
            Some(Action::JumpRandom)
        }
        Key::Char('b') | Key::Char('B') => Some(Action::SwitchMode(Mode::Basic)),
        Key::Char('e') | Key::Char('E') => Some(Action::SwitchMode(Mode::Exam)),
        Key::Tab if viewer.card().visible_image_count() > 0 => {
            Some(Action::FocusImage(Step::Next))
        }
        Key::BackTab if viewer.card().visible_image_count() > 0 => {
            Some(Action::FocusImage(Step::Prev))
        }
        Key::Enter if viewer.focused_image().is_some() => Some(Action::OpenFocusedImage),
        _ => None,
    }
}
