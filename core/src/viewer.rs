use crate::input::{Action, Key, dispatch};
use crate::{Card, Dataset, ImageModal, ImageView, Session, Step};
use log::debug;

/// A loaded deck: session, the card on screen, the image overlay and the
/// keyboard focus among the card's images.
#[derive(Debug)]
pub struct Viewer {
    session: Session,
    card: Card,
    modal: ImageModal,
    focus: Option<usize>,
    /// Bumped on every card render; lets the shell restart transitions.
    renders: u64,
}

impl Viewer {
    pub fn new(session: Session) -> Self {
        let card = Card::render(session.current_record());
        Self {
            session,
            card,
            modal: ImageModal::default(),
            focus: None,
            renders: 1,
        }
    }

    /// Replace the deck with a freshly loaded dataset.
    pub fn load(&mut self, dataset: Dataset) {
        self.session.load_dataset(dataset);
        self.modal.close();
        self.render_current();
    }

    fn render_current(&mut self) {
        self.card = Card::render(self.session.current_record());
        self.focus = None;
        self.renders += 1;
    }

    /// Dispatch `key`. Returns `true` when an action fired, meaning the key
    /// was consumed and must not trigger any default behaviour.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match dispatch(self, key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }

    /// Perform `action` unconditionally (bounds are still enforced by the session).
    pub fn apply(&mut self, action: Action) {
        debug!("[Viewer] {:?}", action);
        match action {
            Action::Navigate(step) => {
                if self.session.navigate(step) {
                    self.render_current();
                }
            }
            Action::ToggleAnswer => {
                self.card.toggle_answer(self.session.current_record());
                if self
                    .focus
                    .is_some_and(|focus| focus >= self.card.visible_image_count())
                {
                    self.focus = None;
                }
            }
            Action::JumpRandom => {
                self.session.jump_random();
                self.render_current();
            }
            Action::SwitchMode(mode) => {
                self.session.switch_mode(mode);
                self.render_current();
            }
            Action::FocusImage(step) => self.move_focus(step),
            Action::OpenFocusedImage => {
                if let Some(index) = self.focus {
                    self.open_image(index);
                }
            }
            Action::CloseModal => {
                self.modal.close();
            }
        }
    }

    fn move_focus(&mut self, step: Step) {
        let count = self.card.visible_image_count();
        if count == 0 {
            self.focus = None;
            return;
        }
        self.focus = Some(match (self.focus, step) {
            (None, Step::Next) => 0,
            (None, Step::Prev) => count - 1,
            (Some(i), Step::Next) => (i + 1) % count,
            (Some(i), Step::Prev) => (i + count - 1) % count,
        });
    }

    /// Open the `index`-th visible image (question images first) in the overlay.
    pub fn open_image(&mut self, index: usize) -> bool {
        let Some(image) = self.card.visible_images().nth(index) else {
            return false;
        };
        let (source, label) = (image.source.clone(), image.label.clone());
        self.focus = Some(index);
        self.modal.open(source, label);
        true
    }

    pub fn close_modal(&mut self) -> bool {
        self.modal.close()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn modal(&self) -> &ImageModal {
        &self.modal
    }

    pub fn focused_image(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_image_view(&self) -> Option<&ImageView> {
        self.focus.and_then(|i| self.card.visible_images().nth(i))
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }
}
