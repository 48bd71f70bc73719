//! Pure projection of viewer state into what a frontend should draw.

use crate::{ImageView, Mode, ModalImage, Viewer};

/// 1-based position within the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerView {
    pub text: String,
    pub images: Vec<ImageView>,
}

/// Everything a frontend needs to draw one frame of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub mode: Mode,
    pub progress: Progress,
    pub question_no: u32,
    pub question: String,
    pub has_images: bool,
    pub question_images: Vec<ImageView>,
    /// `Some` only while the answer is revealed.
    pub answer: Option<AnswerView>,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub show_random_jump: bool,
    /// Index into question images followed by answer images.
    pub focused_image: Option<usize>,
    pub modal: Option<ModalImage>,
}

impl ScreenView {
    pub fn project(viewer: &Viewer) -> Self {
        let session = viewer.session();
        let card = viewer.card();

        Self {
            mode: session.mode(),
            progress: Progress {
                current: session.position() + 1,
                total: session.len(),
            },
            question_no: card.question_no,
            question: card.question.clone(),
            has_images: card.has_images,
            question_images: card.question_images.clone(),
            answer: card.answer().map(|text| AnswerView {
                text: text.to_string(),
                images: card.answer_images().to_vec(),
            }),
            can_go_prev: session.can_go_prev(),
            can_go_next: session.can_go_next(),
            show_random_jump: session.mode() == Mode::Exam,
            focused_image: viewer.focused_image(),
            modal: viewer.modal().current().cloned(),
        }
    }

    /// Whether the image at `index` (question images first) has keyboard focus.
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused_image == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Dataset, QuestionRecord, Session, Step};

    #[test]
    fn test_projection_follows_state() {
        let dataset = Dataset::new(vec![
            QuestionRecord::new(2, "second", "B"),
            QuestionRecord::new(1, "first", "A"),
        ])
        .unwrap();
        let mut viewer = Viewer::new(Session::with_seed(dataset, 0));

        let view = ScreenView::project(&viewer);
        assert_eq!(view.progress, Progress { current: 1, total: 2 });
        assert_eq!(view.question_no, 1);
        assert_eq!(view.question, "first");
        assert!(view.answer.is_none());
        assert!(!view.can_go_prev);
        assert!(view.can_go_next);
        assert!(!view.show_random_jump);

        viewer.apply(Action::Navigate(Step::Next));
        viewer.apply(Action::ToggleAnswer);
        let view = ScreenView::project(&viewer);
        assert_eq!(view.progress.current, 2);
        assert_eq!(view.answer.as_ref().map(|a| a.text.as_str()), Some("B"));
        assert!(view.can_go_prev);
        assert!(!view.can_go_next);

        viewer.apply(Action::SwitchMode(Mode::Exam));
        let view = ScreenView::project(&viewer);
        assert!(view.show_random_jump);
        assert_eq!(view.progress.current, 1);
        assert!(view.answer.is_none());
    }
}
