//! Card rendering state: question side always, answer side on reveal.

use crate::{ImageAsset, ImageRole, QuestionRecord};

/// An image ready to be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub role: ImageRole,
    /// 1-based position among the images of the same role.
    pub ordinal: usize,
    /// Accessible label, e.g. `Answer image 1`.
    pub label: String,
    /// `data:` URI of the image.
    pub source: String,
}

impl ImageView {
    fn new(role: ImageRole, ordinal: usize, asset: &ImageAsset) -> Self {
        Self {
            role,
            ordinal,
            label: format!("{} {}", role.label_prefix(), ordinal),
            source: asset.data_uri(),
        }
    }
}

/// Images of `role`, labeled in their original order.
pub fn images_of(record: &QuestionRecord, role: ImageRole) -> Vec<ImageView> {
    record
        .images_for(role)
        .enumerate()
        .map(|(i, asset)| ImageView::new(role, i + 1, asset))
        .collect()
}

/// Rendered state of the card currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub question_no: u32,
    pub question: String,
    pub has_images: bool,
    pub question_images: Vec<ImageView>,
    /// Held for reveal; not shown while hidden.
    answer: String,
    answer_images: Vec<ImageView>,
    answer_visible: bool,
}

impl Card {
    /// Render the question side of `record`. The answer starts hidden.
    pub fn render(record: &QuestionRecord) -> Self {
        Self {
            question_no: record.question_no,
            question: record.question.clone(),
            has_images: record.has_images,
            question_images: images_of(record, ImageRole::Question),
            answer: record.answer.clone(),
            answer_images: Vec::new(),
            answer_visible: false,
        }
    }

    /// Flip the answer region. Answer images are rebuilt from `record` on
    /// every reveal and dropped on hide.
    pub fn toggle_answer(&mut self, record: &QuestionRecord) {
        self.answer_visible = !self.answer_visible;
        if self.answer_visible {
            self.answer_images = images_of(record, ImageRole::Answer);
        } else {
            self.answer_images.clear();
        }
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    /// The answer text, only once revealed.
    pub fn answer(&self) -> Option<&str> {
        self.answer_visible.then_some(self.answer.as_str())
    }

    pub fn answer_images(&self) -> &[ImageView] {
        &self.answer_images
    }

    /// All images currently on screen, question side first.
    pub fn visible_images(&self) -> impl Iterator<Item = &ImageView> {
        self.question_images.iter().chain(self.answer_images.iter())
    }

    pub fn visible_image_count(&self) -> usize {
        self.question_images.len() + self.answer_images.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QuestionRecord {
        QuestionRecord::new(7, "What?", "That.")
            .with_image(ImageAsset::new(ImageRole::Question, None, "UQ=="))
            .with_image(ImageAsset::new(ImageRole::Answer, Some("jpeg"), "QQ=="))
            .with_image(ImageAsset::new(ImageRole::Question, Some("gif"), "Ug=="))
    }

    #[test]
    fn test_render_question_images_only() {
        let card = Card::render(&record());
        let labels: Vec<&str> = card.question_images.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Question image 1", "Question image 2"]);
        assert_eq!(card.question_images[1].source, "data:image/gif;base64,Ug==");
        assert!(card.answer_images().is_empty());
        assert_eq!(card.answer(), None);
    }

    #[test]
    fn test_toggle_is_involution() {
        let record = record();
        let mut card = Card::render(&record);

        card.toggle_answer(&record);
        assert!(card.answer_visible());
        assert_eq!(card.answer(), Some("That."));
        assert_eq!(card.answer_images().len(), 1);
        assert_eq!(card.answer_images()[0].label, "Answer image 1");
        assert_eq!(card.answer_images()[0].source, "data:image/jpeg;base64,QQ==");
        assert_eq!(card.visible_image_count(), 3);

        card.toggle_answer(&record);
        assert!(!card.answer_visible());
        assert!(card.answer_images().is_empty());
        assert_eq!(card, Card::render(&record));
    }
}
