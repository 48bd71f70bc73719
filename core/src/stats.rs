//! Summary numbers for a loaded dataset.

use crate::{Dataset, ImageRole};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub total_questions: usize,
    /// Questions with a real answer (see [`crate::QuestionRecord::has_answer`]).
    pub questions_with_answers: usize,
    pub questions_with_images: usize,
    pub question_images: usize,
    pub answer_images: usize,
}

impl DatasetStats {
    pub fn collect(dataset: &Dataset) -> Self {
        let mut stats = Self::default();
        for record in dataset {
            stats.total_questions += 1;
            if record.has_answer() {
                stats.questions_with_answers += 1;
            }
            if record.has_images {
                stats.questions_with_images += 1;
            }
            stats.question_images += record.images_for(ImageRole::Question).count();
            stats.answer_images += record.images_for(ImageRole::Answer).count();
        }
        stats
    }

    pub fn total_images(&self) -> usize {
        self.question_images + self.answer_images
    }

    /// Percentage of questions with an answer.
    pub fn answer_completion_rate(&self) -> f64 {
        percentage(self.questions_with_answers, self.total_questions)
    }

    /// Percentage of questions carrying at least one image.
    pub fn image_inclusion_rate(&self) -> f64 {
        percentage(self.questions_with_images, self.total_questions)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64) * 100.0
}

impl fmt::Display for DatasetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Questions:              {}", self.total_questions)?;
        writeln!(f, "With answers:           {}", self.questions_with_answers)?;
        writeln!(
            f,
            "Without answers:        {}",
            self.total_questions - self.questions_with_answers
        )?;
        writeln!(f, "With images:            {}", self.questions_with_images)?;
        writeln!(
            f,
            "Images:                 {} ({} question, {} answer)",
            self.total_images(),
            self.question_images,
            self.answer_images
        )?;
        writeln!(f, "Answer completion:      {:.1}%", self.answer_completion_rate())?;
        write!(f, "Image inclusion:        {:.1}%", self.image_inclusion_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageAsset, QuestionRecord};

    #[test]
    fn test_collect() {
        let dataset = Dataset::new(vec![
            QuestionRecord::new(1, "a", "A")
                .with_image(ImageAsset::new(ImageRole::Question, None, "AA"))
                .with_image(ImageAsset::new(ImageRole::Answer, None, "AA"))
                .with_image(ImageAsset::new(ImageRole::Question, None, "AA")),
            QuestionRecord::new(2, "b", "  "),
            QuestionRecord::new(3, "c", "C"),
            QuestionRecord::new(4, "d", "D"),
        ])
        .unwrap();

        let stats = DatasetStats::collect(&dataset);
        assert_eq!(stats.total_questions, 4);
        assert_eq!(stats.questions_with_answers, 3);
        assert_eq!(stats.questions_with_images, 1);
        assert_eq!(stats.question_images, 2);
        assert_eq!(stats.answer_images, 1);
        assert_eq!(stats.total_images(), 3);
        assert_eq!(stats.answer_completion_rate(), 75.0);
        assert_eq!(stats.image_inclusion_rate(), 25.0);
    }

    #[test]
    fn test_placeholder_answer_is_not_counted() {
        let dataset = Dataset::new(vec![
            QuestionRecord::new(1, "a", "A"),
            QuestionRecord::new(2, "b", crate::NO_ANSWER_PLACEHOLDER),
        ])
        .unwrap();

        let stats = DatasetStats::collect(&dataset);
        assert_eq!(stats.questions_with_answers, 1);
        assert_eq!(stats.answer_completion_rate(), 50.0);
    }

    #[test]
    fn test_rates_of_empty_stats() {
        let stats = DatasetStats::default();
        assert_eq!(stats.answer_completion_rate(), 0.0);
        assert_eq!(stats.image_inclusion_rate(), 0.0);
    }
}
