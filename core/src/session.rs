use crate::{Dataset, DatasetError, QuestionRecord};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Traversal mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Sequential, ascending `question_no`.
    #[default]
    Basic,
    /// Walks the session's fixed random permutation.
    Exam,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Basic, Mode::Exam];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Exam => "exam",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown mode `{0}` (expected `basic` or `exam`)")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Mode::Basic),
            "exam" => Ok(Mode::Exam),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

/// A single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Prev,
    Next,
}

impl Step {
    pub fn delta(self) -> isize {
        match self {
            Step::Prev => -1,
            Step::Next => 1,
        }
    }
}

/// Session controller: owns the dataset, the mode, the position and the
/// exam-mode permutation.
#[derive(Debug)]
pub struct Session {
    dataset: Dataset,
    mode: Mode,
    position: usize,
    random_order: Vec<usize>,
    rng: StdRng,
}

impl Session {
    /// Start a session over `dataset` with an OS-seeded random source.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_rng(dataset, StdRng::from_os_rng())
    }

    /// Start a session with a deterministic random source.
    pub fn with_seed(dataset: Dataset, seed: u64) -> Self {
        Self::with_rng(dataset, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dataset: Dataset, rng: StdRng) -> Self {
        let mut session = Self {
            dataset,
            mode: Mode::Basic,
            position: 0,
            random_order: Vec::new(),
            rng,
        };
        session.reset();
        session
    }

    /// Replace the dataset with `records`.
    ///
    /// On failure the current dataset and position are left untouched.
    pub fn load(&mut self, records: Vec<QuestionRecord>) -> Result<(), DatasetError> {
        let dataset = Dataset::new(records)?;
        self.load_dataset(dataset);
        Ok(())
    }

    /// Replace the dataset with an already validated one.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.reset();
    }

    fn reset(&mut self) {
        self.random_order = shuffled_indices(self.dataset.len(), &mut self.rng);
        self.mode = Mode::Basic;
        self.position = 0;
        info!("[Session] Loaded {} questions", self.dataset.len());
    }

    pub fn switch_mode(&mut self, mode: Mode) {
        info!("[Session] Switching to {} mode", mode);
        self.mode = mode;
        self.position = 0;
    }

    /// The record under the cursor, resolved through the permutation in exam mode.
    pub fn current_record(&self) -> &QuestionRecord {
        &self.dataset[self.current_index()]
    }

    /// Dataset index of the record under the cursor.
    pub fn current_index(&self) -> usize {
        match self.mode {
            Mode::Basic => self.position,
            Mode::Exam => self.random_order[self.position],
        }
    }

    /// Move one step. Returns `false` (and changes nothing) at the boundaries.
    pub fn navigate(&mut self, step: Step) -> bool {
        let Some(target) = self.position.checked_add_signed(step.delta()) else {
            return false;
        };
        if target >= self.dataset.len() {
            return false;
        }
        self.position = target;
        debug!("[Session] {:?} -> position {}", step, self.position);
        true
    }

    /// Jump to a uniformly random position.
    pub fn jump_random(&mut self) {
        self.position = self.rng.random_range(0..self.dataset.len());
        debug!("[Session] Random jump -> position {}", self.position);
    }

    pub fn can_go_prev(&self) -> bool {
        self.position > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.position + 1 < self.dataset.len()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn random_order(&self) -> &[usize] {
        &self.random_order
    }
}

/// Fisher–Yates shuffle of `0..len`.
fn shuffled_indices(len: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = rng.random_range(0..=i);
        order.swap(i, j);
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(numbers: &[u32]) -> Dataset {
        Dataset::new(
            numbers
                .iter()
                .map(|&n| QuestionRecord::new(n, format!("q{n}"), format!("a{n}")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("basic".parse::<Mode>(), Ok(Mode::Basic));
        assert_eq!(" Exam ".parse::<Mode>(), Ok(Mode::Exam));
        assert!("random".parse::<Mode>().is_err());
    }

    #[test]
    fn test_shuffled_indices_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 2, 10, 97] {
            let mut order = shuffled_indices(len, &mut rng);
            order.sort_unstable();
            assert_eq!(order, (0..len).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_navigate_clamps() {
        let mut session = Session::with_seed(dataset(&[1, 2, 3]), 1);
        assert!(!session.navigate(Step::Prev));
        assert_eq!(session.position(), 0);

        assert!(session.navigate(Step::Next));
        assert!(session.navigate(Step::Next));
        assert!(!session.navigate(Step::Next));
        assert_eq!(session.position(), 2);
        assert!(!session.can_go_next());
        assert!(session.can_go_prev());
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let mut session = Session::with_seed(dataset(&[1, 2, 3]), 1);
        session.switch_mode(Mode::Exam);
        session.navigate(Step::Next);

        assert!(session.load(Vec::new()).is_err());
        assert_eq!(session.mode(), Mode::Exam);
        assert_eq!(session.position(), 1);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_load_resets_mode_and_position() {
        let mut session = Session::with_seed(dataset(&[1, 2, 3]), 1);
        session.switch_mode(Mode::Exam);
        session.navigate(Step::Next);

        session
            .load(vec![
                QuestionRecord::new(9, "q", "a"),
                QuestionRecord::new(8, "q", "a"),
            ])
            .unwrap();
        assert_eq!(session.mode(), Mode::Basic);
        assert_eq!(session.position(), 0);
        assert_eq!(session.random_order().len(), 2);
        assert_eq!(session.current_record().question_no, 8);
    }

    #[test]
    fn test_single_record_session() {
        let mut session = Session::with_seed(dataset(&[42]), 3);
        assert!(!session.can_go_prev());
        assert!(!session.can_go_next());
        session.jump_random();
        assert_eq!(session.position(), 0);
        assert_eq!(session.random_order(), &[0]);
    }
}
