use flashdeck_core::{
    Action, Dataset, ImageAsset, ImageRole, Key, Mode, QuestionRecord, ScreenView, Session, Step,
    Viewer, parse_records,
};

fn numbered(numbers: &[u32]) -> Vec<QuestionRecord> {
    numbers
        .iter()
        .map(|&n| QuestionRecord::new(n, format!("Question {n}"), format!("Answer {n}")))
        .collect()
}

fn session(numbers: &[u32], seed: u64) -> Session {
    Session::with_seed(Dataset::new(numbered(numbers)).unwrap(), seed)
}

#[test]
fn test_load_sorts_and_resolves_first_record() {
    let json = r#"[
        {"question_no": 2, "question": "two", "answer": "B", "has_images": false, "images": []},
        {"question_no": 1, "question": "one", "answer": "A", "has_images": false, "images": []}
    ]"#;
    let dataset = Dataset::new(parse_records(json).unwrap()).unwrap();
    let order: Vec<u32> = dataset.iter().map(|r| r.question_no).collect();
    assert_eq!(order, vec![1, 2]);

    let session = Session::with_seed(dataset, 42);
    assert_eq!(session.mode(), Mode::Basic);
    assert_eq!(session.position(), 0);
    assert_eq!(session.current_record().question_no, 1);
}

#[test]
fn test_random_order_is_permutation_for_every_load() {
    let numbers: Vec<u32> = (1..=50).rev().collect();
    let mut session = session(&numbers, 0);

    for seed in 0..20u32 {
        let records = numbered(&numbers[..(seed as usize + 1)]);
        let len = records.len();
        session.load(records).unwrap();

        let mut order = session.random_order().to_vec();
        assert_eq!(order.len(), len);
        order.sort_unstable();
        assert_eq!(order, (0..len).collect::<Vec<_>>());
    }
}

#[test]
fn test_navigation_never_leaves_bounds() {
    let mut session = session(&[5, 3, 9, 1], 9);
    let steps = [
        Step::Prev,
        Step::Next,
        Step::Next,
        Step::Next,
        Step::Next,
        Step::Next,
        Step::Prev,
        Step::Prev,
        Step::Prev,
        Step::Prev,
        Step::Prev,
    ];
    for mode in Mode::ALL {
        session.switch_mode(mode);
        for step in steps {
            session.navigate(step);
            assert!(session.position() < session.len());
        }
    }
}

#[test]
fn test_boundary_moves_are_noops() {
    let mut session = session(&[1, 2, 3], 3);
    assert!(!session.navigate(Step::Prev));
    assert_eq!(session.position(), 0);

    session.navigate(Step::Next);
    session.navigate(Step::Next);
    assert_eq!(session.position(), 2);
    assert!(!session.navigate(Step::Next));
    assert_eq!(session.position(), 2);
}

#[test]
fn test_mode_switch_resets_position() {
    let mut session = session(&[1, 2, 3, 4], 1);
    for (from, to) in [
        (Mode::Basic, Mode::Exam),
        (Mode::Exam, Mode::Basic),
        (Mode::Basic, Mode::Basic),
        (Mode::Exam, Mode::Exam),
    ] {
        session.switch_mode(from);
        session.navigate(Step::Next);
        session.navigate(Step::Next);
        assert_eq!(session.position(), 2);
        session.switch_mode(to);
        assert_eq!(session.mode(), to);
        assert_eq!(session.position(), 0);
    }
}

#[test]
fn test_exam_navigation_walks_random_order() {
    let mut session = session(&(1..=30).collect::<Vec<_>>(), 1234);
    session.switch_mode(Mode::Exam);
    let order = session.random_order().to_vec();
    assert_eq!(session.position(), 0);

    // forward through the whole permutation
    for (step, &index) in order.iter().enumerate() {
        assert_eq!(session.position(), step);
        assert_eq!(session.current_record(), &session.dataset()[index]);
        if step + 1 < order.len() {
            assert!(session.navigate(Step::Next));
        }
    }
    assert!(!session.navigate(Step::Next));

    // and back again
    for &index in order.iter().rev().skip(1) {
        assert!(session.navigate(Step::Prev));
        assert_eq!(session.current_record(), &session.dataset()[index]);
    }
    assert_eq!(session.position(), 0);
    assert!(!session.navigate(Step::Prev));

    // the permutation is stable across moves
    assert_eq!(session.random_order(), order.as_slice());
}

#[test]
fn test_jump_random_stays_in_range() {
    let mut session = session(&[1, 2, 3, 4, 5], 77);
    for _ in 0..200 {
        session.jump_random();
        assert!(session.position() < 5);
    }
}

#[test]
fn test_image_partition_rendering() {
    let record = QuestionRecord::new(1, "Look", "There")
        .with_image(ImageAsset::new(ImageRole::Question, Some("png"), "AA=="))
        .with_image(ImageAsset::new(ImageRole::Answer, Some("png"), "QQ=="))
        .with_image(ImageAsset::new(ImageRole::Question, None, "Ug=="));
    let dataset = Dataset::new(vec![record]).unwrap();
    let mut viewer = Viewer::new(Session::with_seed(dataset, 0));

    let view = ScreenView::project(&viewer);
    assert!(view.has_images);
    let ordinals: Vec<usize> = view.question_images.iter().map(|i| i.ordinal).collect();
    assert_eq!(ordinals, vec![1, 2]);
    assert!(view.answer.is_none());

    assert!(viewer.handle_key(Key::Space));
    let view = ScreenView::project(&viewer);
    let answer = view.answer.expect("answer revealed");
    assert_eq!(answer.images.len(), 1);
    assert_eq!(answer.images[0].ordinal, 1);
    assert_eq!(answer.images[0].label, "Answer image 1");

    assert!(viewer.handle_key(Key::Space));
    let view = ScreenView::project(&viewer);
    assert!(view.answer.is_none());
    assert!(viewer.card().answer_images().is_empty());
}

#[test]
fn test_keyboard_session() {
    let dataset = Dataset::new(numbered(&[1, 2, 3])).unwrap();
    let mut viewer = Viewer::new(Session::with_seed(dataset, 8));

    // disabled controls do not consume the key
    assert!(!viewer.handle_key(Key::Left));
    assert!(!viewer.handle_key(Key::Char('r')));
    assert!(!viewer.handle_key(Key::Esc));

    assert!(viewer.handle_key(Key::Right));
    assert_eq!(viewer.session().position(), 1);

    assert!(viewer.handle_key(Key::Char('e')));
    assert_eq!(viewer.session().mode(), Mode::Exam);
    assert_eq!(viewer.session().position(), 0);
    assert!(viewer.handle_key(Key::Char('r')));

    viewer.apply(Action::SwitchMode(Mode::Basic));
    assert!(!viewer.handle_key(Key::Char('R')));
}
