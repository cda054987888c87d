use crossterm::event::KeyCode;
use pop_quiz::{
    Control, Quiz, QuizController, QuizPhase, ResultScroll, builtin_questions, handle_key,
};

fn answer_all(quiz: &mut QuizController, pick: impl Fn(usize, usize) -> Option<usize>) {
    let correct: Vec<usize> = quiz.questions().iter().map(|q| q.correct_answer).collect();
    for (index, answer) in correct.into_iter().enumerate() {
        assert_eq!(quiz.phase(), QuizPhase::InProgress);
        if let Some(option) = pick(index, answer) {
            quiz.select_option(option).unwrap();
        }
        quiz.advance();
    }
}

#[test]
fn all_correct_scores_ten() {
    let mut quiz = QuizController::builtin();
    answer_all(&mut quiz, |_, correct| Some(correct));

    assert!(quiz.is_completed());
    assert_eq!(quiz.score(), 10);
}

#[test]
fn no_selections_scores_zero() {
    let mut quiz = QuizController::builtin();
    answer_all(&mut quiz, |_, _| None);

    assert!(quiz.is_completed());
    assert_eq!(quiz.score(), 0);
}

#[test]
fn one_wrong_answer_scores_nine() {
    let mut quiz = QuizController::builtin();
    answer_all(&mut quiz, |index, correct| {
        if index == 0 {
            Some((correct + 1) % 4)
        } else {
            Some(correct)
        }
    });

    assert_eq!(quiz.score(), 9);
}

#[test]
fn completes_on_tenth_advance_only() {
    let mut quiz = QuizController::builtin();
    for _ in 0..9 {
        quiz.advance();
        assert!(!quiz.is_completed());
    }
    quiz.advance();
    assert!(quiz.is_completed());
    quiz.advance();
    assert!(quiz.is_completed());
    assert_eq!(quiz.current_index(), 9);
}

#[test]
fn keyboard_session_reaches_results() {
    let mut quiz = QuizController::builtin();
    let mut scroll = ResultScroll::default();
    let keys: Vec<KeyCode> = builtin_questions()
        .iter()
        .flat_map(|q| {
            let key = char::from_digit(q.correct_answer as u32 + 1, 10).unwrap_or('1');
            [KeyCode::Char(key), KeyCode::Enter]
        })
        .collect();

    for key in keys {
        assert_eq!(handle_key(&mut quiz, &mut scroll, key), Control::Continue);
    }

    assert!(quiz.is_completed());
    assert_eq!(quiz.score(), 10);
    assert_eq!(handle_key(&mut quiz, &mut scroll, KeyCode::Enter), Control::Continue);
    assert_eq!(handle_key(&mut quiz, &mut scroll, KeyCode::Char('q')), Control::Quit);
}

#[test]
fn builtin_quiz_carries_title() {
    let quiz = Quiz::builtin();
    assert_eq!(quiz.title(), "Nepali Pop Culture Quiz");
    assert_eq!(quiz.controller().total_questions(), 10);

    let renamed = Quiz::builtin().with_title("Friday Trivia");
    assert_eq!(renamed.title(), "Friday Trivia");
}
