//! Whole games driven through the public session API

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use wordle_assist::core::{Dictionary, Feedback, Word, parse_feedback, score};
use wordle_assist::engine::{GuessSession, SessionConfig, SessionError, SessionState};
use wordle_assist::wordlists::loader::load_dictionary;

fn enter(session: &mut GuessSession, guess: &Word, colors: &[Feedback]) -> SessionState {
    session.select_word(guess).unwrap();
    for (position, &color) in colors.iter().enumerate() {
        session.set_cell_color(position, color).unwrap();
    }
    session.submit_row().unwrap()
}

#[test]
fn honest_feedback_never_loses_the_answer() {
    let dictionary = load_dictionary("embedded", 5).unwrap();
    let mut session = GuessSession::with_dictionary(dictionary);
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..30 {
        session.reset();
        let answer = session.candidates().choose(&mut rng).unwrap().clone();

        let mut state = SessionState::Active;
        while state == SessionState::Active {
            let guess = session.choose_random(&mut rng).unwrap();
            state = enter(&mut session, &guess, &score(&guess, &answer));
            assert!(session.candidates().contains(&answer));
        }

        match state {
            SessionState::Solved => assert_eq!(session.solution(), Some(&answer)),
            SessionState::Exhausted => assert!(session.candidates().len() > 1),
            SessionState::Empty | SessionState::Active => panic!("unexpected {state:?}"),
        }
        assert!(session.game_over());
    }
}

#[test]
fn single_candidate_is_written_into_next_row() {
    let dictionary = Dictionary::from_strs(["crane", "crate", "grate", "irate"], 5).unwrap();
    let mut session = GuessSession::with_dictionary(dictionary);

    let guess = Word::new("crate").unwrap();
    let colors = score(&guess, &Word::new("grate").unwrap());
    assert_eq!(enter(&mut session, &guess, &colors), SessionState::Active);

    let guess = Word::new("irate").unwrap();
    let colors = score(&guess, &Word::new("grate").unwrap());
    assert_eq!(enter(&mut session, &guess, &colors), SessionState::Solved);

    assert!(session.solved());
    assert!(session.game_over());
    assert_eq!(session.rows().len(), 3);
    let last = session.current_row();
    assert_eq!(last.word().unwrap().text(), "GRATE");
    assert!(last.colors().iter().all(|&c| c == Feedback::Correct));
    assert_eq!(
        session.edit_cell('a'),
        Err(SessionError::GameOver),
        "solved session must reject edits"
    );
}

#[test]
fn inconsistent_feedback_empties_the_pool() {
    let dictionary = Dictionary::from_strs(["crane", "slate", "irate"], 5).unwrap();
    let mut session = GuessSession::with_dictionary(dictionary);

    let guess = Word::new("irate").unwrap();
    let state = enter(&mut session, &guess, &parse_feedback("GGGG-").unwrap());
    assert_eq!(state, SessionState::Empty);
    assert!(session.candidates().is_empty());
    assert!(session.game_over());
    assert!(!session.solved());
}

#[test]
fn running_out_of_rows_exhausts() {
    let dictionary = Dictionary::from_strs(["crane", "crate", "grate", "irate"], 5).unwrap();
    let config = SessionConfig {
        word_length: 5,
        num_tries: 2,
    };
    let mut session = GuessSession::new(config, dictionary).unwrap();
    let colors = [Feedback::Absent; 5];

    let guess = Word::new("bumpy").unwrap();
    assert_eq!(enter(&mut session, &guess, &colors), SessionState::Active);
    let guess = Word::new("holly").unwrap();
    assert_eq!(enter(&mut session, &guess, &colors), SessionState::Exhausted);

    assert_eq!(session.rows().len(), 2);
    assert_eq!(session.candidates().len(), 4);
    assert_eq!(session.submit_row(), Err(SessionError::GameOver));
}

#[test]
fn reset_restores_a_fresh_session() {
    let dictionary = Dictionary::from_strs(["crane", "crate", "grate", "irate"], 5).unwrap();
    let mut session = GuessSession::with_dictionary(dictionary.clone());

    let guess = Word::new("crate").unwrap();
    enter(&mut session, &guess, &score(&guess, &Word::new("irate").unwrap()));
    session.edit_cell('x').unwrap();
    session.reset();

    assert_eq!(session.current_row_index(), 0);
    assert_eq!(session.rows().len(), 1);
    assert!(session.current_row().is_empty());
    assert_eq!(session.candidates(), dictionary.words());
    assert!(session.history().is_empty());
    assert!(!session.solved());
    assert!(!session.game_over());
}
