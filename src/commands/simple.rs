//! Simple interactive CLI mode
//!
//! Line-based front end without TUI. Reads a guess and its colors, submits
//! the row and prints what is left.

use crate::core::{Dictionary, Feedback, Word, WordError, parse_feedback};
use crate::engine::GuessSession;
use crate::output::{write_candidates, write_rows};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Candidates printed after each submitted row
const CANDIDATE_LIMIT: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    New,
    List,
    Random,
}

impl Command {
    fn parse(text: &str) -> Option<Self> {
        match text.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New),
            "list" | "l" => Some(Self::List),
            "random" | "r" => Some(Self::Random),
            _ => None,
        }
    }
}

/// What a line typed at the guess prompt means
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Command(Command),
    Guess { word: Word, known: bool },
    Invalid(WordError),
}

impl Entry {
    /// A `:` prefix always means a command. Without it, anything that is a
    /// well-formed guess is a guess, so command words stay guessable.
    fn parse(line: &str, dictionary: &Dictionary) -> Self {
        if let Some(name) = line.strip_prefix(':')
            && let Some(command) = Command::parse(name)
        {
            return Self::Command(command);
        }
        match dictionary.lookup(line) {
            Ok(Some(word)) => Self::Guess {
                word: word.clone(),
                known: true,
            },
            Ok(None) => match Word::with_length(line, dictionary.word_length()) {
                Ok(word) => Self::Guess { word, known: false },
                Err(err) => Self::Invalid(err),
            },
            Err(err) => Command::parse(line).map_or(Self::Invalid(err), Self::Command),
        }
    }
}

/// Run the simple interactive CLI mode until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn run_simple<R, W, G>(
    session: &mut GuessSession,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    write_banner(out)?;
    let word_length = session.config().word_length;

    loop {
        if session.game_over() {
            if let Some(word) = session.solution() {
                writeln!(out, "\nSolution: {}\n", word.text().bright_green().bold())?;
            }
            let Some(line) = prompt(input, out, "Command (new/quit)")? else {
                break;
            };
            match Command::parse(line.strip_prefix(':').unwrap_or(&line)) {
                Some(Command::Quit) => break,
                Some(Command::New) => new_game(session, out)?,
                _ => writeln!(out, "Type 'new' or 'quit'.")?,
            }
            continue;
        }

        let label = format!(
            "Guess {} of {}",
            session.current_row_index() + 1,
            session.config().num_tries
        );
        let Some(line) = prompt(input, out, &label)? else {
            break;
        };

        let guess = match Entry::parse(&line, session.dictionary()) {
            Entry::Command(Command::Quit) => break,
            Entry::Command(Command::New) => {
                new_game(session, out)?;
                continue;
            }
            Entry::Command(Command::List) => {
                write_candidates(out, session, None)?;
                continue;
            }
            Entry::Command(Command::Random) => match session.choose_random(rng) {
                Ok(word) => {
                    writeln!(out, "Picked {}", word.text().bright_white().bold())?;
                    word
                }
                Err(err) => {
                    writeln!(out, "{}", err.to_string().red())?;
                    continue;
                }
            },
            Entry::Guess { word, known } => {
                if !known {
                    writeln!(out, "{}", format!("{word} is not in the word list").yellow())?;
                }
                word
            }
            Entry::Invalid(err) => {
                writeln!(out, "{}", err.to_string().red())?;
                continue;
            }
        };

        session.select_word(&guess)?;

        let Some(colors) = read_colors(input, out, word_length)? else {
            break;
        };
        for (position, color) in colors.into_iter().enumerate() {
            session.set_cell_color(position, color)?;
        }
        session.submit_row()?;

        writeln!(out)?;
        write_rows(out, session)?;
        write_candidates(out, session, Some(CANDIDATE_LIMIT))?;
        writeln!(out)?;
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(())
}

fn write_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Wordle Assist - Simple Mode".bright_cyan().bold())?;
    writeln!(out, "Enter each guess, then its colors:")?;
    writeln!(out, "  - G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - -/_/⬜ for gray (not in word)")?;
    writeln!(
        out,
        "Commands: 'random' to pick a candidate, 'list', 'new', 'quit'"
    )?;
    writeln!(
        out,
        "Prefix a command with ':' when it is also a word you want to guess\n"
    )?;
    Ok(())
}

fn new_game<W: Write>(session: &mut GuessSession, out: &mut W) -> Result<()> {
    session.reset();
    writeln!(out, "\nNew game started.\n")?;
    Ok(())
}

fn read_colors<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    word_length: usize,
) -> Result<Option<Vec<Feedback>>> {
    loop {
        let Some(line) = prompt(input, out, "Colors")? else {
            return Ok(None);
        };
        match parse_feedback(&line) {
            Some(colors) if colors.len() == word_length => return Ok(Some(colors)),
            _ => writeln!(
                out,
                "{}",
                format!("Enter {word_length} colors using G, Y and -").red()
            )?,
        }
    }
}

/// Read one trimmed line, or `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(script: &str) -> (GuessSession, String) {
        run_with(
            &["crane", "crate", "grate", "irate", "slate", "their", "ocean"],
            5,
            script,
        )
    }

    fn run_with(words: &[&str], word_length: usize, script: &str) -> (GuessSession, String) {
        colored::control::set_override(false);
        let dictionary = Dictionary::from_strs(words.iter().copied(), word_length).unwrap();
        let mut session = GuessSession::with_dictionary(dictionary);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);

        run_simple(&mut session, &mut input, &mut out, &mut rng).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn guess_and_colors_narrow_pool() {
        let (session, out) = run("crate\n-GGGG\nquit\n");
        assert!(out.contains("2 POSSIBLE WORDS"));
        assert!(out.contains("GRATE  IRATE"));
        assert_eq!(session.candidates().len(), 2);
        assert!(out.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn solving_prints_solution_then_new_game() {
        let (session, out) = run("crate\n-GGGG\ngrate\nGGGGG\nnew\nquit\n");
        assert!(out.contains("SOLVED"));
        assert!(out.contains("Solution: GRATE"));
        assert!(out.contains("New game started."));
        assert_eq!(session.candidates().len(), 7);
    }

    #[test]
    fn bad_colors_are_asked_again() {
        let (session, out) = run("crane\nGG\nGGXGG\n-----\n");
        assert_eq!(out.matches("Enter 5 colors using G, Y and -").count(), 2);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn bad_guess_is_rejected() {
        let (session, out) = run("cranes\nquit\n");
        assert!(out.contains("exactly 5 letters, got 6"));
        assert!(session.history().is_empty());
    }

    #[test]
    fn unknown_word_is_allowed_with_note() {
        let (session, out) = run("xylyl\n-----\n");
        assert!(out.contains("XYLYL is not in the word list"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn random_picks_a_candidate() {
        let (session, out) = run("random\n");
        assert!(out.contains("Picked "));
        let word = session.current_row().word().unwrap();
        assert!(session.candidates().contains(&word));
    }

    #[test]
    fn list_shows_every_candidate() {
        let (_, out) = run("list\n");
        assert!(out.contains("7 POSSIBLE WORDS"));
        assert!(out.contains("THEIR"));
    }

    #[test]
    fn command_words_of_guess_length_are_guesses() {
        let (session, out) = run_with(&["list", "lost", "mist"], 4, "list\nGGGG\n");
        assert!(!out.contains("not in the word list"));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].guess.text(), "LIST");
        assert_eq!(session.solution().map(Word::text), Some("LIST"));
    }

    #[test]
    fn colon_prefix_forces_a_command() {
        let (session, out) = run_with(&["list", "lost", "mist"], 4, ":list\n:quit\n");
        assert!(out.contains("3 POSSIBLE WORDS"));
        assert!(session.history().is_empty());
        assert!(out.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn entry_parsing() {
        let dictionary = Dictionary::from_strs(["list", "lost"], 4).unwrap();
        let word = |t: &str| Word::new(t).unwrap();

        assert_eq!(
            Entry::parse("list", &dictionary),
            Entry::Guess {
                word: word("list"),
                known: true
            }
        );
        assert_eq!(
            Entry::parse("quit", &dictionary),
            Entry::Guess {
                word: word("quit"),
                known: false
            }
        );
        assert_eq!(Entry::parse(":quit", &dictionary), Entry::Command(Command::Quit));
        assert_eq!(Entry::parse("random", &dictionary), Entry::Command(Command::Random));
        assert_eq!(Entry::parse("n", &dictionary), Entry::Command(Command::New));
        assert!(matches!(
            Entry::parse("lists", &dictionary),
            Entry::Invalid(WordError::InvalidLength { .. })
        ));
    }
}
