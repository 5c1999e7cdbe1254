//! Integration tests for the cryptarithm crate.
//!
//! These go through the public API only: parsing an equation, solving it with
//! both solvers, checking uniqueness, and generating puzzles from a word list.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use cryptarithm::backtrack;
use cryptarithm::errors::ParseError;
use cryptarithm::generator::{self, GeneratorConfig};
use cryptarithm::solver::{check_equation, solve_equation, SolveStatus, SolverError};
use cryptarithm::word_list::WordList;
use cryptarithm::{get_unique_solution, has_unique_solution, solve_add_unique, solve_sub_unique};
use cryptarithm::{Assignment, Operation, Puzzle};

const FIXTURE: &str = "tests/fixtures/test_word_list.txt";

/// Well-known puzzles with exactly one solution.
const UNIQUE_PUZZLES: [&str; 7] = [
    "SEND + MORE = MONEY",
    "EAT + THAT = APPLE",
    "TO + GO = OUT",
    "BASE + BALL = GAMES",
    "CROSS + ROADS = DANGER",
    "COUNT - COIN = SNUB",
    "MONEY - MORE = SEND",
];

/// Puzzles with no solution at all.
const UNSOLVABLE_PUZZLES: [&str; 5] = [
    "ABC + ABC = AB",
    "SEVEN - NINE = FOUR",
    "FORTY - TEN = SIXTY",
    "ABC - AB = AB",
    "AB - BA = AC",
];

/// Independent check of an answer: injective, no leading zero, arithmetic holds.
fn assert_valid(puzzle: &Puzzle, a: &Assignment) {
    assert!(a.is_injective(), "{a} reuses a digit");
    for c in puzzle.leading_letters() {
        assert_ne!(a.get(c), Some(0), "leading letter {c} is 0 in {a}");
    }
    let [l, r, res] = puzzle.words().map(|w| a.word_value(w).unwrap());
    assert_eq!(puzzle.operation().apply(l, r), Some(res), "{a} does not satisfy {puzzle}");
}

#[cfg(test)]
mod solve_pipeline {
    use super::*;

    #[test]
    fn test_send_more_money_end_to_end() {
        let result = solve_equation("send + more = money").unwrap();

        assert_eq!(result.status, SolveStatus::Solved);
        let a = &result.solutions[0];
        assert_valid(&result.puzzle, a);
        assert_eq!(result.puzzle.substitute(a).unwrap(), "9567 + 1085 = 10652");
    }

    #[test]
    fn test_every_unique_puzzle_is_solved() {
        for input in UNIQUE_PUZZLES {
            let result = solve_equation(input).unwrap();
            assert_eq!(result.status, SolveStatus::Solved, "{input}");
            assert_valid(&result.puzzle, &result.solutions[0]);
        }
    }

    #[test]
    fn test_ten_letter_puzzle() {
        let result = solve_equation("DONALD + GERALD = ROBERT").unwrap();
        assert_eq!(result.puzzle.letter_count(), 10);
        assert_valid(&result.puzzle, &result.solutions[0]);
        assert_eq!(result.solutions[0].word_value("ROBERT"), Some(723_970));
    }

    #[test]
    fn test_unsolvable_puzzles() {
        for input in UNSOLVABLE_PUZZLES {
            let result = solve_equation(input).unwrap();
            assert_eq!(result.status, SolveStatus::NoSolution, "{input}");
            assert!(result.solutions.is_empty());
        }
    }

    #[test]
    fn test_seeded_backtracking_is_reproducible() {
        let mut rng1 = SmallRng::seed_from_u64(99);
        let mut rng2 = SmallRng::seed_from_u64(99);
        let a = backtrack::solve_with_rng("A", "B", "C", Operation::Add, &mut rng1);
        let b = backtrack::solve_with_rng("A", "B", "C", Operation::Add, &mut rng2);
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod uniqueness {
    use super::*;

    #[test]
    fn test_unique_puzzles_report_unique() {
        for input in UNIQUE_PUZZLES {
            let result = check_equation(input, 5).unwrap();
            assert_eq!(result.status, SolveStatus::Unique, "{input}");
            assert_eq!(result.solutions.len(), 1);
            assert_valid(&result.puzzle, &result.solutions[0]);
        }
    }

    #[test]
    fn test_both_solvers_agree_on_the_answer() {
        for input in UNIQUE_PUZZLES {
            let puzzle: Puzzle = input.parse().unwrap();
            assert_eq!(puzzle.solve(), puzzle.unique_solution(), "{input}");
        }
    }

    #[test]
    fn test_ambiguous_puzzle() {
        let result = check_equation("A + B = C", 2).unwrap();
        assert_eq!(result.status, SolveStatus::Ambiguous);
        assert_eq!(result.solutions.len(), 2);
        for a in &result.solutions {
            assert_valid(&result.puzzle, a);
        }
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(solve_add_unique("SEND", "MORE", "MONEY", 3).len(), 1);
        assert_eq!(solve_sub_unique("NINE", "TEN", "TWO", 10).len(), 4);
        assert!(has_unique_solution("TO", "GO", "OUT", Operation::Add));
        assert!(get_unique_solution("A", "B", "C", Operation::Add).is_none());
        assert!(!has_unique_solution("ABCDEF", "GHIJK", "LMNOP", Operation::Add));
    }
}

#[cfg(test)]
mod error_cases {
    use super::*;

    #[test]
    fn test_parse_errors_carry_codes() {
        let cases = [
            ("", "E002"),
            ("S3ND + MORE = MONEY", "E003"),
            ("SEND * MORE = MONEY", "E004"),
            ("SEND + MORE MONEY", "E006"),
        ];
        for (input, code) in cases {
            match solve_equation(input) {
                Err(SolverError::ParseFailure(pe)) => assert_eq!(pe.code(), code, "{input}"),
                other => panic!("{input}: expected ParseFailure, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_too_many_letters() {
        let err = check_equation("ABCDEF + GHIJK = LMNOP", 2).unwrap_err();
        assert_eq!(err.code(), "S002");
        assert!(err.display_detailed().contains("16"));
    }

    #[test]
    fn test_word_too_long() {
        let input = format!("{} + B = C", "A".repeat(19));
        match *input.parse::<Puzzle>().unwrap_err() {
            ParseError::WordTooLong { len: 19, .. } => {}
            e => panic!("expected WordTooLong, got {e:?}"),
        }
    }
}

#[cfg(test)]
mod generation {
    use super::*;

    #[test]
    fn test_load_fixture_word_list() {
        let list = WordList::load_from_path(FIXTURE, 45).unwrap();
        assert_eq!(list.words, vec!["END", "MORE", "NODE", "NOSE", "ONES", "QUIZ", "SEND", "MONEY"]);
    }

    #[test]
    fn test_generate_from_fixture() {
        let list = WordList::load_from_path(FIXTURE, 45).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let generated = generator::generate_puzzle(Operation::Add, &list.as_strs(), &GeneratorConfig::default(), &mut rng)
            .expect("SEND + MORE = MONEY is in the list");

        assert!(generated.puzzle.has_unique_solution());
        assert_valid(&generated.puzzle, &generated.solution);

        let words = generated.solution_words();
        assert!((3..=5).contains(&words.len()));
        for (group, word) in generated.digit_groups.iter().zip(generated.puzzle.words().into_iter().chain(words)) {
            assert_eq!(group.word, word);
            let spelled: Vec<String> = generated.solution.spell(word).unwrap().iter().map(u8::to_string).collect();
            assert_eq!(group.digits, spelled.join(" "));
        }
    }

    #[test]
    fn test_generated_puzzle_round_trips_through_text() {
        let list = WordList::load_from_path(FIXTURE, 0).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let generated = generator::generate_puzzle(Operation::Sub, &list.as_strs(), &GeneratorConfig::default(), &mut rng)
            .expect("MONEY - MORE = SEND is in the list");

        let result = check_equation(&generated.puzzle.to_string(), 2).unwrap();
        assert_eq!(result.status, SolveStatus::Unique);
        assert_eq!(result.solutions[0], generated.solution);
    }
}
