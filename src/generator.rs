//! Puzzle generation: pick three words from a word list that form a
//! cryptarithm with exactly one solution, plus a few extra "values to decode"
//! words spelled with the same letters.
//!
//! # Examples
//!
//! ```
//! use cryptarithm::generator::{self, GeneratorConfig};
//! use cryptarithm::Operation;
//! use rand::SeedableRng;
//!
//! let words = ["SEND", "MORE", "MONEY", "END", "DYE", "NOSE"];
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
//! let generated = generator::generate_puzzle(Operation::Add, &words, &GeneratorConfig::default(), &mut rng);
//! assert!(generated.is_some());
//! ```

use instant::Instant;
use log::{debug, info};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::assignment::Assignment;
use crate::letters::{fits_in_digits, PuzzleChar};
use crate::operation::Operation;
use crate::puzzle::Puzzle;

// The amount of time (in seconds) a generation run may take
const TIME_BUDGET: u64 = 30;

/// Knobs for [`generate_puzzle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Lengths of the three equation words.
    pub word_lengths: RangeInclusive<usize>,
    /// Random triples tried after the enumerated ones; capped at `MAX_ATTEMPTS_CAP`.
    pub max_attempts: usize,
    /// How many shuffled candidates the enumeration phase draws from.
    pub search_limit: usize,
    /// Most triples the enumeration phase keeps.
    pub max_combinations: usize,
    pub min_solution_words: usize,
    pub max_solution_words: usize,
    pub time_budget: Duration,
}

/// Hard ceiling on `max_attempts`.
pub const MAX_ATTEMPTS_CAP: usize = 100_000;

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            word_lengths: 3..=8,
            max_attempts: MAX_ATTEMPTS_CAP,
            search_limit: 100,
            max_combinations: 500,
            min_solution_words: 3,
            max_solution_words: 5,
            time_budget: Duration::from_secs(TIME_BUDGET),
        }
    }
}

/// A word with the digits it encodes, e.g. `MORE` → `"1 0 8 5"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGroup {
    pub word: String,
    pub digits: String,
}

impl DigitGroup {
    fn new(word: &str, solution: &Assignment) -> Option<Self> {
        let digits: Vec<String> = solution.spell(word)?.iter().map(u8::to_string).collect();
        Some(DigitGroup { word: word.to_string(), digits: digits.join(" ") })
    }
}

impl fmt::Display for DigitGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.digits, self.word)
    }
}

/// A uniquely solvable puzzle, its answer, and the digit groups for the
/// three equation words followed by the extra solution words.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    pub puzzle: Puzzle,
    pub solution: Assignment,
    pub digit_groups: Vec<DigitGroup>,
}

impl GeneratedPuzzle {
    /// The extra words (everything after the three equation words).
    #[must_use]
    pub fn solution_words(&self) -> Vec<&str> {
        self.digit_groups.iter().skip(3).map(|g| g.word.as_str()).collect()
    }
}

/// Simple helper to enforce a wall-clock time limit.
struct TimeBudget {
    start: Instant,  // when the budget began
    limit: Duration, // maximum allowed elapsed time
}

impl TimeBudget {
    fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

macro_rules! timed_stop {
    ($budget:expr) => {
        if $budget.expired() {
            info!("generator: time budget of {:?} exhausted", $budget.limit);
            return None;
        }
    };
}

/// Word lengths that can possibly balance.
///
/// Addition: the result is as long as the longer operand, or one longer.
/// Subtraction: the minuend is at least as long as both other words.
#[must_use]
pub fn lengths_fit(w1: &str, w2: &str, w3: &str, operation: Operation) -> bool {
    let (l1, l2, l3) = (w1.len(), w2.len(), w3.len());
    match operation {
        Operation::Add => {
            let longest = l1.max(l2);
            l3 == longest || l3 == longest + 1
        }
        Operation::Sub => l1 >= l2 && l3 <= l1,
    }
}

/// Cheap screen run before any search: three distinct, non-empty,
/// letters-only words whose lengths fit the operation.
///
/// Words are compared case-insensitively, since the puzzle uppercases them.
#[must_use]
pub fn is_plausible(w1: &str, w2: &str, w3: &str, operation: Operation) -> bool {
    let words = [w1, w2, w3];
    words.iter().all(|w| !w.is_empty() && w.chars().all(|c| c.is_puzzle_letter()))
        && !w1.eq_ignore_ascii_case(w2)
        && !w1.eq_ignore_ascii_case(w3)
        && !w2.eq_ignore_ascii_case(w3)
        && lengths_fit(w1, w2, w3, operation)
}

/// Ordered triples of distinct candidates whose lengths fit, shuffled.
fn plausible_combinations<'w, R: Rng + ?Sized>(
    candidates: &[&'w str],
    operation: Operation,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<[&'w str; 3]> {
    let limit = candidates.len().min(config.search_limit);
    let mut combinations = Vec::new();

    'outer: for i in 0..limit {
        for j in 0..limit {
            if i == j {
                continue;
            }
            for k in 0..limit {
                if k == i || k == j {
                    continue;
                }
                let triple = [candidates[i], candidates[j], candidates[k]];
                if lengths_fit(triple[0], triple[1], triple[2], operation) {
                    combinations.push(triple);
                }
                if combinations.len() >= config.max_combinations {
                    break 'outer;
                }
            }
        }
    }

    combinations.shuffle(rng);
    combinations
}

/// Build a full puzzle from `w1 op w2 = w3` if it has exactly one solution
/// and enough extra words from `words` can be spelled with its letters.
pub fn try_generate_equation<R: Rng + ?Sized>(
    w1: &str,
    w2: &str,
    w3: &str,
    operation: Operation,
    words: &[&str],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<GeneratedPuzzle> {
    if !is_plausible(w1, w2, w3, operation) {
        return None;
    }
    let puzzle = Puzzle::new(w1, w2, w3, operation).ok()?;
    let solution = puzzle.unique_solution()?;
    if !puzzle.is_satisfied_by(&solution) {
        debug!("generator: {puzzle} answer {solution} does not verify");
        return None;
    }

    let letters: HashSet<char> = puzzle.letters().into_iter().collect();
    let wanted = rng.gen_range(config.min_solution_words..=config.max_solution_words.max(config.min_solution_words));
    debug!("generator: looking for {wanted} solution words for {puzzle}");

    let mut pool: Vec<String> = words.iter().map(|w| w.to_ascii_uppercase()).collect();
    pool.shuffle(rng);

    let mut solution_words: Vec<String> = Vec::with_capacity(wanted);
    for word in pool {
        if solution_words.len() >= wanted {
            break;
        }
        if word.len() < 2 || puzzle.words().contains(&word.as_str()) || solution_words.contains(&word) {
            continue;
        }
        if word.chars().all(|c| letters.contains(&c)) {
            solution_words.push(word);
        }
    }

    if solution_words.len() < config.min_solution_words {
        debug!(
            "generator: {puzzle}: found {} solution words, needed {}",
            solution_words.len(),
            config.min_solution_words
        );
        return None;
    }

    let digit_groups = puzzle
        .words()
        .into_iter()
        .chain(solution_words.iter().map(String::as_str))
        .map(|word| DigitGroup::new(word, &solution))
        .collect::<Option<Vec<_>>>()?;

    Some(GeneratedPuzzle { puzzle, solution, digit_groups })
}

/// Search `words` for a uniquely solvable `op` puzzle.
///
/// Enumerated length-compatible triples are tried first, then random triples,
/// until one succeeds, the attempts run out, or the time budget expires.
pub fn generate_puzzle<R: Rng + ?Sized>(
    operation: Operation,
    words: &[&str],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<GeneratedPuzzle> {
    let budget = TimeBudget::new(config.time_budget);

    // screen the same uppercase words `Puzzle::new` builds from
    let normalized: Vec<String> = words.iter().map(|w| w.to_ascii_uppercase()).collect();
    let mut candidates: Vec<&str> = normalized
        .iter()
        .map(String::as_str)
        .filter(|w| config.word_lengths.contains(&w.len()))
        .collect();
    candidates.sort_unstable();
    candidates.dedup();
    if candidates.len() < 3 {
        info!("generator: only {} candidate words, need at least 3", candidates.len());
        return None;
    }
    candidates.shuffle(rng);

    let max_attempts = config.max_attempts.min(MAX_ATTEMPTS_CAP);
    let attempt = |triple: [&str; 3], rng: &mut R| -> Option<GeneratedPuzzle> {
        let [w1, w2, w3] = triple;
        if !is_plausible(w1, w2, w3, operation) || !fits_in_digits(&triple) {
            return None;
        }
        try_generate_equation(w1, w2, w3, operation, words, config, rng)
    };

    let combinations = plausible_combinations(&candidates, operation, config, &mut *rng);
    debug!("generator: {} enumerated combinations", combinations.len());
    for triple in combinations.into_iter().take(max_attempts) {
        timed_stop!(budget);
        if let Some(generated) = attempt(triple, &mut *rng) {
            info!("generator: {} after {:?}", generated.puzzle, budget.elapsed());
            return Some(generated);
        }
    }

    for _ in 0..max_attempts {
        timed_stop!(budget);
        let picked = index::sample(rng, candidates.len(), 3);
        let triple = [candidates[picked.index(0)], candidates[picked.index(1)], candidates[picked.index(2)]];
        if let Some(generated) = attempt(triple, &mut *rng) {
            info!("generator: {} after {:?}", generated.puzzle, budget.elapsed());
            return Some(generated);
        }
    }

    info!("generator: no unique {operation} puzzle among {} candidates", candidates.len());
    None
}
