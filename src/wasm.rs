use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::errors::ParseError;
use crate::generator::{self, GeneratorConfig};
use crate::log::init_logger;
use crate::operation::Operation;
use crate::solver::{check_equation, solution_to_string, solve_equation, SolveResult, SolveStatus, SolverError};

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E004", "S002", "WASM001")
    code: String,
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl WasmError {
    fn internal(code: &str, message: String, description: &str) -> Self {
        WasmError {
            code: code.to_string(),
            message,
            description: description.to_string(),
            details: "The result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
    }
}

impl From<&ParseError> for WasmError {
    fn from(e: &ParseError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // for ParseFailure, surface the nested ParseError
        match &e {
            SolverError::ParseFailure(pe) => WasmError::from(pe.as_ref()),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Set up the panic hook and logging. Call once from JavaScript after the module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    puzzle: String,
    /// One line per solution: `9567 + 1085 = 10652 [D→7, …]`
    solutions: Vec<String>,
    /// Letter → digit pairs per solution
    assignments: Vec<Vec<(char, u8)>>,
    status: &'static str,
}

fn status_str(status: SolveStatus) -> &'static str {
    match status {
        SolveStatus::Solved => "solved",
        SolveStatus::Unique => "unique",
        SolveStatus::Ambiguous => "ambiguous",
        SolveStatus::NoSolution => "no_solution",
    }
}

fn result_to_js(result: SolveResult) -> Result<JsValue, JsValue> {
    let solutions = result
        .solutions
        .iter()
        .map(|s| solution_to_string(&result.puzzle, s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(WasmError::from)?;

    let wasm_result = WasmSolveResult {
        puzzle: result.puzzle.to_string(),
        solutions,
        assignments: result.solutions.iter().map(|s| s.iter().collect()).collect(),
        status: status_str(result.status),
    };

    to_value(&wasm_result)
        .map_err(|e| WasmError::internal("WASM002", format!("serialization failed: {e}"), "Failed to serialize result").into())
}

/// JS entry: (input: string) → any one solution
#[wasm_bindgen]
pub fn solve_wasm(input: &str) -> Result<JsValue, JsValue> {
    let result = solve_equation(input).map_err(WasmError::from)?;
    result_to_js(result)
}

/// JS entry: (input: string, max_solutions: number) → up to `max_solutions` solutions and a uniqueness status
#[wasm_bindgen]
pub fn check_wasm(input: &str, max_solutions: usize) -> Result<JsValue, JsValue> {
    let result = check_equation(input, max_solutions).map_err(WasmError::from)?;
    result_to_js(result)
}

#[derive(serde::Serialize)]
struct WasmGeneratedPuzzle {
    equation: String,
    operation: String,
    /// `(word, "d d d")` pairs: equation words first, then the values to decode
    digit_groups: Vec<(String, String)>,
}

/// JS entry: (op: "+" | "-", words: string[]) → a uniquely solvable puzzle, or `null`
#[wasm_bindgen]
pub fn generate_wasm(op: &str, words: JsValue) -> Result<JsValue, JsValue> {
    let operation: Operation = op.parse().map_err(|e: ParseError| WasmError::from(&e))?;

    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Ensure you're passing a valid string array, e.g., ['SEND', 'MORE', 'MONEY']".to_string()),
    })?;
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();

    let mut rng = SmallRng::from_entropy();
    let Some(generated) = generator::generate_puzzle(operation, &refs, &GeneratorConfig::default(), &mut rng) else {
        return Ok(JsValue::NULL);
    };

    let wasm_puzzle = WasmGeneratedPuzzle {
        equation: generated.puzzle.to_string(),
        operation: operation.to_string(),
        digit_groups: generated.digit_groups.into_iter().map(|g| (g.word, g.digits)).collect(),
    };
    to_value(&wasm_puzzle)
        .map_err(|e| WasmError::internal("WASM003", format!("serialization failed: {e}"), "Failed to serialize puzzle").into())
}

/// Generate a debug report for troubleshooting.
///
/// Users copy/paste this when reporting issues: the error message, the
/// equation, the request and environment information.
#[wasm_bindgen]
pub fn get_debug_info(equation: &str, error_message: &str, max_solutions: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String never fails
    let _ = writeln!(&mut report, "=== CRYPTARITHM DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(
        &mut report,
        "Generated: {}",
        js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string())
    );
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Equation: {equation}");
    let _ = writeln!(&mut report, "Max Solutions: {max_solutions}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let _ = writeln!(
            &mut report,
            "Location: {}",
            window.location().href().unwrap_or_else(|_| "unknown".to_string())
        );
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Instructions");
    let _ = writeln!(&mut report, "Please copy this entire report and paste it when reporting the issue.");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
