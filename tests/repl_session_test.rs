use std::collections::VecDeque;
use std::io::{self, Write};

use tally::config::ReplConfig;
use tally::repl::{Exit, Line, LineSource};
use tally::{CalculationRegistry, Repl};

const BANNER: &str =
    "Welcome to the Professional Calculator REPL!\nType 'help' for instructions or 'exit' to quit.\n\n";
const GOODBYE: &str = "Exiting calculator. Goodbye!\n";

fn run(lines: &[&str], config: ReplConfig) -> (String, Exit) {
    let registry = CalculationRegistry::with_builtins();
    let mut repl = Repl::new(&registry, config);

    let input = lines.iter().map(|line| format!("{line}\n")).collect::<String>();
    let mut output = Vec::new();
    let exit = repl.run(input.as_bytes(), &mut output).unwrap();

    (String::from_utf8(output).unwrap(), exit)
}

/// Strip prompts so transcripts read like the printed lines.
fn transcript(lines: &[&str]) -> String {
    let (out, exit) = run(lines, ReplConfig::default());
    assert_eq!(exit, Exit::Command);
    out.replace(">> ", "")
}

#[test]
fn test_each_operation() {
    let cases = [
        ("add 10 5", "AddCalculation: 10 Add 5 = 15"),
        ("add -1 2.5", "AddCalculation: -1 Add 2.5 = 1.5"),
        ("subtract 10 5", "SubtractCalculation: 10 Subtract 5 = 5"),
        ("subtract -1 2.5", "SubtractCalculation: -1 Subtract 2.5 = -3.5"),
        ("multiply 10 5", "MultiplyCalculation: 10 Multiply 5 = 50"),
        ("multiply -1 2.5", "MultiplyCalculation: -1 Multiply 2.5 = -2.5"),
        ("divide 10 5", "DivideCalculation: 10 Divide 5 = 2"),
        ("divide -1 2.5", "DivideCalculation: -1 Divide 2.5 = -0.4"),
    ];

    for (input, rendered) in cases {
        assert_eq!(
            transcript(&[input, "exit"]),
            format!("{BANNER}Result: {rendered}\n\n{GOODBYE}"),
            "input: {input}"
        );
    }
}

#[test]
fn test_unknown_operation() {
    for op in ["longdivide", "min"] {
        let out = transcript(&[&format!("{op} 9 3"), "exit"]);
        assert!(out.contains(&format!(
            "Unsupported calculation type: '{op}'. Available types: add, divide, multiply, subtract\n"
        )));
        assert!(out.contains("Type 'help' to see the list of supported operations.\n"));
    }
}

#[test]
fn test_wrong_number_of_inputs() {
    for input in ["add 3 4 extra-arg", "add 4 56 5 1_extra extra-arg", "add"] {
        assert_eq!(
            transcript(&[input, "exit"]),
            format!(
                "{BANNER}Invalid input. Please follow the format: <operation> <num1> <num2>\n{GOODBYE}"
            )
        );
    }
}

#[test]
fn test_invalid_number_format() {
    for input in ["add two 7", "add 4 4x"] {
        assert_eq!(
            transcript(&[input, "exit"]),
            format!(
                "{BANNER}Invalid input. Please follow the format: <operation> <num1> <num2>\n\
                 Type 'help' for more information.\n\n{GOODBYE}"
            )
        );
    }
}

#[test]
fn test_division_by_zero() {
    for input in ["divide 8 0", "divide -5.5 0"] {
        assert_eq!(
            transcript(&[input, "exit"]),
            format!("{BANNER}Cannot divide by zero.\nPlease enter a non-zero divisor.\n\n{GOODBYE}")
        );
    }
}

#[test]
fn test_uppercase_operation_name() {
    let out = transcript(&["ADD 2 3", "exit"]);
    assert!(out.contains("Result: AddCalculation: 2 Add 3 = 5\n"));
}

#[test]
fn test_help() {
    let out = transcript(&["help", "exit"]);
    assert!(out.contains("Calculator REPL Help\n--------------------\n"));
    assert!(out.contains("        add       : Adds two numbers.\n"));
    assert!(out.contains("        subtract  : Subtracts the second number from the first.\n"));
    assert!(out.contains("        multiply  : Multiplies two numbers.\n"));
    assert!(out.contains("        divide    : Divides the first number by the second.\n"));
    assert!(out.contains("    history   : Show the history of calculations.\n"));
    assert!(out.ends_with(GOODBYE));
}

#[test]
fn test_history_empty() {
    assert_eq!(
        transcript(&["history", "exit"]),
        format!("{BANNER}No calculations performed yet.\n{GOODBYE}")
    );
}

#[test]
fn test_history_lists_successful_calculations() {
    let out = transcript(&["add 1 2", "divide 1 0", "multiply 3 4", "history", "exit"]);
    assert!(out.contains(
        "Calculation History:\n\
         1. AddCalculation: 1 Add 2 = 3\n\
         2. MultiplyCalculation: 3 Multiply 4 = 12\n"
    ));
}

#[test]
fn test_clear_history() {
    let out = transcript(&["add 1 2", "clear", "history", "exit"]);
    assert!(out.contains("History cleared.\nNo calculations performed yet.\n"));
}

#[test]
fn test_history_limit() {
    let config = ReplConfig {
        history_limit: 1,
        ..ReplConfig::default()
    };
    let (out, _) = run(&["add 1 2", "add 3 4", "history", "exit"], config);
    assert!(out.contains("Calculation History:\n1. AddCalculation: 3 Add 4 = 7\n"));
    assert!(!out.contains("1. AddCalculation: 1 Add 2 = 3"));
}

#[test]
fn test_blank_lines_are_ignored() {
    assert_eq!(
        transcript(&["", "   ", "exit"]),
        format!("{BANNER}{GOODBYE}")
    );
}

#[test]
fn test_eof_without_exit() {
    let (out, exit) = run(&["add 1 1"], ReplConfig::default());
    assert_eq!(exit, Exit::Eof);
    assert!(out.ends_with(">> \nEOF detected. Exiting calculator. Goodbye!\n"));
}

#[test]
fn test_custom_prompt_without_banner() {
    let config = ReplConfig {
        prompt: "calc> ".to_string(),
        show_banner: false,
        history_limit: 0,
    };
    let (out, _) = run(&["exit"], config);
    assert_eq!(out, format!("calc> {GOODBYE}"));
}

/// Replays canned reads the way a line editor would report them.
struct Scripted(VecDeque<Line>);

impl LineSource for Scripted {
    fn next_line(&mut self, prompt: &str, output: &mut dyn Write) -> io::Result<Line> {
        write!(output, "{prompt}")?;
        Ok(self.0.pop_front().unwrap_or(Line::Eof))
    }
}

#[test]
fn test_keyboard_interrupt_exits_after_calculations() {
    let registry = CalculationRegistry::with_builtins();
    let mut repl = Repl::new(&registry, ReplConfig::default());
    let mut source = Scripted(VecDeque::from([
        Line::Text("multiply 7 8".to_string()),
        Line::Interrupted,
        Line::Text("add 1 1".to_string()),
    ]));
    let mut output = Vec::new();

    let exit = repl.run_with(&mut source, &mut output).unwrap();

    assert_eq!(exit, Exit::Interrupted);
    assert_eq!(repl.history().len(), 1);
    assert_eq!(
        String::from_utf8(output).unwrap().replace(">> ", ""),
        format!(
            "{BANNER}Result: MultiplyCalculation: 7 Multiply 8 = 56\n\n\
             \nKeyboard interrupt detected. Exiting calculator. Goodbye!\n"
        )
    );
}

#[test]
fn test_editor_lines_without_newline() {
    let registry = CalculationRegistry::with_builtins();
    let mut repl = Repl::new(&registry, ReplConfig::default());
    let mut source = Scripted(VecDeque::from([
        Line::Text("divide 9 3".to_string()),
        Line::Text("exit".to_string()),
    ]));
    let mut output = Vec::new();

    assert_eq!(repl.run_with(&mut source, &mut output).unwrap(), Exit::Command);
    let out = String::from_utf8(output).unwrap();
    assert!(out.contains("Result: DivideCalculation: 9 Divide 3 = 3\n"));
    assert!(out.ends_with(GOODBYE));
}
