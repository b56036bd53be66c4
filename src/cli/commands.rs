use std::io;

use clap::{Command, CommandFactory};
use clap_complete::{generate, Generator};
use tracing::{debug, instrument};

use crate::calculator::Calculator;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo) | None => _demo(),
        Some(Commands::Add { a, b }) => _add(*a, *b),
        Some(Commands::Sub { a, b }) => _sub(*a, *b),
        Some(Commands::Mul { a, b }) => _mul(*a, *b),
        Some(Commands::Div { a, b }) => _div(*a, *b),
        Some(Commands::Pow { base, exponent }) => _pow(*base, *exponent),
        Some(Commands::Mod { a, b }) => _modulo(*a, *b),
        Some(Commands::Sqrt { n }) => _sqrt(*n),
        Some(Commands::Abs { n }) => _abs(*n),
        Some(Commands::Sin { angle_degrees }) => _sin(*angle_degrees),
        Some(Commands::Cos { angle_degrees }) => _cos(*angle_degrees),
        Some(Commands::Fact { n }) => _fact(*n),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

#[instrument]
fn _add(a: f64, b: f64) -> CliResult<()> {
    let mut calc = Calculator::new();
    output::info(&calc.add(a, b));
    Ok(())
}

#[instrument]
fn _sub(a: f64, b: f64) -> CliResult<()> {
    let mut calc = Calculator::new();
    output::info(&calc.subtract(a, b));
    Ok(())
}

#[instrument]
fn _mul(a: f64, b: f64) -> CliResult<()> {
    let mut calc = Calculator::new();
    output::info(&calc.multiply(a, b));
    Ok(())
}

#[instrument]
fn _div(a: f64, b: f64) -> CliResult<()> {
    let calc = Calculator::new();
    output::info(&calc.divide(a, b)?);
    Ok(())
}

#[instrument]
fn _pow(base: f64, exponent: f64) -> CliResult<()> {
    let calc = Calculator::new();
    output::info(&calc.power(base, exponent));
    Ok(())
}

#[instrument]
fn _modulo(a: f64, b: f64) -> CliResult<()> {
    let calc = Calculator::new();
    output::info(&calc.modulo(a, b)?);
    Ok(())
}

#[instrument]
fn _sqrt(n: f64) -> CliResult<()> {
    let calc = Calculator::new();
    output::info(&calc.square_root(n)?);
    Ok(())
}

#[instrument]
fn _abs(n: f64) -> CliResult<()> {
    let calc = Calculator::new();
    output::info(&calc.absolute(n));
    Ok(())
}

#[instrument]
fn _sin(angle_degrees: f64) -> CliResult<()> {
    let calc = Calculator::new();
    output::info(&calc.sin(angle_degrees));
    Ok(())
}

#[instrument]
fn _cos(angle_degrees: f64) -> CliResult<()> {
    let calc = Calculator::new();
    output::info(&calc.cos(angle_degrees));
    Ok(())
}

#[instrument]
fn _fact(n: f64) -> CliResult<()> {
    let calc = Calculator::new();
    output::info(&calc.factorial(n)?);
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    print_completions(shell, &mut cmd);
    Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Sample invocations against a single calculator instance, history included.
/// Demonstration only, not part of the library contract.
#[instrument]
fn _demo() -> CliResult<()> {
    let mut calc = Calculator::new();
    debug!("running demonstration routine");

    output::header("Basic Operations:");
    output::result("Addition       5 + 3", &calc.add(5.0, 3.0));
    output::result("Subtraction   10 - 4", &calc.subtract(10.0, 4.0));
    output::result("Multiplication 6 * 7", &calc.multiply(6.0, 7.0));
    output::result("Division      20 / 4", &calc.divide(20.0, 4.0)?);

    output::header("Advanced Operations:");
    output::result("Power          2 ^ 8", &calc.power(2.0, 8.0));
    output::result("Modulo        17 % 5", &calc.modulo(17.0, 5.0)?);
    output::result("Square Root     √144", &calc.square_root(144.0)?);
    output::result("Absolute       |-42|", &calc.absolute(-42.0));

    output::header("Trigonometry & Special:");
    output::result("Sin(30 deg)", &format!("{:.4}", calc.sin(30.0)));
    output::result("Cos(60 deg)", &format!("{:.4}", calc.cos(60.0)));
    output::result("Factorial(5)", &calc.factorial(5.0)?);

    output::header("Calculation History:");
    for (i, entry) in calc.get_history().iter().enumerate() {
        output::detail(&format!("{}. {}", i + 1, entry));
    }

    Ok(())
}
