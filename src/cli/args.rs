//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Basic arithmetic calculator: stateless math operations with an operation log
#[derive(Parser, Debug)]
#[command(name = "rscalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -d -d, -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run sample invocations and print the resulting history
    Demo,

    /// Add two numbers (recorded in the history)
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Subtract the second number from the first (recorded in the history)
    Sub {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Multiply two numbers (recorded in the history)
    Mul {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Divide the first number by the second
    Div {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Raise a base to the power of an exponent
    Pow {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },

    /// Remainder of a divided by b (floor-mod convention)
    Mod {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Principal square root
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        n: f64,
    },

    /// Absolute value
    Abs {
        #[arg(allow_negative_numbers = true)]
        n: f64,
    },

    /// Sine of an angle in degrees
    Sin {
        #[arg(allow_negative_numbers = true)]
        angle_degrees: f64,
    },

    /// Cosine of an angle in degrees
    Cos {
        #[arg(allow_negative_numbers = true)]
        angle_degrees: f64,
    },

    /// Exact factorial (fractional input is truncated)
    Fact {
        #[arg(allow_negative_numbers = true)]
        n: f64,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
