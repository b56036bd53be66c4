//! Calculator entity: the operation set and its history-recording contract.

use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// A stateless-operation calculator with an append-only operation log.
///
/// All operations are pure with respect to their inputs. Three of them
/// (`add`, `subtract`, `multiply`) additionally append a human-readable
/// `"expression = result"` record to the history; the remaining operations
/// never touch it. This asymmetry is part of the observed contract and is
/// preserved deliberately.
///
/// The history lives and dies with the owning value: it starts empty, grows
/// only through the three recorded operations, and is emptied only by
/// [`clear_history`](Calculator::clear_history). Nothing is persisted.
#[derive(Debug, Default)]
pub struct Calculator {
    history: Vec<String>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `"expression = result"` to the history, pass the result through.
    fn record(&mut self, expression: String, result: f64) -> f64 {
        let entry = format!("{} = {}", expression, result);
        debug!("recording: {}", entry);
        self.history.push(entry);
        result
    }

    /// Add two numbers. Recorded in the history.
    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = a + b;
        self.record(format!("{} + {}", a, b), result)
    }

    /// Subtract the second number from the first. Recorded in the history.
    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        let result = a - b;
        self.record(format!("{} - {}", a, b), result)
    }

    /// Multiply two numbers. Recorded in the history.
    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = a * b;
        self.record(format!("{} * {}", a, b), result)
    }

    /// Divide `a` by `b` (real-valued division). Not recorded.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidArgument`] when `b` is zero.
    pub fn divide(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::InvalidArgument(
                "cannot divide by zero".to_string(),
            ));
        }
        Ok(a / b)
    }

    /// Raise `base` to the power of `exponent`. Not recorded.
    ///
    /// No domain validation is performed: a negative base with a fractional
    /// exponent yields NaN per IEEE-754 semantics of [`f64::powf`].
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    /// Remainder of `a` divided by `b`, floor-mod convention. Not recorded.
    ///
    /// The result takes the sign of the divisor, matching `a % b` in Python
    /// rather than Rust's truncating `%`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidArgument`] when `b` is zero.
    pub fn modulo(&self, a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::InvalidArgument(
                "cannot modulo by zero".to_string(),
            ));
        }
        Ok(a - b * (a / b).floor())
    }

    /// Principal non-negative square root of `n`. Not recorded.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidArgument`] when `n` is negative.
    pub fn square_root(&self, n: f64) -> CalcResult<f64> {
        if n < 0.0 {
            return Err(CalcError::InvalidArgument(
                "cannot calculate square root of negative number".to_string(),
            ));
        }
        Ok(n.sqrt())
    }

    /// Absolute value of `n`. Not recorded.
    pub fn absolute(&self, n: f64) -> f64 {
        n.abs()
    }

    /// Sine of an angle given in degrees. Not recorded.
    pub fn sin(&self, angle_degrees: f64) -> f64 {
        angle_degrees.to_radians().sin()
    }

    /// Cosine of an angle given in degrees. Not recorded.
    pub fn cos(&self, angle_degrees: f64) -> f64 {
        angle_degrees.to_radians().cos()
    }

    /// Exact factorial of `n`. Not recorded.
    ///
    /// The sign check applies to the raw input; a nonnegative fractional
    /// input is then truncated toward zero, matching the convention of
    /// converting to an integer type before the computation.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidArgument`] when the input is not finite,
    /// when the raw input is negative, or when the exact result exceeds the
    /// `u128` range (n > 34).
    pub fn factorial(&self, n: f64) -> CalcResult<u128> {
        if !n.is_finite() {
            return Err(CalcError::InvalidArgument(
                "factorial requires a finite number".to_string(),
            ));
        }
        if n < 0.0 {
            return Err(CalcError::InvalidArgument(
                "factorial not defined for negative numbers".to_string(),
            ));
        }
        let n = n.trunc() as u128;
        let mut result: u128 = 1;
        for k in 2..=n {
            result = result.checked_mul(k).ok_or_else(|| {
                CalcError::InvalidArgument(format!("factorial of {} exceeds u128 range", n))
            })?;
        }
        Ok(result)
    }

    /// Read-only view of the recorded entries, in call order.
    pub fn get_history(&self) -> &[String] {
        &self.history
    }

    /// Empty the recorded entries.
    pub fn clear_history(&mut self) {
        debug!("clearing {} history entries", self.history.len());
        self.history.clear();
    }
}
