use rstest::{fixture, rstest};
use tracing::debug;

use rscalc::util::testing;
use rscalc::{CalcResult, Calculator};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn calc() -> Calculator {
    Calculator::new()
}

#[rstest]
fn test_history_starts_empty(calc: Calculator) {
    assert!(calc.get_history().is_empty());
}

#[rstest]
fn test_recorded_operations_append_one_entry_each(mut calc: Calculator) {
    calc.add(5.0, 3.0);
    assert_eq!(calc.get_history().len(), 1);
    calc.subtract(10.0, 4.0);
    assert_eq!(calc.get_history().len(), 2);
    calc.multiply(6.0, 7.0);
    assert_eq!(calc.get_history().len(), 3);
}

#[rstest]
fn test_history_entries_match_expression_format(mut calc: Calculator) {
    calc.add(5.0, 3.0);
    calc.subtract(10.0, 4.0);
    calc.multiply(6.0, 7.0);
    debug!("history: {:?}", calc.get_history());
    assert_eq!(
        calc.get_history(),
        ["5 + 3 = 8", "10 - 4 = 6", "6 * 7 = 42"]
    );
}

#[rstest]
fn test_history_preserves_call_order(mut calc: Calculator) {
    calc.multiply(2.0, 2.0);
    calc.add(1.0, 1.0);
    assert_eq!(calc.get_history(), ["2 * 2 = 4", "1 + 1 = 2"]);
}

#[rstest]
fn test_non_recorded_operations_never_touch_history(mut calc: Calculator) -> CalcResult<()> {
    calc.add(1.0, 1.0);
    let len_before = calc.get_history().len();

    calc.divide(20.0, 4.0)?;
    calc.power(2.0, 8.0);
    calc.modulo(17.0, 5.0)?;
    calc.square_root(144.0)?;
    calc.absolute(-42.0);
    calc.sin(30.0);
    calc.cos(60.0);
    calc.factorial(5.0)?;
    // failed operations must not record either
    let _ = calc.divide(1.0, 0.0);
    let _ = calc.factorial(-1.0);

    assert_eq!(calc.get_history().len(), len_before);
    Ok(())
}

#[rstest]
fn test_clear_history_empties_the_log(mut calc: Calculator) {
    calc.add(5.0, 3.0);
    calc.multiply(6.0, 7.0);
    calc.clear_history();
    assert!(calc.get_history().is_empty());
}

#[rstest]
fn test_recording_resumes_from_empty_after_clear(mut calc: Calculator) {
    calc.add(5.0, 3.0);
    calc.clear_history();
    calc.subtract(10.0, 4.0);
    assert_eq!(calc.get_history(), ["10 - 4 = 6"]);
}

#[rstest]
fn test_get_history_is_idempotent(mut calc: Calculator) {
    calc.add(5.0, 3.0);
    let first: Vec<String> = calc.get_history().to_vec();
    let second: Vec<String> = calc.get_history().to_vec();
    assert_eq!(first, second);
}

#[rstest]
fn test_fractional_operands_keep_their_display_form(mut calc: Calculator) {
    calc.multiply(1.5, 2.0);
    assert_eq!(calc.get_history(), ["1.5 * 2 = 3"]);
}
