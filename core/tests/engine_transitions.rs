// Engine state-machine transitions.
//
// These tests drive the public operation surface (digits, decimal, operator,
// compute, delete, clear) and check the display projection after each step:
// - operand entry with leading-zero collapse and single decimal point
// - operator capture and the pending-expression line
// - left-to-right chaining with no operator precedence
// - the reset flag separating a stale result from fresh entry
//
// Division-by-zero behavior lives in error_display.rs; keyboard mapping in
// key_events.rs.

use libcalc_core::{CalculatorEngine, Operator};

fn type_digits(engine: &mut CalculatorEngine, digits: &str) {
    for d in digits.chars() {
        engine.append_digit(d);
    }
}

#[test]
fn initial_projection() {
    let engine = CalculatorEngine::new();
    let frame = engine.display();
    assert_eq!(frame.current, "0");
    assert_eq!(frame.pending, "");
    assert!(!frame.has_pending());
}

#[test]
fn leading_zeros_collapse() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "005");
    assert_eq!(engine.display().current, "5");
}

#[test]
fn decimal_is_idempotent_per_operand() {
    let mut engine = CalculatorEngine::new();
    engine.append_decimal();
    engine.append_decimal();
    assert_eq!(engine.display().current, "0.");

    type_digits(&mut engine, "25");
    engine.append_decimal();
    assert_eq!(engine.display().current, "0.25");
}

#[test]
fn typed_decimal_number() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "3");
    engine.append_decimal();
    type_digits(&mut engine, "14");
    assert_eq!(engine.display().current, "3.14");
}

#[test]
fn delete_settles_at_zero() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "42");
    engine.delete();
    assert_eq!(engine.display().current, "4");
    engine.delete();
    assert_eq!(engine.display().current, "0");
    // Repeated deletes stay at "0", never an empty display
    engine.delete();
    engine.delete();
    assert_eq!(engine.display().current, "0");
}

#[test]
fn delete_never_touches_pending() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "12");
    engine.choose_operator(Operator::Add);
    engine.delete();
    let frame = engine.display();
    assert_eq!(frame.pending, "12 +");
}

#[test]
fn pending_line_shows_operand_and_symbol() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "5");
    engine.choose_operator(Operator::Divide);
    let frame = engine.display();
    assert_eq!(frame.current, "5");
    assert_eq!(frame.pending, "5 ÷");
}

#[test]
fn simple_addition() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "2");
    engine.choose_operator(Operator::Add);
    type_digits(&mut engine, "3");
    engine.compute();
    let frame = engine.display();
    assert_eq!(frame.current, "5");
    assert_eq!(frame.pending, "", "pending clears after compute");
}

#[test]
fn subtraction_can_go_negative() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "3");
    engine.choose_operator(Operator::Subtract);
    type_digits(&mut engine, "8");
    engine.compute();
    assert_eq!(engine.display().current, "-5");
}

#[test]
fn division_produces_decimals() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "7");
    engine.choose_operator(Operator::Divide);
    type_digits(&mut engine, "2");
    engine.compute();
    assert_eq!(engine.display().current, "3.5");
}

#[test]
fn chained_operators_evaluate_left_to_right() {
    // 2 + 3 × 4 = is (2 + 3) × 4 = 20, not 2 + (3 × 4) = 14: choosing ×
    // computes the pending addition first.
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "2");
    engine.choose_operator(Operator::Add);
    type_digits(&mut engine, "3");
    engine.choose_operator(Operator::Multiply);
    let frame = engine.display();
    assert_eq!(frame.current, "5");
    assert_eq!(frame.pending, "5 ×");

    type_digits(&mut engine, "4");
    engine.compute();
    assert_eq!(engine.display().current, "20");
}

#[test]
fn operator_twice_reuses_current_operand() {
    // With nothing typed after the first operator, the entry still holds the
    // captured operand, so a second operator computes 5 + 5 first.
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "5");
    engine.choose_operator(Operator::Add);
    engine.choose_operator(Operator::Multiply);
    let frame = engine.display();
    assert_eq!(frame.current, "10");
    assert_eq!(frame.pending, "10 ×");
}

#[test]
fn result_feeds_the_next_operation() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "2");
    engine.choose_operator(Operator::Add);
    type_digits(&mut engine, "3");
    engine.compute();

    engine.choose_operator(Operator::Add);
    type_digits(&mut engine, "1");
    engine.compute();
    assert_eq!(engine.display().current, "6");
}

#[test]
fn digit_after_result_starts_fresh() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "2");
    engine.choose_operator(Operator::Add);
    type_digits(&mut engine, "3");
    engine.compute();
    assert_eq!(engine.display().current, "5");

    type_digits(&mut engine, "7");
    assert_eq!(engine.display().current, "7", "digit overwrites stale result");
}

#[test]
fn decimal_after_result_starts_fresh() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "2");
    engine.choose_operator(Operator::Add);
    type_digits(&mut engine, "3");
    engine.compute();

    engine.append_decimal();
    assert_eq!(engine.display().current, "0.");
}

#[test]
fn digit_after_operator_starts_fresh() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "9");
    engine.choose_operator(Operator::Multiply);
    type_digits(&mut engine, "8");
    let frame = engine.display();
    assert_eq!(frame.current, "8");
    assert_eq!(frame.pending, "9 ×");
}

#[test]
fn compute_without_pending_is_a_noop() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "7");
    engine.compute();
    assert_eq!(engine.display().current, "7");
}

#[test]
fn repeated_equals_is_a_noop() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "2");
    engine.choose_operator(Operator::Add);
    type_digits(&mut engine, "3");
    engine.compute();
    engine.compute();
    assert_eq!(engine.display().current, "5");
}

#[test]
fn float_noise_is_rounded_in_results() {
    // 0.1 + 0.2 computes to 0.30000000000000004 in f64; the display rounds
    // it away.
    let mut engine = CalculatorEngine::new();
    engine.append_decimal();
    type_digits(&mut engine, "1");
    engine.choose_operator(Operator::Add);
    engine.append_decimal();
    type_digits(&mut engine, "2");
    engine.compute();
    assert_eq!(engine.display().current, "0.3");
}

#[test]
fn large_results_render_scientific() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "1000000");
    engine.choose_operator(Operator::Multiply);
    type_digits(&mut engine, "1000000");
    engine.compute();
    assert_eq!(engine.display().current, "1.000000e+12");
}

#[test]
fn tiny_results_render_scientific() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "1");
    engine.choose_operator(Operator::Divide);
    type_digits(&mut engine, "10000000");
    engine.compute();
    assert_eq!(engine.display().current, "1.000000e-7");
}

#[test]
fn clear_returns_to_initial_state() {
    let mut engine = CalculatorEngine::new();
    type_digits(&mut engine, "12");
    engine.choose_operator(Operator::Add);
    type_digits(&mut engine, "34");
    engine.clear();
    let frame = engine.display();
    assert_eq!(frame.current, "0");
    assert_eq!(frame.pending, "");

    // And the engine is fully usable again
    type_digits(&mut engine, "6");
    engine.choose_operator(Operator::Multiply);
    type_digits(&mut engine, "7");
    engine.compute();
    assert_eq!(engine.display().current, "42");
}
