//! Small arithmetic chains mixing the step shapes a rail accepts.
//!
//! Run with `cargo run --example chained_arithmetic`.

use ok_rail::{from_outcome, ok, Rail};

fn double_if_positive(x: i32) -> Rail<i32, String> {
    if x <= 0 {
        return Rail::fail(format!("value must be positive, got {x}"));
    }
    ok(x * 2)
}

fn subtract_three_if_even(x: i32) -> Rail<i32, String> {
    if x % 2 != 0 {
        return Rail::fail(format!("value must be even, got {x}"));
    }
    ok(x - 3)
}

fn add_ten(x: i32) -> Result<i32, String> {
    Ok(x + 10)
}

fn divide_by_two(x: i32) -> Result<i32, String> {
    if x % 2 != 0 {
        return Err("value must be even to divide by two".to_string());
    }
    Ok(x / 2)
}

fn validate_positive(x: &i32) -> Result<(), String> {
    if *x <= 0 {
        return Err("number must be positive".to_string());
    }
    Ok(())
}

fn describe(v: i32) -> Result<String, String> {
    if v < 0 {
        return Err("negative value".to_string());
    }
    Ok(format!("Value: {v}"))
}

fn report<T: std::fmt::Display>(label: &str, rail: Rail<T, String>) {
    match rail.into_result() {
        Ok(value) => println!("{label}: final result {value}"),
        Err(err) => println!("{label}: error {err}"),
    }
}

fn main() {
    let nested = ok(10)
        .and_then(double_if_positive)
        .and_then(subtract_three_if_even)
        .map_value(|x| x + 1);
    report("nested", nested);

    let halved = ok(20)
        .and_then_outcome_ctx(add_ten, "failed to add ten")
        .and_then_outcome_ctx(divide_by_two, "failed to divide by two");
    report("halved", halved);

    let squared = ok(4)
        .map_value(|x| x * x)
        .check_ctx(validate_positive, "validation failed");
    report("squared", squared);

    let described = from_outcome(-1223, None).and_then_outcome_ctx(describe, "conversion failed");
    report("described", described);
}
