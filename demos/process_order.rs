//! An order workflow where each step feeds the next.
//!
//! Run with `cargo run --example process_order`.

use ok_rail::{fail, ok, Rail};

#[derive(Debug)]
enum OrderError {
    Unavailable(u32),
    PaymentDeclined(f64),
    NotConfirmed,
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::Unavailable(id) => write!(f, "product {id} is not available"),
            OrderError::PaymentDeclined(amount) => {
                write!(f, "payment declined, amount {amount:.2} too high")
            }
            OrderError::NotConfirmed => f.write_str("order confirmation failed"),
        }
    }
}

// Every fifth product id is out of stock.
fn check_availability(product_id: u32) -> Rail<u32, OrderError> {
    if product_id % 5 == 3 {
        return fail(OrderError::Unavailable(product_id));
    }
    ok(product_id)
}

fn calculate_tax(price: f64, state: &str) -> Rail<f64, OrderError> {
    let rate = match state {
        "CA" => 0.075,
        "NY" => 0.085,
        _ => 0.05,
    };
    ok(price + price * rate)
}

fn apply_discount(total: f64, code: &str) -> Rail<f64, OrderError> {
    match code {
        "DISCOUNT20" => ok(total * 0.8),
        _ => ok(total),
    }
}

fn process_payment(amount: f64) -> Rail<bool, OrderError> {
    if amount > 500.0 {
        return fail(OrderError::PaymentDeclined(amount));
    }
    ok(true)
}

fn confirm_order(paid: bool) -> Rail<bool, OrderError> {
    if !paid {
        return fail(OrderError::NotConfirmed);
    }
    println!("order confirmed");
    ok(true)
}

fn process_order(product_id: u32, price: f64, state: &str, code: &str) -> Rail<bool, OrderError> {
    check_availability(product_id)
        .and_then_ctx(|_| calculate_tax(price, state), "calculating tax")
        .and_then(|taxed| apply_discount(taxed, code))
        .and_then_ctx(process_payment, "processing payment")
        .and_then(confirm_order)
}

fn main() {
    let orders = [
        (10, 300.0, "CA", "DISCOUNT20"),
        (13, 120.0, "NY", ""),
        (21, 900.0, "TX", "DISCOUNT20"),
    ];

    for (product_id, price, state, code) in orders {
        match process_order(product_id, price, state, code).into_result() {
            Ok(_) => println!("order {product_id}: processed successfully"),
            Err(err) => println!("order {product_id}: error processing order: {err}"),
        }
    }
}
