use criterion::Criterion;
use std::time::Duration;

// ============================================================================
// Domain Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    pub quantity: u32,
    pub unit_price: u64,
}

impl Order {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            quantity: (id % 7) as u32 + 1,
            unit_price: 250 + id % 40,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DomainError {
    OutOfStock(u64),
    InvalidQuantity(u32),
    PaymentDeclined(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::OutOfStock(id) => write!(f, "product {id} is out of stock"),
            DomainError::InvalidQuantity(q) => write!(f, "invalid quantity {q}"),
            DomainError::PaymentDeclined(reason) => write!(f, "payment declined: {reason}"),
        }
    }
}

// ============================================================================
// Simulation Functions
// ============================================================================

pub fn check_stock(order: Order) -> Result<Order, DomainError> {
    if order.id % 100 == 0 {
        Err(DomainError::OutOfStock(order.id))
    } else {
        Ok(order)
    }
}

pub fn validate_quantity(order: &Order) -> Result<(), DomainError> {
    if order.quantity > 5 {
        Err(DomainError::InvalidQuantity(order.quantity))
    } else {
        Ok(())
    }
}

pub fn charge(order: Order) -> Result<u64, DomainError> {
    if order.id % 25 == 0 {
        Err(DomainError::PaymentDeclined("card expired".to_string()))
    } else {
        Ok(order.unit_price * u64::from(order.quantity))
    }
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
