use ok_rail::traits::IntoErrorContext;
use ok_rail::{extract_context, format_error_chain, ChainError, ErrorContext, LazyContext};

mod chain_error;
mod error_formatter;

#[test]
fn chain_error_accumulates_layers_outermost_first() {
    let err = ChainError::new("read failure")
        .wrap(ErrorContext::tag("fs"))
        .wrap(ErrorContext::metadata("path", "orders.csv"));

    let layers: Vec<&ErrorContext> = err.layers().collect();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0], &ErrorContext::metadata("path", "orders.csv"));
    assert_eq!(layers[1], &ErrorContext::tag("fs"));
}

#[test]
fn format_error_chain_ends_with_root() {
    let err = ChainError::new("boom")
        .wrap(ErrorContext::tag("pipeline"))
        .wrap(ErrorContext::new("step 2"));

    let chain = format_error_chain(&err);
    assert!(chain.starts_with("step 2"));
    assert!(chain.contains("[pipeline]"));
    assert!(chain.ends_with("boom"));
}

#[test]
fn extract_context_returns_lifo_order() {
    let err = ChainError::new("oops")
        .wrap(ErrorContext::new("first"))
        .wrap(ErrorContext::new("second"));

    let contexts = extract_context(&err);
    assert_eq!(contexts[0].message(), "second");
    assert_eq!(contexts[1].message(), "first");
}

#[test]
fn lazy_context_evaluates_on_use() {
    let lazy = LazyContext::new(|| "computed".to_string());
    let ctx = lazy.into_error_context();

    assert_eq!(ctx.message(), "computed");
}
