use ok_rail::traits::IntoErrorContext;
use ok_rail::{context, ChainError, ErrorContext};


#[test]
fn into_error_context_supports_str_string_and_existing_context() {
    let ctx1 = "inline context".into_error_context();
    assert_eq!(ctx1.message(), "inline context");

    let ctx2 = String::from("owned").into_error_context();
    assert_eq!(ctx2.message(), "owned");

    let ctx3 = ErrorContext::tag("api").into_error_context();
    assert_eq!(ctx3, ErrorContext::tag("api"));
}

#[test]
fn context_macro_integrates_with_chain_error() {
    let err = ChainError::<&str>::new("failed").wrap(context!("step: {}", 2));

    assert_eq!(err.depth(), 1);
    assert_eq!(err.layers().next().map(|l| l.to_string()), Some("step: 2".to_string()));
}
