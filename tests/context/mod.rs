use ok_rail::{
    context_fn, extract_context, format_error_chain, with_context, with_context_result,
    wrap_context, ChainError, ErrorContext,
};

#[test]
fn wrap_context_adds_exactly_one_layer() {
    let err = wrap_context(ChainError::new("timeout"), Some("querying stock"));
    assert_eq!(err.depth(), 1);

    let err = wrap_context(err, Some(ErrorContext::tag("db")));
    assert_eq!(err.depth(), 2);
    assert_eq!(err.error_chain(), "[db] -> querying stock -> timeout");
}

#[test]
fn wrap_context_without_context_returns_error_untouched() {
    let original = ChainError::new("timeout").wrap("querying stock");
    let wrapped = wrap_context(original.clone(), None::<&str>);

    assert_eq!(wrapped, original);
}

#[test]
fn with_context_starts_single_layer_chain() {
    let err = with_context("io failed", "reading manifest");

    assert_eq!(err.root(), &"io failed");
    assert_eq!(err.outermost(), Some(&ErrorContext::new("reading manifest")));
}

#[test]
fn with_context_result_only_touches_errors() {
    let ok = with_context_result(Ok::<u8, &str>(3), "unused");
    assert_eq!(ok.unwrap(), 3);

    let err = with_context_result(Err::<u8, _>("denied"), ErrorContext::tag("auth"));
    assert_eq!(err.unwrap_err().error_chain(), "[auth] -> denied");
}

#[test]
fn context_fn_is_reusable_with_map_err() {
    let network = context_fn(ErrorContext::tag("network"));

    let first: Result<(), ChainError<&str>> = Err("timeout").map_err(&network);
    let second: Result<(), ChainError<&str>> = Err("reset").map_err(&network);

    assert_eq!(first.unwrap_err().error_chain(), "[network] -> timeout");
    assert_eq!(second.unwrap_err().error_chain(), "[network] -> reset");
}

#[test]
fn format_and_extract_agree_on_order() {
    let err = ChainError::new("boom")
        .wrap("step 1")
        .wrap(ErrorContext::metadata("attempt", "2"));

    assert_eq!(format_error_chain(&err), "attempt=2 -> step 1 -> boom");

    let layers = extract_context(&err);
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0], ErrorContext::metadata("attempt", "2"));
    assert_eq!(layers[1], ErrorContext::new("step 1"));
}
