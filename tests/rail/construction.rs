use ok_rail::{fail, from_outcome, ok, ChainError, Rail};

#[test]
fn ok_carries_value_and_ignores_default() {
    let rail: Rail<i32, &str> = ok(42);

    assert!(rail.is_ok());
    assert!(!rail.is_err());
    assert_eq!(rail.value(), Some(&42));
    assert_eq!(rail.unwrap_or(7), 42);
}

#[test]
fn fail_roots_a_fresh_chain() {
    let rail: Rail<i32, &str> = fail("test error");

    assert!(rail.is_err());
    assert_eq!(rail.value(), None);

    let err = rail.error().expect("rail should carry an error");
    assert_eq!(err.root(), &"test error");
    assert!(!err.is_wrapped());
}

#[test]
fn fail_chain_keeps_existing_layers() {
    let chain = ChainError::new("disk full").wrap("saving");
    let rail: Rail<(), _> = Rail::fail_chain(chain.clone());

    assert_eq!(rail.into_error(), Some(chain));
}

#[test]
fn from_outcome_without_error_is_ok() {
    assert_eq!(from_outcome(42, None::<&str>), ok(42));
}

#[test]
fn from_outcome_with_error_is_fail() {
    assert_eq!(from_outcome(0, Some("test error")), fail("test error"));
    assert_eq!(Rail::from_outcome(99, Some("ignored value")).into_value(), None);
}

#[test]
fn from_result_maps_both_sides() {
    assert_eq!(Rail::from_result(Ok::<_, &str>(3)), ok(3));
    assert_eq!(Rail::from_result(Err::<i32, _>("bad")), fail("bad"));
    assert_eq!(Rail::from(Err::<i32, _>("bad")), fail("bad"));
}

#[test]
fn context_only_touches_failures() {
    let passed: Rail<u8, &str> = ok(1);
    assert_eq!(passed.context("unused"), ok(1));

    let failed: Rail<u8, &str> = fail("boom");
    let err = failed.context("outer").unwrap_err();
    assert_eq!(err.error_chain(), "outer -> boom");
}

#[test]
fn context_with_is_lazy_on_success() {
    let mut called = false;
    let _ = ok::<u8, &str>(1).context_with(|| {
        called = true;
        "never".to_string()
    });
    assert!(!called);
}

#[test]
fn map_root_preserves_layers() {
    let rail: Rail<(), &str> = fail("oops");
    let mapped = rail.context("layer").map_root(|e| e.len());

    let err = mapped.unwrap_err();
    assert_eq!(err.root(), &4);
    assert_eq!(err.depth(), 1);
}
