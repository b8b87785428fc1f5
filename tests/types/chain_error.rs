use ok_rail::{ChainError, ChainLink, ErrorContext};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
struct DbError(&'static str);

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "db: {}", self.0)
    }
}

impl Error for DbError {}

#[test]
fn new_chain_has_no_layers() {
    let err = ChainError::new("root");

    assert_eq!(err.depth(), 0);
    assert!(!err.is_wrapped());
    assert!(err.outermost().is_none());
    assert_eq!(err.error_chain(), "root");
}

#[test]
fn wrap_never_changes_the_root() {
    let err = ChainError::new(DbError("locked")).wrap("reading").wrap("syncing");

    assert_eq!(err.root(), &DbError("locked"));
    assert_eq!(err.outermost(), Some(&ErrorContext::new("syncing")));
    assert_eq!(err.into_root(), DbError("locked"));
}

#[test]
fn wrap_all_takes_layers_innermost_first() {
    let err = ChainError::new("root")
        .wrap_all([ErrorContext::new("inner"), ErrorContext::new("outer")]);

    assert_eq!(err.error_chain(), "outer -> inner -> root");
}

#[test]
fn links_walk_to_the_root() {
    let err = ChainError::new("root").wrap("a").wrap("b");
    let links: Vec<ChainLink<'_, &str>> = err.links().collect();

    assert_eq!(err.links().len(), 3);
    assert_eq!(links[0], ChainLink::Context(&ErrorContext::new("b")));
    assert_eq!(links[1], ChainLink::Context(&ErrorContext::new("a")));
    assert!(links[2].is_root());
    assert!(!links[0].is_root());
}

#[test]
fn source_exposes_the_root_error() {
    let err = ChainError::new(DbError("locked")).wrap("reading");

    let source = err.source().expect("root should be the source");
    assert_eq!(source.to_string(), "db: locked");
    assert!(source.downcast_ref::<DbError>().is_some());
}

#[test]
fn chain_error_can_be_boxed_as_dyn_error() {
    let boxed: Box<dyn Error> = Box::new(ChainError::new(DbError("gone")).wrap("fetch"));
    assert_eq!(boxed.to_string(), "fetch -> db: gone");
}

#[test]
fn from_root_starts_chain() {
    let err: ChainError<&str> = "plain".into();
    assert_eq!(err, ChainError::new("plain"));
}

#[test]
fn map_root_keeps_layers() {
    let err = ChainError::<&str>::new("fail")
        .wrap(ErrorContext::tag("map"))
        .map_root(|msg| format!("wrapped: {msg}"));

    assert_eq!(err.root(), "wrapped: fail");
    assert_eq!(err.depth(), 1);
}

#[test]
fn into_parts_splits_root_and_layers() {
    let (root, layers) = ChainError::new("root").wrap("a").wrap("b").into_parts();

    assert_eq!(root, "root");
    assert_eq!(layers, vec![ErrorContext::new("b"), ErrorContext::new("a")]);
}

#[test]
fn alternate_display_cascades() {
    let err = ChainError::new("root").wrap("inner").wrap("outer");
    assert_eq!(format!("{err:#}"), "outer\n  inner\n    root");
}

#[cfg(feature = "serde")]
#[test]
fn chain_error_serde_round_trip() {
    let err = ChainError::new(String::from("boom"))
        .wrap(ErrorContext::tag("db"))
        .wrap(ErrorContext::metadata("attempt", "2"));

    let json = serde_json::to_string(&err).expect("serialize");
    let back: ChainError<String> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, err);
}
