use ok_rail::{ChainError, ErrorFormatConfig, ErrorFormatter};
use std::fmt::Display;

fn sample() -> ChainError<&'static str> {
    ChainError::new("payment declined").wrap("charging card").wrap("processing order")
}

#[test]
fn default_display_uses_arrows() {
    assert_eq!(
        sample().to_string(),
        "processing order -> charging card -> payment declined"
    );
}

#[test]
fn compact_preset_uses_pipes() {
    assert_eq!(
        sample().fmt().compact().to_string(),
        "processing order | charging card | payment declined"
    );
}

#[test]
fn pretty_preset_marks_root() {
    assert_eq!(
        sample().fmt().pretty().to_string(),
        "├─ processing order\n├─ charging card\n└─ payment declined"
    );
}

#[test]
fn root_first_reverses_order() {
    assert_eq!(
        sample().format_with(|b| b.root_first(true)),
        "payment declined -> charging card -> processing order"
    );
}

#[test]
fn custom_config_prefixes_and_suffixes() {
    let config = ErrorFormatConfig {
        context_prefix: Some("<".into()),
        context_suffix: Some(">".into()),
        root_prefix: Some("!".into()),
        root_suffix: Some("!".into()),
        ..Default::default()
    };

    assert_eq!(
        sample().fmt().with_config(config).to_string(),
        "<processing order> -> <charging card> -> !payment declined!"
    );
}

#[test]
fn custom_formatter_trait_impl() {
    struct Upper;

    impl ErrorFormatter for Upper {
        fn format_item(&self, item: &dyn Display) -> String {
            item.to_string().to_uppercase()
        }

        fn separator(&self) -> &str {
            " / "
        }
    }

    assert_eq!(
        sample().error_chain_with(Upper),
        "PROCESSING ORDER / CHARGING CARD / PAYMENT DECLINED"
    );
}

#[test]
fn unwrapped_chain_renders_only_root() {
    assert_eq!(ChainError::new("alone").fmt().pretty().to_string(), "└─ alone");
}
