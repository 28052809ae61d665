//! The global safe-mode flag is process-wide state, so everything that
//! toggles it lives in this one sequential test (integration tests run as
//! their own process). Policy behaviour itself is covered through
//! `Generator::with_safe_mode` elsewhere.

use markdown_builder as md;
use markdown_builder::Error;

#[test]
fn global_flag_gates_the_free_functions() {
    assert!(!md::is_safe_mode());
    assert!(md::bold("x", false).is_ok());

    md::set_safe_mode(true);
    assert!(md::is_safe_mode());

    assert_eq!(md::bold("x", false), Err(Error::SafeMode));
    assert_eq!(md::code("x", false), Err(Error::SafeMode));
    assert_eq!(md::image("a", "u", false), Err(Error::SafeMode));
    assert_eq!(md::code_block("x", None, false), Err(Error::SafeMode));
    assert_eq!(md::blockquote("x", false), Err(Error::SafeMode));
    assert_eq!(md::bullet_list(["x"], false), Err(Error::SafeMode));
    assert_eq!(md::ordered_list(["x"], 1, false), Err(Error::SafeMode));
    assert_eq!(md::checklist(["x"], None, false), Err(Error::SafeMode));
    assert_eq!(md::table(["A"], [["1"]], None, false), Err(Error::SafeMode));
    assert_eq!(md::text("x", false), Err(Error::SafeMode));

    // escaped construction is unaffected, and safe mode provides no override
    assert!(md::bold("x", true).is_ok());
    assert_eq!(
        md::bold("x", false).unwrap_err().to_string(),
        "unescaped content is not permitted while safe mode is active"
    );

    md::set_safe_mode(false);
    assert!(!md::is_safe_mode());
    assert!(md::bold("x", false).is_ok());
}
