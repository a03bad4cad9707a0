//! Unit tests for `mask_token`.
//! Verifies that API keys are masked for safe logging: first 7 + "***" + last 4 chars;
//! keys of length <= 11 are fully masked as "***".

use gemini_client::mask_token;

#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("a"), "***");
    assert_eq!(mask_token("AIza1234"), "***");
    assert_eq!(mask_token("AIza123456"), "***");
}

#[test]
fn mask_token_long_shows_head_and_tail() {
    // Length > 11: show first 7 + "***" + last 4
    assert_eq!(mask_token("AIzaSy-abcdefghijklmnop"), "AIzaSy-***mnop");
    // len 12: head 7 = "AIzaSy-", tail 4 = last 4 = "yzwq"
    assert_eq!(mask_token("AIzaSy-xyzwq"), "AIzaSy-***yzwq");
}

#[test]
fn mask_token_typical_gemini_key() {
    // Typical key is long; we expect first 7 and last 4 visible
    let key = "AIzaSy-1234567890abcdefghijklmnopqrstuvwxyz";
    let masked = mask_token(key);
    assert!(masked.starts_with("AIzaSy-"));
    assert!(masked.ends_with("wxyz"));
    assert!(masked.contains("***"));
    assert_eq!(masked.len(), 7 + 3 + 4);
}
