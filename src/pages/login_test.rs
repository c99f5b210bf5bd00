use super::*;

#[test]
fn normalize_token_input_trims_whitespace() {
    assert_eq!(normalize_token_input("  abc.def.ghi \n"), Ok("abc.def.ghi".to_owned()));
}

#[test]
fn normalize_token_input_strips_bearer_scheme() {
    assert_eq!(normalize_token_input("Bearer abc.def.ghi"), Ok("abc.def.ghi".to_owned()));
}

#[test]
fn normalize_token_input_requires_value() {
    assert_eq!(normalize_token_input("   "), Err("Paste an id token first."));
    assert_eq!(normalize_token_input("Bearer   "), Err("Paste an id token first."));
}

#[test]
fn normalize_token_input_bare_scheme_is_empty() {
    assert_eq!(normalize_token_input("Bearer"), Err("Paste an id token first."));
    assert_eq!(normalize_token_input("  Bearer\t"), Err("Paste an id token first."));
}

#[test]
fn normalize_token_input_keeps_token_starting_with_scheme_text() {
    assert_eq!(normalize_token_input("BearerToken"), Ok("BearerToken".to_owned()));
}

#[test]
fn normalize_token_input_rejects_inner_whitespace() {
    assert_eq!(normalize_token_input("abc def"), Err("Token must not contain spaces."));
}

#[test]
fn normalize_token_input_keeps_malformed_tokens() {
    // Structure is not checked here; the store copes with unreadable tokens.
    assert_eq!(normalize_token_input("not-a-valid-token"), Ok("not-a-valid-token".to_owned()));
}
