use super::*;

fn register_form(email: &str, password: &str, first: &str, last: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
    }
}

#[test]
fn email_shape() {
    assert!(is_valid_email("alice@example.com"));
    assert!(is_valid_email("  a.b+c@mail.example.org "));
    assert!(!is_valid_email("alice"));
    assert!(!is_valid_email("alice@localhost"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("al ice@example.com"));
    assert!(!is_valid_email("a@b@example.com"));
    assert!(!is_valid_email("alice@example."));
}

#[test]
fn login_requires_email_and_password() {
    let errors = validate_login(&LoginRequest { email: "nope".to_owned(), password: String::new() }).unwrap_err();
    assert_eq!(errors.get("email"), Some(INVALID_EMAIL));
    assert_eq!(errors.get("password"), Some(PASSWORD_REQUIRED));

    assert!(validate_login(&LoginRequest { email: "a@b.co".to_owned(), password: "x".to_owned() }).is_ok());
}

#[test]
fn register_reports_every_failing_field() {
    let errors = validate_register(&register_form("a@b.co", "12345", " ", "")).unwrap_err();
    assert_eq!(errors.get("email"), None);
    assert_eq!(errors.get("password"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(errors.get("first_name"), Some(FIRST_NAME_REQUIRED));
    assert_eq!(errors.get("last_name"), Some(LAST_NAME_REQUIRED));

    assert!(validate_register(&register_form("a@b.co", "123456", "Ann", "Lee")).is_ok());
}

#[test]
fn blog_needs_title_and_content() {
    let errors = validate_blog(&BlogDraft { title: "  ".to_owned(), content: String::new() }).unwrap_err();
    assert_eq!(errors.get("title"), Some(TITLE_REQUIRED));
    assert_eq!(errors.get("content"), Some(CONTENT_REQUIRED));
    assert!(validate_blog(&BlogDraft { title: "T".to_owned(), content: "C".to_owned() }).is_ok());
}

#[test]
fn add_topic_skips_blank_and_duplicates() {
    let mut topics = Vec::new();
    assert!(add_topic(&mut topics, " rust "));
    assert!(!add_topic(&mut topics, "rust"));
    assert!(!add_topic(&mut topics, "   "));
    assert!(add_topic(&mut topics, "wasm"));
    assert_eq!(topics, vec!["rust".to_owned(), "wasm".to_owned()]);
}

#[test]
fn topics_must_not_be_empty() {
    assert_eq!(validate_topics(&[]), Err(TOPICS_REQUIRED));
    assert_eq!(validate_topics(&["rust".to_owned()]), Ok(()));
}
