use super::*;

fn failure(message: &str) -> ApiError {
    ApiError { message: message.to_owned(), status_code: 500, details: None }
}

#[test]
fn begin_marks_loading_and_clears_error() {
    let mut state: FetchState<u32> = FetchState::default();
    let first = state.begin();
    state.apply(first, Err(failure("boom")));
    assert!(state.error.is_some());

    state.begin();
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn latest_response_is_applied() {
    let mut state = FetchState::default();
    let seq = state.begin();

    assert!(state.apply(seq, Ok("page 1")));
    assert_eq!(state.data, Some("page 1"));
    assert!(!state.loading);
}

#[test]
fn superseded_response_is_dropped() {
    let mut state = FetchState::default();
    let page_one = state.begin();
    let page_two = state.begin();

    assert!(state.apply(page_two, Ok("page 2")));
    assert!(!state.apply(page_one, Ok("page 1")));

    assert_eq!(state.data, Some("page 2"));
    assert!(!state.is_current(page_one));
}

#[test]
fn stale_response_does_not_end_loading() {
    let mut state: FetchState<&str> = FetchState::default();
    let old = state.begin();
    state.begin();

    state.apply(old, Ok("old"));

    assert!(state.loading);
    assert_eq!(state.data, None);
}

#[test]
fn error_replaces_data() {
    let mut state = FetchState::default();
    let seq = state.begin();
    state.apply(seq, Ok(1));
    let seq = state.begin();

    state.apply(seq, Err(failure("Blog not found")));

    assert_eq!(state.data, None);
    assert_eq!(state.error.map(|e| e.message).as_deref(), Some("Blog not found"));
}
