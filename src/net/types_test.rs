use super::*;

fn pair(k: &str, v: &str) -> (String, String) {
    (k.to_owned(), v.to_owned())
}

// =============================================================
// User
// =============================================================

#[test]
fn display_name_joins_first_and_last() {
    let user = User { id: 1, email: "a@b.com".to_owned(), first_name: "Ada".to_owned(), last_name: "Lovelace".to_owned() };
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    let user = User { id: 1, email: "a@b.com".to_owned(), first_name: " ".to_owned(), last_name: String::new() };
    assert_eq!(user.display_name(), "a@b.com");
}

// =============================================================
// Blog serde
// =============================================================

#[test]
fn blog_is_active_defaults_to_true_when_missing() {
    let blog: Blog = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "T",
        "content": "C",
        "user_id": 2,
        "created_at": "2024-01-05T10:00:00",
        "updated_at": "2024-01-05T10:00:00"
    }))
    .unwrap();
    assert!(blog.is_active);
    assert_eq!(blog.user_id, 2);
}

#[test]
fn blog_patch_skips_absent_fields() {
    let patch = BlogPatch { title: Some("New".to_owned()), content: None };
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "title": "New" }));
}

#[test]
fn blog_patch_from_draft_sets_both_fields() {
    let patch = BlogPatch::from(BlogDraft { title: "T".to_owned(), content: "C".to_owned() });
    assert_eq!(patch.title.as_deref(), Some("T"));
    assert_eq!(patch.content.as_deref(), Some("C"));
}

// =============================================================
// PaginationParams
// =============================================================

#[test]
fn list_all_query_includes_sort_and_omits_blank_search() {
    let params = PaginationParams { search_text: Some("   ".to_owned()), ..PaginationParams::default() };
    assert_eq!(
        params.list_all_query(),
        vec![pair("page", "1"), pair("limit", "10"), pair("sort_by", "created_at"), pair("order", "desc")]
    );
}

#[test]
fn list_all_query_trims_search_text() {
    let params = PaginationParams {
        page: 3,
        limit: 20,
        sort_field: SortField::Title,
        sort_order: SortOrder::Asc,
        search_text: Some(" rust ".to_owned()),
    };
    assert_eq!(
        params.list_all_query(),
        vec![
            pair("page", "3"),
            pair("limit", "20"),
            pair("sort_by", "title"),
            pair("order", "asc"),
            pair("search", "rust"),
        ]
    );
}

#[test]
fn list_mine_query_uses_per_page() {
    let params = PaginationParams { page: 2, limit: 6, ..PaginationParams::default() };
    assert_eq!(params.list_mine_query(), vec![pair("page", "2"), pair("per_page", "6")]);
}

#[test]
fn sort_enums_parse_their_wire_names() {
    assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Asc));
    assert_eq!(SortOrder::parse("up"), None);
    assert_eq!(SortField::parse("title"), Some(SortField::Title));
    assert_eq!(SortField::parse("created_at"), Some(SortField::CreatedAt));
    assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
}
