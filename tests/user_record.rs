use octocards::github::UserRecord;

#[test]
fn decodes_the_four_consumed_fields() {
    let json = r#"{
        "id": 583231,
        "login": "octocat",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat"
    }"#;

    let user: UserRecord = serde_json::from_str(json).expect("decode");
    assert_eq!(user.id, 583231);
    assert_eq!(user.login, "octocat");
    assert_eq!(
        user.avatar_url,
        "https://avatars.githubusercontent.com/u/583231?v=4"
    );
    assert_eq!(user.html_url, "https://github.com/octocat");
}

#[test]
fn extra_payload_fields_are_ignored() {
    // Trimmed-down shape of a real /users entry: far more fields than
    // the cards consume.
    let json = r#"{
        "login": "octocat",
        "id": 583231,
        "node_id": "MDQ6VXNlcjU4MzIzMQ==",
        "avatar_url": "https://x/a.png",
        "gravatar_id": "",
        "url": "https://api.github.com/users/octocat",
        "html_url": "https://x/octocat",
        "followers_url": "https://api.github.com/users/octocat/followers",
        "type": "User",
        "site_admin": false
    }"#;

    let user: UserRecord = serde_json::from_str(json).expect("decode");
    assert_eq!(user.login, "octocat");
}

#[test]
fn missing_display_fields_decode_to_empty_strings() {
    // Display fields are unvalidated: absence becomes an empty string
    // and flows into rendering as an empty/broken element.
    let json = r#"{"id": 1, "login": "octocat", "avatar_url": "https://x/a.png"}"#;
    let user: UserRecord = serde_json::from_str(json).expect("decode");
    assert_eq!(user.html_url, "");

    let bare = r#"{"id": 2}"#;
    let user: UserRecord = serde_json::from_str(bare).expect("decode");
    assert_eq!(user.login, "");
    assert_eq!(user.avatar_url, "");
    assert_eq!(user.html_url, "");
}

#[test]
fn missing_id_fails_decode() {
    // The card key has no usable default.
    let json = r#"{"login": "octocat", "avatar_url": "https://x/a.png", "html_url": "https://x/octocat"}"#;
    assert!(serde_json::from_str::<UserRecord>(json).is_err());
}
