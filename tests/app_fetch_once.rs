mod common;

use common::record;
use octocards::ui::app::App;
use octocards::ui::users::UsersIntent;

#[test]
fn fetch_slot_claimed_exactly_once() {
    let mut app = App::new();
    assert!(app.begin_fetch());
    assert!(!app.begin_fetch());
    assert!(!app.begin_fetch());
}

#[test]
fn redraw_churn_does_not_reopen_fetch_slot() {
    let mut app = App::new();
    assert!(app.begin_fetch());

    // Unrelated re-render triggers: ticks, selection, completed fetch.
    app.on_tick();
    app.apply_users(UsersIntent::FetchCompleted {
        users: vec![record(1, "octocat")],
    });
    app.move_selection(1);
    app.on_tick();

    assert!(!app.begin_fetch());
}

#[test]
fn loading_view_has_no_cards() {
    let app = App::new();
    assert!(app.users().is_loading());
    assert!(app.users().users().is_empty());
}

#[test]
fn two_record_scenario() {
    let mut app = App::new();
    app.apply_users(UsersIntent::FetchCompleted {
        users: vec![record(1, "first"), record(2, "second")],
    });

    assert!(!app.users().is_loading());
    assert_eq!(app.users().users().len(), 2);
    assert_eq!(app.users().users()[0].login, "first");
    assert_eq!(app.users().users()[1].login, "second");
}

#[test]
fn empty_array_scenario() {
    let mut app = App::new();
    app.apply_users(UsersIntent::FetchCompleted { users: vec![] });

    assert!(!app.users().is_loading());
    assert!(app.users().users().is_empty());
}

#[test]
fn selected_profile_follows_selection() {
    let mut app = App::new();
    app.apply_users(UsersIntent::FetchCompleted {
        users: vec![record(1, "first"), record(2, "second")],
    });

    assert_eq!(app.selected_profile_url(), Some("https://x/first"));
    app.move_selection(1);
    assert_eq!(app.selected_profile_url(), Some("https://x/second"));
}
