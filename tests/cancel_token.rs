use std::time::Duration;

use octocards::cancel::CancelToken;

#[test]
fn starts_uncancelled() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn cancel_is_sticky_and_idempotent() {
    let token = CancelToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn clones_share_the_flag() {
    let token = CancelToken::new();
    let clone = token.clone();
    token.cancel();
    assert!(clone.is_cancelled());
}

#[tokio::test]
async fn wait_returns_immediately_when_already_cancelled() {
    let token = CancelToken::new();
    token.cancel();
    tokio::time::timeout(Duration::from_millis(100), token.wait())
        .await
        .expect("wait should resolve for a cancelled token");
}

#[tokio::test]
async fn wait_wakes_on_cancel() {
    let token = CancelToken::new();
    let waiter = token.clone();

    let handle = tokio::spawn(async move {
        waiter.wait().await;
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    token.cancel();

    tokio::time::timeout(Duration::from_secs(1), handle)
        .await
        .expect("waiter should wake after cancel")
        .expect("waiter task should not panic");
}
