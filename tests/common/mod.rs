use octocards::github::UserRecord;

pub fn record(id: u64, login: &str) -> UserRecord {
    UserRecord {
        id,
        login: login.to_string(),
        avatar_url: format!("https://x/{login}.png"),
        html_url: format!("https://x/{login}"),
    }
}
