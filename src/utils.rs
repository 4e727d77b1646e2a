//! Helper values shared by services/ and api/

use std::sync::LazyLock;

/// Client to make http requests
pub static REQUEST_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Keeps the last four characters of a sensitive value, masks the rest.
pub fn mask_tail(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let keep = chars.len().min(4);
    let hidden = chars.len() - keep;

    "*".repeat(hidden) + &chars[hidden..].iter().collect::<String>()
}
