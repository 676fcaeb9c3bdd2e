//! Share-to-X intent links.

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";

/// Intent link sharing a note: the note text wrapped in the community sentence plus the page URL.
pub fn note_share_url(content: &str, page_url: &str) -> String {
    let text =
        format!("I would love to create {content} to keep the vibe going, #VibeCafe, {page_url}");
    format!("{TWEET_INTENT}?text={}", urlencoding::encode(&text))
}

/// Intent link sharing a bare page URL.
pub fn link_share_url(page_url: &str) -> String {
    format!("{TWEET_INTENT}?url={}", urlencoding::encode(page_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn note_share_encodes_sentence_and_page() {
        assert_eq!(
            note_share_url("a game", "https://vibecafe.com/"),
            "https://twitter.com/intent/tweet?text=I%20would%20love%20to%20create%20a%20game%20to%20keep%20the%20vibe%20going%2C%20%23VibeCafe%2C%20https%3A%2F%2Fvibecafe.com%2F"
        );
    }

    #[test]
    fn link_share_encodes_query_string() {
        assert_eq!(
            link_share_url("https://vibecafe.com/places?q=tea"),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fvibecafe.com%2Fplaces%3Fq%3Dtea"
        );
    }
}
