use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Static page shell. The browser script talks to the JSON endpoints.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_serves_page_shell() {
        let Html(body) = index().await;
        assert!(body.contains("<title>Pantry</title>"));
    }
}
