use axum::response::Html;

pub const GREETING: &str = "<h1>Bakery GET-POST-PATCH-DELETE API</h1>";

pub async fn home() -> Html<&'static str> {
    Html(GREETING)
}
