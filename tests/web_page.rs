mod support;

use scraper::{Html, Selector};
use search_view::config::BACKEND_DOWN_MESSAGE;
use search_view::{web, ViewConfig};
use support::{dead_endpoint, spawn_backend, three_matches, Reply};

async fn spawn_page(config: ViewConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        web::serve(listener, config).await.unwrap();
    });
    format!("http://{addr}/")
}

fn count(html: &str, selector: &str) -> usize {
    Html::parse_document(html)
        .select(&Selector::parse(selector).unwrap())
        .count()
}

fn text_of(html: &str, selector: &str) -> Option<String> {
    Html::parse_document(html)
        .select(&Selector::parse(selector).unwrap())
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

#[tokio::test]
async fn index_is_a_freshly_mounted_view() {
    let backend = spawn_backend(Reply::Json(three_matches())).await;
    let page = spawn_page(backend.config()).await;

    let html = reqwest::get(&page).await.unwrap().text().await.unwrap();

    assert_eq!(text_of(&html, "h1").as_deref(), Some("Know About Scooby Doo!"));
    assert_eq!(count(&html, "button[disabled]"), 1);
    assert_eq!(text_of(&html, "button").as_deref(), Some("Search"));
    assert_eq!(count(&html, ".error"), 0);
    assert_eq!(count(&html, ".results"), 0);
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn posting_the_form_renders_results() {
    let backend = spawn_backend(Reply::Json(three_matches())).await;
    let page = spawn_page(backend.config()).await;

    let html = reqwest::Client::new()
        .post(&page)
        .form(&[("query", "who is scooby")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(backend.hits(), 1);
    assert_eq!(text_of(&html, ".best .score").as_deref(), Some("Score: 87.3%"));
    assert_eq!(count(&html, ".others .match"), 2);
    let document = Html::parse_document(&html);
    let input = document
        .select(&Selector::parse("input#query").unwrap())
        .next()
        .unwrap();
    assert_eq!(input.value().attr("value"), Some("who is scooby"));
    assert_eq!(count(&html, "button[disabled]"), 0);
}

#[tokio::test]
async fn posting_a_blank_query_does_not_search() {
    let backend = spawn_backend(Reply::Json(three_matches())).await;
    let page = spawn_page(backend.config()).await;

    let html = reqwest::Client::new()
        .post(&page)
        .form(&[("query", "   ")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(backend.hits(), 0);
    assert_eq!(count(&html, ".results"), 0);
    assert_eq!(count(&html, "button[disabled]"), 1);
}

#[tokio::test]
async fn dead_backend_renders_error_banner() {
    let config = ViewConfig::new(&dead_endpoint().await).unwrap();
    let page = spawn_page(config).await;

    let html = reqwest::Client::new()
        .post(&page)
        .form(&[("query", "hello?")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(text_of(&html, ".error").as_deref(), Some(BACKEND_DOWN_MESSAGE));
    assert_eq!(count(&html, ".results"), 0);
}
