//! End-to-end host tests: load an index over HTTP, bind the search box, and
//! drive it with input events.

use knp_wiki::{JsonLinesView, SearchBox, TextView, WikiConfig};
use serde_json::json;
use wiki_search::{IndexSource, load_index};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve_index(body: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/search-index.json"))
        .respond_with(body)
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer) -> WikiConfig {
    let toml_str = format!(
        "[index]\nsource = \"{}/wiki/search-index.json\"\n[loader]\ntimeout_seconds = 5\n",
        server.uri()
    );
    toml::from_str(&toml_str).expect("valid config")
}

async fn load(config: &WikiConfig) -> Option<wiki_search::DocumentSet> {
    let source: IndexSource = config
        .index
        .source
        .as_deref()
        .expect("source configured")
        .parse()
        .expect("valid source");
    load_index(&source, &config.loader_config()).await
}

#[tokio::test]
async fn typing_queries_re_renders_results() {
    let server = serve_index(ResponseTemplate::new(200).set_body_json(json!({
        "updated_at": "2024-05-06T07:08:09Z",
        "docs": [
            {"title": "Alpha Report", "href": "/a", "text": "overview of alpha systems"},
            {"title": "Beta Notes", "href": "/b", "text": "notes about beta and alpha integration"}
        ]
    })))
    .await;
    let config = config_for(&server);

    let index = load(&config).await;
    assert!(index.is_some());

    let mut search_box = SearchBox::bind(index, TextView::new(Vec::new())).expect("bind");
    search_box
        .listen("alpha beta\n".as_bytes())
        .expect("listen");

    let out = String::from_utf8(search_box.into_view().into_inner()).expect("utf8");
    assert_eq!(
        out,
        "Updated: 2024-05-06 07:08 UTC\n\
         == 2 results ==\nAlpha Report\n  /a\n\nBeta Notes\n  /b\n\
         == 1 result ==\nBeta Notes\n  /b\n  notes about beta and alpha integration\n"
    );
}

#[tokio::test]
async fn failed_load_leaves_output_untouched() {
    let server = serve_index(ResponseTemplate::new(500)).await;
    let config = config_for(&server);

    let index = load(&config).await;
    assert!(index.is_none());

    let mut search_box = SearchBox::bind(index, JsonLinesView::new(Vec::new())).expect("bind");
    search_box.listen("alpha\n".as_bytes()).expect("listen");
    assert!(search_box.into_view().into_inner().is_empty());
}

#[tokio::test]
async fn payload_without_docs_leaves_output_untouched() {
    let server =
        serve_index(ResponseTemplate::new(200).set_body_json(json!({"updated_at": "x"}))).await;
    let config = config_for(&server);

    let mut search_box =
        SearchBox::bind(load(&config).await, TextView::new(Vec::new())).expect("bind");
    search_box.on_input("alpha").expect("input");
    assert!(search_box.into_view().into_inner().is_empty());
}
