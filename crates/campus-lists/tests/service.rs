use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use campus_client::{SearchClient, SearchEndpoint, WorkspaceContext};
use campus_lists::*;
use campus_query::{FilterValue, NodePatch, QueryDescriptor, QueryNode};
use serde_json::json;

/// Serve `count` canned page responses on an ephemeral port.
fn start_server(count: usize, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    thread::spawn(move || {
        for _ in 0..count {
            let (stream, _) = listener.accept().unwrap();
            handle(stream, &body);
        }
    });

    base_url
}

fn handle(mut stream: TcpStream, body: &str) {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "client hung up mid-request");
        raw.extend_from_slice(&chunk[..n]);
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().unwrap())
        })
        .unwrap_or(0);

    while raw.len() < header_end + content_length {
        let n = stream.read(&mut chunk).unwrap();
        assert!(n > 0, "client hung up mid-body");
        raw.extend_from_slice(&chunk[..n]);
    }

    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).unwrap();
}

fn page_body(total: u64) -> String {
    json!({
        "data": {
            "results": [{ "id": "c-1", "title": "Intro to Rust" }],
            "totalCount": total,
            "limit": 10,
            "offset": 0
        }
    })
    .to_string()
}

fn course_config() -> ListConfig {
    ListConfig {
        id: "courses".into(),
        title: "Courses".into(),
        endpoint: SearchEndpoint::SearchCourse,
        initial: QueryDescriptor::new(
            10,
            QueryNode::new("Course").with_include(QueryNode::new("User").with_alias("author")),
        ),
        search: SearchTarget::new("Course", "title"),
    }
}

// ── Happy path ──────────────────────────────────────────────────

#[test]
fn search_then_fetch_renders_the_page() {
    let base_url = start_server(1, page_body(42));
    let service = ListService::new(SearchClient::new(base_url), course_config());
    let ctx = WorkspaceContext::new("org-1");
    let mut state = service.state();

    let token = state.set_search("rust");
    let page = service.fetch(&ctx, &mut state, token).unwrap();

    let page = page.expect("newest request must publish");
    assert_eq!(page.total_count, 42);
    assert_eq!(page.results.len(), 1);
}

// ── Stale responses ─────────────────────────────────────────────

#[test]
fn superseded_request_is_dropped() {
    let base_url = start_server(2, page_body(42));
    let service = ListService::new(SearchClient::new(base_url), course_config());
    let ctx = WorkspaceContext::new("org-1");
    let mut state = service.state();

    let stale = state.set_search("r");
    let fresh = state.set_search("ru");

    // The older request resolves after the newer one was issued; its
    // response must not be rendered.
    assert!(service.fetch(&ctx, &mut state, stale).unwrap().is_none());
    assert!(service.fetch(&ctx, &mut state, fresh).unwrap().is_some());
}

// ── Filter flow against nested nodes ────────────────────────────

#[test]
fn nested_filter_flows_through_fetch() {
    let base_url = start_server(1, page_body(1));
    let service = ListService::new(SearchClient::new(base_url), course_config());
    let ctx = WorkspaceContext::new("org-1");
    let mut state = service.state();

    let token = state.apply_filter(
        "User",
        &NodePatch::where_entry("email", FilterValue::literal("a@b.com")),
    );

    assert!(service.fetch(&ctx, &mut state, token).unwrap().is_some());
    assert_eq!(
        state.descriptor().read_field("User", "where"),
        Some(json!({ "email": "a@b.com" }))
    );
}
