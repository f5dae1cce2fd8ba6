//! `ArticClient` against a local HTTP server serving canned listings.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Duration;

use http_body_util::Full;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use artgrid_lib::error::ApiError;
use artgrid_lib::error::Error;
use artgrid_lib::model::RecordId;
use artgrid_lib::session::FetchStatus;
use artgrid_lib::{ArticClient, Session, SessionConfig, SessionEvent};

const TOTAL: u64 = 30;

fn query(req: &Request<Incoming>) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Mimics the listing endpoint: ids `1..=TOTAL`, page 9 answers 403,
/// page 8 answers garbage. Requests that do not ask for `id` and `title`
/// get a 400.
fn respond(req: Request<Incoming>) -> Response<Full<Bytes>> {
    let params = query(&req);
    let fields: Vec<&str> = params.get("fields").map(|f| f.split(',').collect()).unwrap_or_default();
    if !(fields.contains(&"id") && fields.contains(&"title")) {
        return Response::builder()
            .status(StatusCode::BAD_REQUEST)
            .body(Full::new(Bytes::from(r#"{"detail":"Missing fields"}"#)))
            .unwrap();
    }
    let page: u64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: u64 = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(12);

    let (status, body) = match page {
        9 => (
            StatusCode::FORBIDDEN,
            r#"{"status":403,"error":"Invalid number of results","detail":"Too deep"}"#.to_string(),
        ),
        8 => (StatusCode::OK, "<html>not json</html>".to_string()),
        _ => {
            let start = (page - 1) * limit + 1;
            let end = (start + limit - 1).min(TOTAL);
            let data: Vec<String> = (start..=end)
                .map(|id| {
                    format!(
                        r#"{{"id":{id},"title":"Artwork {id}","place_of_origin":"France","artist_display":null,"inscriptions":null,"date_start":1880,"date_end":1890}}"#
                    )
                })
                .collect();
            let body = format!(
                r#"{{"pagination":{{"total":{TOTAL},"limit":{limit},"current_page":{page}}},"data":[{}],"info":{{}}}}"#,
                data.join(",")
            );
            (StatusCode::OK, body)
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

async fn serve() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let io = TokioIo::new(stream);
            tokio::spawn(async move {
                let service =
                    service_fn(|req: Request<Incoming>| async move { Ok::<_, Infallible>(respond(req)) });
                let _ = http1::Builder::new().serve_connection(io, service).await;
            });
        }
    });

    addr
}

async fn client() -> ArticClient {
    let addr = serve().await;
    ArticClient::builder()
        .url(format!("http://{addr}/api/v1/artworks"))
        .timeout(Duration::from_secs(5))
        .user_agent("artgrid-tests")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_first_page() {
    let client = client().await;
    let page = client.fetch_page(1, 12).await.unwrap();

    assert_eq!(page.len(), 12);
    assert_eq!(page.total_records(), TOTAL);
    assert_eq!(page.records()[0].id, RecordId(1));
    assert_eq!(page.records()[0].place_of_origin.as_deref(), Some("France"));
    assert_eq!(page.records()[0].artist_display, None);
}

#[tokio::test]
async fn test_fetch_last_partial_page() {
    let client = client().await;
    let page = client.fetch_page(3, 12).await.unwrap();

    let ids: Vec<u64> = page.ids().map(RecordId::get).collect();
    assert_eq!(ids, (25..=30).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_http_error_uses_detail() {
    let client = client().await;
    let err = client.fetch_page(9, 12).await.unwrap_err();

    match err {
        Error::Api(ApiError::Http { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "Too deep");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let client = client().await;
    let err = client.fetch_page(8, 12).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Api(ApiError::Parse { body: Some(_), .. })
    ));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ArticClient::builder()
        .url(format!("http://{addr}/"))
        .build()
        .unwrap();
    let err = client.fetch_page(1, 12).await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Network(_))));
}

#[tokio::test]
async fn test_session_over_http() {
    let client = client().await;
    let mut session = Session::new(client, SessionConfig::default());

    assert_eq!(session.go_to_page(1).await.unwrap(), FetchStatus::Loaded);
    session.handle(SessionEvent::RowSelect(RecordId(3))).unwrap();
    session.handle(SessionEvent::RowSelect(RecordId(5))).unwrap();

    session.go_to_page(2).await.unwrap();
    assert_eq!(session.view().selected_count, 2);

    assert_eq!(session.go_to_page(9).await.unwrap(), FetchStatus::Failed);
    assert_eq!(session.view().page_number, 9);
    assert_eq!(session.page().records()[0].id, RecordId(13));

    session.go_to_page(1).await.unwrap();
    let selected: Vec<RecordId> = session.view().visible_selection.iter().map(|r| r.id).collect();
    assert_eq!(selected, vec![RecordId(3), RecordId(5)]);
}
