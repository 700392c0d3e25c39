use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt as _;

use super::*;
use crate::compose::cache::AvatarCache;
use crate::encode::png::PngEncoder;
use crate::render::boxes::BoxRenderer;

fn service() -> Arc<AvatarService<BoxRenderer, PngEncoder>> {
    let cfg = AvatarConfig::builder()
        .font_bytes(vec![1u8])
        .size(32, 32)
        .font_size(16.0)
        .spacer(2)
        .position(0, 24)
        .build()
        .unwrap();
    let composer = AvatarComposer::new(BoxRenderer::new(8.0), AvatarCache::unbounded());
    Arc::new(AvatarService::new(composer, cfg, PngEncoder))
}

async fn get(
    svc: Arc<AvatarService<BoxRenderer, PngEncoder>>,
    uri: &str,
    if_none_match: Option<&str>,
) -> Response {
    let mut req = Request::builder().uri(uri);
    if let Some(tag) = if_none_match {
        req = req.header(header::IF_NONE_MATCH, tag);
    }
    router(svc)
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[test]
fn etag_wraps_token() {
    assert_eq!(etag_for("AL"), "\"avatarAL\"");
    assert_eq!(etag_for("A\"B"), "\"avatarA\\u{22}B\"");
    assert_eq!(etag_for("\u{e9}"), "\"avatar\\u{e9}\"");
    assert!(HeaderValue::from_str(&etag_for("BOB \n")).is_ok());
}

#[tokio::test]
async fn avatar_response_carries_caching_headers() {
    let resp = get(service(), "/avatar/Ada%20Lovelace", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let h = resp.headers().clone();
    assert_eq!(h[header::CONTENT_TYPE], "image/png");
    assert_eq!(h[header::CACHE_CONTROL], "max-age=2592000");
    assert_eq!(h[header::ETAG], "\"avatarAL\"");

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(h[header::CONTENT_LENGTH], body.len().to_string().as_str());
    let img = image::load_from_memory(&body).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (32, 32));
}

#[tokio::test]
async fn query_overrides_apply_on_first_render() {
    let resp = get(service(), "/avatar/Ada%20Lovelace?bg=%23ff0000", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let img = image::load_from_memory(&body).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
}

#[tokio::test]
async fn matching_if_none_match_is_not_modified_without_rendering() {
    let svc = service();
    let resp = get(svc.clone(), "/avatar/Ada%20Lovelace", Some("\"avatarAL\"")).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(resp.headers()[header::ETAG], "\"avatarAL\"");
    assert_eq!(svc.composer().renderer().fonts_parsed(), 0);

    let resp = get(svc, "/avatar/Ada%20Lovelace", Some("W/\"avatarXY\", \"other\"")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn blank_name_is_bad_request() {
    let resp = get(service(), "/avatar/%20%20", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn font_failure_is_server_error() {
    let cfg = AvatarConfig::builder()
        .font_bytes(Vec::<u8>::new())
        .size(8, 8)
        .build()
        .unwrap();
    let composer = AvatarComposer::new(BoxRenderer::new(4.0), AvatarCache::unbounded());
    let svc = Arc::new(AvatarService::new(composer, cfg, PngEncoder));
    let resp = get(svc, "/avatar/Ada", None).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_is_ok() {
    let resp = get(service(), "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
