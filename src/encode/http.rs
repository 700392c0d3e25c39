use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::compose::composer::{Avatar, AvatarComposer, ColorOverrides};
use crate::config::AvatarConfig;
use crate::encode::png::ImageEncoder;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::backend::TextRenderer;
use crate::text::normalize::{is_blank, normalize};

/// `Cache-Control` sent with every avatar: 30 days.
pub const CACHE_CONTROL: &str = "max-age=2592000";

/// Strong entity tag for a token: `"avatar<token>"`.
///
/// Characters that may not appear inside an entity tag (quotes, whitespace, controls, non-ASCII)
/// are written as `\u{..}` escapes, so the tag is always a valid header value.
pub fn etag_for(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 8);
    out.push_str("\"avatar");
    for c in token.chars() {
        if c.is_ascii_graphic() && c != '"' {
            out.push(c);
        } else {
            out.extend(c.escape_unicode());
        }
    }
    out.push('"');
    out
}

/// Encoded avatar ready to be sent as an HTTP response.
#[derive(Clone, Debug)]
pub struct HttpAvatar {
    etag: String,
    content_type: &'static str,
    body: Vec<u8>,
}

impl HttpAvatar {
    /// Encode `avatar` with `encoder`.
    pub fn encode(avatar: &Avatar, encoder: &dyn ImageEncoder) -> AvatarResult<Self> {
        Ok(Self {
            etag: etag_for(&avatar.token),
            content_type: encoder.content_type(),
            body: encoder.encode(&avatar.image)?,
        })
    }

    /// Entity tag header value.
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Encoded image bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoResponse for HttpAvatar {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.content_type),
        );
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(self.body.len()));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
        match HeaderValue::from_str(&self.etag) {
            Ok(v) => {
                headers.insert(header::ETAG, v);
            }
            Err(e) => return HttpError(AvatarError::Other(e.into())).into_response(),
        }
        (StatusCode::OK, headers, self.body).into_response()
    }
}

/// Core error surfaced as a non-2xx response.
#[derive(Debug)]
pub struct HttpError(
    /// The core error.
    pub AvatarError,
);

impl From<AvatarError> for HttpError {
    fn from(e: AvatarError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "avatar request failed");
        }
        (status, self.0.to_string()).into_response()
    }
}

/// Composer, config and encoder shared by all requests.
pub struct AvatarService<R, E> {
    composer: AvatarComposer<R>,
    config: AvatarConfig,
    encoder: E,
}

impl<R: TextRenderer, E: ImageEncoder> AvatarService<R, E> {
    /// Bundle the pieces a server needs.
    pub fn new(composer: AvatarComposer<R>, config: AvatarConfig, encoder: E) -> Self {
        Self {
            composer,
            config,
            encoder,
        }
    }

    /// The composer, for cache inspection.
    pub fn composer(&self) -> &AvatarComposer<R> {
        &self.composer
    }

    /// Compose and encode `raw`.
    pub fn render(&self, raw: &str, overrides: &ColorOverrides) -> AvatarResult<HttpAvatar> {
        let avatar = self.composer.compose(raw, overrides, &self.config)?;
        HttpAvatar::encode(&avatar, &self.encoder)
    }
}

/// Optional color overrides on the query string.
#[derive(Debug, Default, serde::Deserialize)]
pub struct AvatarQuery {
    /// Glyph color as hex.
    pub fg: Option<String>,
    /// Background color as hex.
    pub bg: Option<String>,
}

/// Routes: `GET /avatar/:name` and `GET /health`.
pub fn router<R, E>(service: Arc<AvatarService<R, E>>) -> Router
where
    R: TextRenderer + 'static,
    E: ImageEncoder + 'static,
{
    Router::new()
        .route("/avatar/:name", get(avatar_handler::<R, E>))
        .route("/health", get(|| async { "ok" }))
        .with_state(service)
}

/// Serve `router(service)` on `listener` until the process stops.
pub async fn serve<R, E>(
    listener: tokio::net::TcpListener,
    service: Arc<AvatarService<R, E>>,
) -> std::io::Result<()>
where
    R: TextRenderer + 'static,
    E: ImageEncoder + 'static,
{
    axum::serve(listener, router(service)).await
}

async fn avatar_handler<R, E>(
    State(service): State<Arc<AvatarService<R, E>>>,
    Path(name): Path<String>,
    Query(query): Query<AvatarQuery>,
    headers: HeaderMap,
) -> Result<Response, HttpError>
where
    R: TextRenderer + 'static,
    E: ImageEncoder + 'static,
{
    let token = normalize(&name);
    if is_blank(&token) {
        return Err(AvatarError::EmptyInput.into());
    }

    let etag = etag_for(&token);
    if if_none_match(&headers, &etag) {
        tracing::debug!(%etag, "not modified");
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        if let Ok(v) = HeaderValue::from_str(&etag) {
            resp.headers_mut().insert(header::ETAG, v);
        }
        return Ok(resp);
    }

    let overrides = ColorOverrides::new(query.fg, query.bg);
    let rendered = tokio::task::spawn_blocking(move || service.render(&name, &overrides))
        .await
        .map_err(|e| AvatarError::Other(anyhow::anyhow!("render task failed: {e}")))??;
    Ok(rendered.into_response())
}

fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|t| t.trim())
        .any(|t| t == "*" || t.strip_prefix("W/").unwrap_or(t) == etag)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/http.rs"]
mod tests;
