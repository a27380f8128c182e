use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found_without_leptos() {
    let resp = base_routes()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[test]
fn resolve_site_root_prefers_override() {
    assert_eq!(resolve_site_root("target/site", None), PathBuf::from("target/site"));
    assert_eq!(
        resolve_site_root("target/site", Some(Path::new("/srv/librovault"))),
        PathBuf::from("/srv/librovault")
    );
}
