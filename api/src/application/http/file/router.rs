use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};

use crate::application::{auth::auth, http::server::app_state::AppState};

use super::handlers::{
    delete_file::delete_file, get_file::get_file, list_files::list_files,
    upload_asset::upload_asset, upload_base64::upload_base64, upload_file::upload_file,
};

pub fn file_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/files", root_path),
            post(upload_file).get(list_files),
        )
        .route(
            &format!("{}/files/upload-base64", root_path),
            post(upload_base64),
        )
        .route(
            &format!("{}/files/{{file_id}}", root_path),
            get(get_file).delete(delete_file),
        )
        .route(&format!("{}/file-upload", root_path), post(upload_asset))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
        .layer(DefaultBodyLimit::max(state.args.uploads.max_upload_bytes))
}
