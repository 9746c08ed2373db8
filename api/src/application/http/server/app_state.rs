use std::sync::Arc;

use quill_core::application::QuillService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: QuillService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: QuillService) -> Self {
        Self { args, service }
    }

    /// Public URL of a stored file, e.g. `https://cms.example.com/api/files/42`.
    pub fn file_url(&self, id: i64) -> String {
        format!(
            "{}{}/files/{}",
            self.args.server.external_url.trim_end_matches('/'),
            self.args.server.root_path,
            id
        )
    }
}
