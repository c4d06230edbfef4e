use std::sync::Arc;

use dietcheck_core::application::DietcheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DietcheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DietcheckService) -> Self {
        Self { args, service }
    }
}
