// tests/common/mod.rs
#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use pipeline_router::{
    EditorProps, EditorRouter, PipelineEditor, RecordingNavigator, RouterConfig,
};
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// 记录每次挂载的 props。
#[derive(Debug, Default)]
pub struct RecordingEditor {
    pub mounts: Mutex<Vec<EditorProps>>,
}

impl RecordingEditor {
    pub fn mounts(&self) -> Vec<EditorProps> {
        self.mounts.lock().clone()
    }
}

impl PipelineEditor for RecordingEditor {
    fn mount(&self, props: &EditorProps) {
        self.mounts.lock().push(*props);
    }

    fn name(&self) -> &str {
        "recording_editor"
    }
}

pub struct Harness {
    pub router: EditorRouter,
    pub editor: Arc<RecordingEditor>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn harness(config: RouterConfig) -> Harness {
    setup_tracing();
    let editor = Arc::new(RecordingEditor::default());
    let navigator = Arc::new(RecordingNavigator::new());
    let router = EditorRouter::new(config)
        .unwrap()
        .with_editor(editor.clone())
        .with_navigator(navigator.clone());
    Harness {
        router,
        editor,
        navigator,
    }
}
