use npm_depgraph::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock GraphRenderer that records what it was asked to render
#[derive(Default, Clone)]
pub struct MockGraphRenderer {
    pub rendered: Arc<Mutex<Vec<(PathBuf, String)>>>,
    pub should_fail: bool,
}

#[allow(dead_code)]
impl MockGraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn rendered(&self) -> Vec<(PathBuf, String)> {
        self.rendered.lock().unwrap().clone()
    }
}

impl GraphRenderer for MockGraphRenderer {
    fn render(&self, description: &str, output_path: &Path) -> Result<()> {
        if self.should_fail {
            return Err(GraphError::RenderError {
                format: "mock".to_string(),
                details: "Mock render failure".to_string(),
            }
            .into());
        }
        self.rendered
            .lock()
            .unwrap()
            .push((output_path.to_path_buf(), description.to_string()));
        Ok(())
    }
}
