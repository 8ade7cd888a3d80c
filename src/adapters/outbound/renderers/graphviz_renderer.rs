use crate::ports::outbound::GraphRenderer;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Graphviz executable used when none is configured
pub const DEFAULT_DOT_COMMAND: &str = "dot";

/// GraphvizRenderer adapter running the external `dot` layout program
///
/// Implements the GraphRenderer port. The description is piped to
/// `dot -T<format> -o <path>` on stdin.
pub struct GraphvizRenderer {
    dot_command: String,
    format: String,
}

impl GraphvizRenderer {
    /// # Arguments
    /// * `dot_command` - Graphviz executable name or path
    /// * `format` - Graphviz output format (`svg`, `png`, `pdf`)
    pub fn new(dot_command: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            dot_command: dot_command.into(),
            format: format.into(),
        }
    }

    fn render_error(&self, details: impl Into<String>) -> anyhow::Error {
        GraphError::RenderError {
            format: self.format.clone(),
            details: details.into(),
        }
        .into()
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(&self, description: &str, output_path: &Path) -> Result<()> {
        if description.trim().is_empty() {
            return Err(self.render_error("graph description is empty"));
        }

        debug!(
            command = %self.dot_command,
            format = %self.format,
            output = %output_path.display(),
            "spawning graphviz"
        );

        let mut child = Command::new(&self.dot_command)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.render_error(format!("failed to run `{}`: {}", self.dot_command, e)))?;

        // A closed pipe means the process already exited; its status says why
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(description.as_bytes()) {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(self.render_error(format!(
                        "failed to send graph to `{}`: {}",
                        self.dot_command, e
                    )));
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| self.render_error(format!("failed to wait for `{}`: {}", self.dot_command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.render_error(format!(
                "`{}` exited with {}: {}",
                self.dot_command,
                output.status,
                stderr.trim()
            )));
        }

        if !output_path.is_file() {
            return Err(self.render_error(format!(
                "`{}` produced no output at {}",
                self.dot_command,
                output_path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_rejects_empty_description() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("deps.svg");

        let err = GraphvizRenderer::new(DEFAULT_DOT_COMMAND, "svg")
            .render("", &output_path)
            .unwrap_err();

        assert!(err.to_string().contains("graph description is empty"));
        assert!(!output_path.exists());
    }

    #[test]
    fn test_render_missing_executable() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("deps.svg");

        let err = GraphvizRenderer::new("npm-depgraph-no-such-dot", "svg")
            .render("digraph g {}", &output_path)
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Failed to render svg graph"));
        assert!(message.contains("npm-depgraph-no-such-dot"));
    }

    #[cfg(unix)]
    #[test]
    fn test_render_fails_when_no_file_is_produced() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("deps.png");

        // `true` accepts any arguments and exits successfully without writing
        let err = GraphvizRenderer::new("true", "png")
            .render("digraph g {}", &output_path)
            .unwrap_err();

        assert!(err.to_string().contains("produced no output"));
    }
}
