//! Window management system
//!
//! Handles window creation, fullscreen toggle, title updates, and redraw
//! scheduling.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with field mode and animator state
    pub fn update_title(&self, mode: &str, count: usize, running: bool) {
        let title = if running {
            format!("{} - {} ({} particles) [Space to pause]", self.base_title, mode, count)
        } else {
            format!("{} - {} ({} particles) [paused]", self.base_title, mode, count)
        };
        self.window.set_title(&title);
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    #[test]
    fn test_title_formatting_running() {
        // Can't test the actual window without an event loop
        let title = format!("Driftfield - {} ({} particles) [Space to pause]", "snow", 100);
        assert!(title.contains("snow"));
        assert!(title.contains("100 particles"));
    }

    #[test]
    fn test_title_formatting_paused() {
        let title = format!("Driftfield - {} ({} particles) [paused]", "circuit", 40);
        assert!(title.contains("paused"));
    }
}
