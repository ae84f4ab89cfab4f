use std::collections::HashMap;

use winit::window::Window;

/// Canvas id used when a view does not name one.
pub const DEFAULT_CANVAS_ID: &str = "canvas-webgpu";

/// Name → window lookup used during acquisition.
///
/// A canvas is any window that was registered under a string id. Acquisition
/// resolves the id here and fails with `AcquireError::SurfaceNotFound` if no
/// window carries it.
#[derive(Default)]
pub struct CanvasRegistry<'w> {
    canvases: HashMap<String, &'w Window>,
}

impl<'w> CanvasRegistry<'w> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `window` under `id`, replacing any previous entry.
    pub fn register(&mut self, id: impl Into<String>, window: &'w Window) {
        self.canvases.insert(id.into(), window);
    }

    pub fn get(&self, id: &str) -> Option<&'w Window> {
        self.canvases.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_resolves_nothing() {
        let reg = CanvasRegistry::new();
        assert!(reg.get(DEFAULT_CANVAS_ID).is_none());
    }
}
