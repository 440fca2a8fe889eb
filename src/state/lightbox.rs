//! Modal gallery viewer state

/// Which image of a project's gallery is on display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxState {
    pub project_id: u32,
    images: &'static [&'static str],
    index: usize,
}

impl LightboxState {
    /// Open on `index`, clamped to the gallery. `None` for an empty gallery.
    pub fn open(project_id: u32, images: &'static [&'static str], index: usize) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self {
            project_id,
            images,
            index: index.min(images.len() - 1),
        })
    }

    pub fn current(&self) -> &'static str {
        self.images[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    pub fn prev(&mut self) {
        self.index = if self.index == 0 {
            self.images.len() - 1
        } else {
            self.index - 1
        };
    }

    /// "n / total", one-based
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }
}
