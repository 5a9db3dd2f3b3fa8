use eframe::egui::Vec2;

use crate::net::{NetworkLayout, Viewport};

use super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn sync_surface(&mut self, size: Vec2) -> bool {
        if size.x <= 0.0 || size.y <= 0.0 {
            return false;
        }

        let viewport = Viewport::new(size.x, size.y);
        if self.viewport == viewport {
            return false;
        }

        self.viewport = viewport;
        self.layout = NetworkLayout::generate(&self.config);
        log::debug!(
            "surface resized to {:.0}x{:.0}, regenerated {} nodes across {} layers",
            viewport.width,
            viewport.height,
            self.layout.node_count(),
            self.layout.layer_count
        );
        true
    }
}
