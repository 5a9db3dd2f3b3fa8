use eframe::egui::{Sense, Stroke, Ui};

use super::ViewModel;
use super::render_utils::{draw_background, fade_color};

const EDGE_LINE_WIDTH: f32 = 0.5;

fn edge_alpha(scale_a: f32, scale_b: f32, opacity: f32) -> f32 {
    ((scale_a + scale_b) / 2.0 * opacity).clamp(0.0, 1.0)
}

impl ViewModel {
    pub(in crate::app) fn draw_scene(&mut self, ui: &mut Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.config.background_color());

        self.sync_surface(rect.size());
        self.rotation.advance();
        self.layout
            .project_all(self.rotation.angle, self.config.camera(), self.viewport);

        let origin = rect.left_top();
        let edge_color = self.config.edge_color();
        for &(a, b) in &self.layout.edges {
            let start = origin + self.layout.nodes[a].screen.to_vec2();
            let end = origin + self.layout.nodes[b].screen.to_vec2();
            let alpha = edge_alpha(
                self.layout.nodes[a].scale,
                self.layout.nodes[b].scale,
                self.config.edge_opacity,
            );
            painter.line_segment(
                [start, end],
                Stroke::new(EDGE_LINE_WIDTH, fade_color(edge_color, alpha)),
            );
        }

        for node in &self.layout.nodes {
            let position = origin + node.screen.to_vec2();
            let radius = self.config.node_radius * node.scale;
            let color = fade_color(self.config.role_color(node.layer), node.scale);
            painter.circle_filled(position, radius, color);
        }

        ui.ctx().request_repaint();
    }
}
