use std::collections::VecDeque;

use eframe::egui::{self, Align, Context, Layout};

use crate::config::VizConfig;
use crate::net::{NetworkLayout, Rotation, Viewport};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(config: VizConfig) -> Self {
        let layout = NetworkLayout::generate(&config);
        let rotation = Rotation::new(config.rotation_speed);

        Self {
            layout,
            rotation,
            viewport: Viewport::new(0.0, 0.0),
            revealed_sections: vec![false; Self::SECTION_COUNT],
            frame_times: VecDeque::new(),
            config,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        self.sample_frame_time(ctx);

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("neuroviz");
                    ui.separator();
                    ui.label(format!("layers: {}", format_layer_shape(&self.config.layers)));
                    ui.label(format!("nodes: {}", self.layout.node_count()));
                    ui.label(format!("edges: {}", self.layout.edge_count()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(fps_text) = self.fps_display_text() {
                            ui.label(fps_text);
                        }
                    });
                });
            });

        egui::SidePanel::right("about")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| self.draw_about_sections(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_scene(ui));
    }
}

fn format_layer_shape(layers: &[usize]) -> String {
    layers
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use crate::config::VizConfig;

    use super::super::super::ViewModel;
    use super::format_layer_shape;

    #[test]
    fn test_format_layer_shape() {
        assert_eq!(format_layer_shape(&[6, 8, 8, 4]), "6-8-8-4");
        assert_eq!(format_layer_shape(&[3]), "3");
    }

    #[test]
    fn test_new_view_model_matches_config_shape() {
        let config = VizConfig::default();
        let model = ViewModel::new(config.clone());

        assert_eq!(model.layout.node_count(), config.node_count());
        assert_eq!(model.layout.edge_count(), config.edge_count());
        assert_eq!(model.revealed_sections.len(), ViewModel::SECTION_COUNT);
        assert!(model.revealed_sections.iter().all(|revealed| !revealed));
        assert!((model.rotation.angle).abs() < 0.0001);
    }
}
