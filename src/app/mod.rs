use std::collections::VecDeque;

use eframe::egui::Context;

use crate::config::VizConfig;
use crate::net::{NetworkLayout, Rotation, Viewport};

mod render_utils;
mod scene;
mod surface;
mod ui;

pub struct NeurovizApp {
    view: ViewModel,
}

struct ViewModel {
    config: VizConfig,
    layout: NetworkLayout,
    rotation: Rotation,
    viewport: Viewport,
    revealed_sections: Vec<bool>,
    frame_times: VecDeque<f32>,
}

impl NeurovizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: VizConfig) -> Self {
        Self {
            view: ViewModel::new(config),
        }
    }
}

impl eframe::App for NeurovizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.view.show(ctx);
    }
}
