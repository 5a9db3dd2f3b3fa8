use eframe::egui::Pos2;
use glam::Vec3;
use rand::Rng;

use crate::config::VizConfig;

use super::projection::{Camera, Viewport};

pub struct Node {
    pub position: Vec3,
    pub layer: usize,
    pub screen: Pos2,
    pub scale: f32,
}

pub struct NetworkLayout {
    pub nodes: Vec<Node>,
    pub edges: Vec<(usize, usize)>,
    pub layer_count: usize,
}

impl NetworkLayout {
    pub fn generate(config: &VizConfig) -> Self {
        let layer_count = config.layers.len();
        let mut rng = rand::thread_rng();
        let mut nodes = Vec::with_capacity(config.node_count());

        for (layer, &count) in config.layers.iter().enumerate() {
            let z = (layer as f32 - (layer_count as f32 - 1.0) / 2.0) * config.layer_distance;

            for i in 0..count {
                let y = (i as f32 - (count as f32 - 1.0) / 2.0) * config.node_spacing;
                let x = rng.gen_range(-config.node_jitter..=config.node_jitter);

                nodes.push(Node {
                    position: Vec3::new(x, y, z),
                    layer,
                    screen: Pos2::ZERO,
                    scale: 1.0,
                });
            }
        }

        let edges = connect_layers(&nodes);

        Self {
            nodes,
            edges,
            layer_count,
        }
    }

    pub fn project_all(&mut self, angle: f32, camera: Camera, viewport: Viewport) {
        for node in &mut self.nodes {
            let (screen, scale) = camera.project(node.position, angle, viewport);
            node.screen = screen;
            node.scale = scale;
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn connect_layers(nodes: &[Node]) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();

    for (a, node_a) in nodes.iter().enumerate() {
        for (b, node_b) in nodes.iter().enumerate() {
            if node_b.layer == node_a.layer + 1 {
                edges.push((a, b));
            }
        }
    }

    edges
}
