use eframe::egui::{self, RichText, Ui};

use super::super::ViewModel;
use super::super::render_utils::ease_out;

const REVEAL_SECONDS: f32 = 0.8;
const REVEAL_RISE: f32 = 30.0;

struct Section {
    title: &'static str,
    body: &'static str,
}

const SECTIONS: [Section; 5] = [
    Section {
        title: "A network in motion",
        body: "What you are watching is a small feed-forward network rendered as points \
               in space. The whole arrangement orbits slowly around its vertical axis, so \
               every column of neurons takes a turn in the foreground.",
    },
    Section {
        title: "Reading the colors",
        body: "The teal column is the input layer and the amber column is the output layer. \
               Everything between them is hidden layers in blue, and the connections borrow \
               the same blue at a fraction of the strength.",
    },
    Section {
        title: "Depth cues",
        body: "There is no real camera here, just a perspective divide. Neurons close to \
               the viewer draw larger and fully opaque, while the far side of the network \
               shrinks and fades toward the background.",
    },
    Section {
        title: "Connections as fog",
        body: "Each neuron links to every neuron in the next layer. An edge inherits the \
               average depth of its two endpoints, so links that recede into the distance \
               dissolve first and the nearest ones stay legible.",
    },
    Section {
        title: "Fresh geometry on resize",
        body: "Layer depth and vertical spacing are fixed by the configuration, but each \
               neuron gets a small random sideways offset to keep the silhouette from \
               looking like a grid. Resizing the window rebuilds the arrangement with a \
               new set of offsets.",
    },
];

impl ViewModel {
    pub(in crate::app) const SECTION_COUNT: usize = SECTIONS.len();

    pub(in crate::app) fn draw_about_sections(&mut self, ui: &mut Ui) {
        ui.heading("About this visualization");
        ui.add_space(6.0);

        let mut animating = false;
        egui::ScrollArea::vertical()
            .id_salt("about_sections_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, section) in SECTIONS.iter().enumerate() {
                    animating |= self.draw_section(ui, index, section);
                    ui.add_space(24.0);
                }
            });

        if animating {
            ui.ctx().request_repaint();
        }
    }

    fn draw_section(&mut self, ui: &mut Ui, index: usize, section: &Section) -> bool {
        let reveal = ui.ctx().animate_bool_with_time(
            ui.make_persistent_id(("about-section", index)),
            self.revealed_sections[index],
            REVEAL_SECONDS,
        );

        if !self.revealed_sections[index]
            && ui.next_widget_position().y < ui.clip_rect().bottom()
        {
            self.revealed_sections[index] = true;
        }

        let eased = ease_out(reveal);
        ui.add_space((1.0 - eased) * REVEAL_RISE);
        ui.scope(|ui| {
            ui.set_opacity(eased);
            ui.label(RichText::new(section.title).strong());
            ui.add_space(4.0);
            ui.label(section.body);
        });

        self.revealed_sections[index] && reveal < 1.0
    }
}
