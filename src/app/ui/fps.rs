use eframe::egui::Context;

use super::super::ViewModel;

const FRAME_TIME_WINDOW: usize = 120;

impl ViewModel {
    pub(in crate::app) fn sample_frame_time(&mut self, ctx: &Context) {
        let dt = ctx.input(|input| input.stable_dt);
        if dt <= f32::EPSILON {
            return;
        }

        if self.frame_times.len() == FRAME_TIME_WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(dt);
    }

    pub(in crate::app) fn fps_display_text(&self) -> Option<String> {
        let &latest = self.frame_times.back()?;
        let mean = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;

        Some(format!(
            "FPS {:.0} | avg {:.1} | {:.1} ms",
            1.0 / latest,
            1.0 / mean,
            latest * 1000.0
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::VizConfig;

    use super::super::super::ViewModel;

    #[test]
    fn test_fps_display_text_summarizes_window() {
        let mut model = ViewModel::new(VizConfig::default());
        assert!(model.fps_display_text().is_none());

        model.frame_times.push_back(1.0 / 60.0);
        model.frame_times.push_back(1.0 / 30.0);

        let text = model.fps_display_text().unwrap();
        assert!(text.contains("FPS 30"));
        assert!(text.contains("avg 40.0"));
        assert!(text.contains("33.3 ms"));
    }
}
