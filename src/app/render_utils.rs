use eframe::egui::{Color32, Painter, Rect};

pub(super) fn fade_color(color: Color32, alpha: f32) -> Color32 {
    let alpha = alpha.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (alpha * 255.0) as u8)
}

pub(super) fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * (2.0 - t)
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, color: Color32) {
    painter.rect_filled(rect, 0.0, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_color_scales_alpha_only() {
        let base = Color32::from_rgb(160, 196, 255);

        let faded = fade_color(base, 0.5);
        assert_eq!(faded.r(), 160);
        assert_eq!(faded.g(), 196);
        assert_eq!(faded.b(), 255);
        assert_eq!(faded.a(), 127);

        assert_eq!(fade_color(base, 1.0).a(), 255);
        assert_eq!(fade_color(base, 0.0).a(), 0);
    }

    #[test]
    fn test_fade_color_clamps_out_of_range_alpha() {
        let base = Color32::from_rgb(10, 20, 30);
        assert_eq!(fade_color(base, 2.5).a(), 255);
        assert_eq!(fade_color(base, -1.0).a(), 0);
    }

    #[test]
    fn test_ease_out_shape() {
        assert!((ease_out(0.0)).abs() < 0.0001);
        assert!((ease_out(0.5) - 0.75).abs() < 0.0001);
        assert!((ease_out(1.0) - 1.0).abs() < 0.0001);

        assert!((ease_out(-0.5)).abs() < 0.0001);
        assert!((ease_out(1.5) - 1.0).abs() < 0.0001);

        let mut previous = 0.0;
        for step in 1..=10 {
            let value = ease_out(step as f32 / 10.0);
            assert!(value >= previous);
            previous = value;
        }
    }
}
