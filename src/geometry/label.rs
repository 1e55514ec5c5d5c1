use super::{Point, Rect};
use crate::options::LabelStyle;
use serde::{Deserialize, Serialize};

const PILL_HEIGHT_RATIO: f64 = 1.6;
const GLYPH_WIDTH_RATIO: f64 = 0.6;
const PILL_PADDING_RATIO: f64 = 1.2;

/// A percentage label with its background pill, centered on `anchor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub anchor: Point,
    pub font_size: f64,
    pub pill: LabelPill,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPill {
    pub rect: Rect,
    pub corner_radius: f64,
}

impl Label {
    /// Builds the label for a band of the given thickness.
    pub fn percent(percent: f64, anchor: Point, thickness: f64, style: &LabelStyle) -> Self {
        let text = format_percent(percent);
        let font_size = (thickness * style.scale).clamp(style.min_font_size, style.max_font_size);

        let height = font_size * PILL_HEIGHT_RATIO;
        let width = font_size * (GLYPH_WIDTH_RATIO * text.chars().count() as f64 + PILL_PADDING_RATIO);
        let pill = LabelPill {
            rect: Rect::new(anchor.x - width / 2.0, anchor.y - height / 2.0, width, height),
            corner_radius: height / 2.0,
        };

        Self {
            text,
            anchor,
            font_size,
            pill,
        }
    }
}

/// `0.7 -> "70%"`, `1/3 -> "33.3%"`.
pub fn format_percent(percent: f64) -> String {
    let tenths = (percent * 1000.0).round() / 10.0;
    if tenths.fract() == 0.0 {
        format!("{}%", tenths as i64)
    } else {
        format!("{:.1}%", tenths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formatting_drops_trailing_zero() {
        assert_eq!(format_percent(0.7), "70%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(1.0 / 3.0), "33.3%");
        assert_eq!(format_percent(0.0004), "0%");
    }

    #[test]
    fn font_size_is_clamped() {
        let style = LabelStyle::default();
        let tiny = Label::percent(0.5, Point::new(0.0, 0.0), 1.0, &style);
        let huge = Label::percent(0.5, Point::new(0.0, 0.0), 1000.0, &style);
        assert_eq!(tiny.font_size, style.min_font_size);
        assert_eq!(huge.font_size, style.max_font_size);
    }

    #[test]
    fn pill_is_centered_on_anchor() {
        let label = Label::percent(0.25, Point::new(40.0, 10.0), 30.0, &LabelStyle::default());
        let rect = label.pill.rect;
        assert!((rect.x + rect.width / 2.0 - 40.0).abs() < 1e-9);
        assert!((rect.y + rect.height / 2.0 - 10.0).abs() < 1e-9);
        assert_eq!(label.pill.corner_radius, rect.height / 2.0);
    }
}
