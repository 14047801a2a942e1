use crate::Result;
use crate::color::Color;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fill used for rule-node diagnostic boxes (`rgba(255, 0, 0, 0.1)`).
///
/// Alpha values here are the ones the CSS text parses to, so defaults and parsed
/// configuration compare equal.
pub const RULE_OVERLAY_RECT_COLOR: Color = Color::rgba(255, 0, 0, 25);

/// How ink and recognized shapes are painted.
///
/// The value is immutable once built: the `with_*` methods return adjusted copies, so a
/// temporary override never leaks into the parameters a caller still holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderingParameters {
    color: Color,
    rect_color: Color,
    width: f64,
    show_bounding_boxes: bool,
}

impl Default for RenderingParameters {
    fn default() -> Self {
        Self {
            color: Color::rgba(0, 0, 0, 229),
            rect_color: Color::rgba(0, 0, 0, 51),
            width: 4.0,
            show_bounding_boxes: false,
        }
    }
}

impl RenderingParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a (possibly partial) camelCase JSON object; missing keys keep their defaults.
    ///
    /// ```
    /// use inkmath_render::RenderingParameters;
    ///
    /// let params = RenderingParameters::from_value(&serde_json::json!({
    ///     "showBoundingBoxes": true,
    ///     "color": "navy"
    /// }))?;
    /// assert!(params.show_bounding_boxes());
    /// assert_eq!(params.width(), RenderingParameters::default().width());
    /// # Ok::<(), inkmath_render::Error>(())
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Parameters for the diagnostic box drawn over a rule node.
    ///
    /// Built from defaults rather than from the caller's parameters, so only the overlay colors
    /// differ from a fresh instance.
    pub fn rule_overlay() -> Self {
        Self::default()
            .with_color(Color::RED)
            .with_rect_color(RULE_OVERLAY_RECT_COLOR)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rect_color(&self) -> Color {
        self.rect_color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn show_bounding_boxes(&self) -> bool {
        self.show_bounding_boxes
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_rect_color(mut self, rect_color: Color) -> Self {
        self.rect_color = rect_color;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_show_bounding_boxes(mut self, show: bool) -> Self {
        self.show_bounding_boxes = show;
        self
    }
}
