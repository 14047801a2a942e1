use crate::geom::{BoundingBox, Point};
use serde::{Deserialize, Serialize};

/// One continuous pen gesture.
///
/// Strokes carry no identity of their own: recognition results address them by their position
/// in the input sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "StrokeJson", into = "StrokeJson")]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn from_xy(xs: &[f64], ys: &[f64]) -> crate::Result<Self> {
        if xs.len() != ys.len() {
            return Err(crate::Error::invalid_model(format!(
                "stroke has {} x values but {} y values",
                xs.len(),
                ys.len()
            )));
        }
        Ok(Self::new(
            xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect(),
        ))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `None` for a stroke without points.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter().copied())
    }
}

/// Wire shape used by ink recognition services: parallel coordinate arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StrokeJson {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TryFrom<StrokeJson> for Stroke {
    type Error = crate::Error;

    fn try_from(value: StrokeJson) -> Result<Self, Self::Error> {
        if let Some(kind) = value.kind.as_deref() {
            if kind != "stroke" {
                return Err(crate::Error::invalid_model(format!(
                    "expected a stroke, found `{kind}`"
                )));
            }
        }
        Stroke::from_xy(&value.x, &value.y)
    }
}

impl From<Stroke> for StrokeJson {
    fn from(value: Stroke) -> Self {
        Self {
            kind: None,
            x: value.points.iter().map(|p| p.x).collect(),
            y: value.points.iter().map(|p| p.y).collect(),
        }
    }
}

/// An input element the layout pass may consult when bounding a recognized tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Component {
    Stroke {
        #[serde(flatten)]
        stroke: Stroke,
    },
    /// A typeset character placed by the host, e.g. after converting ink to font.
    #[serde(rename_all = "camelCase")]
    Glyph {
        label: String,
        bounding_box: BoundingBox,
    },
}

impl Component {
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Component::Stroke { stroke } => stroke.bounding_box(),
            Component::Glyph { bounding_box, .. } => Some(*bounding_box),
        }
    }
}

impl From<Stroke> for Component {
    fn from(stroke: Stroke) -> Self {
        Component::Stroke { stroke }
    }
}
