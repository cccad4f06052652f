//! Prediction records produced by the remote classifier.

use std::fmt;

/// Placeholder thumbnail used when a prediction has no preview.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=40&width=40";

/// Minimum digit count of the numeric part of a prediction id.
const ID_MIN_DIGITS: usize = 3;

/// Build the human-readable id for the prediction stored at `index`.
///
/// `0` maps to `PRED-001`; ids wider than three digits keep every digit.
pub fn prediction_id(index: usize) -> String {
    format!("PRED-{:0width$}", index + 1, width = ID_MIN_DIGITS)
}

/// Object classes scored by the classifier, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreClass {
    Bicycle,
    Cabinet,
    Chair,
    CoffeMaker,
    Fan,
    Kettle,
    Lamp,
    Mug,
    Sofa,
    Stapler,
    Table,
    Toaster,
}

impl ScoreClass {
    /// Every class in display order.
    pub const ALL: [ScoreClass; 12] = [
        ScoreClass::Bicycle,
        ScoreClass::Cabinet,
        ScoreClass::Chair,
        ScoreClass::CoffeMaker,
        ScoreClass::Fan,
        ScoreClass::Kettle,
        ScoreClass::Lamp,
        ScoreClass::Mug,
        ScoreClass::Sofa,
        ScoreClass::Stapler,
        ScoreClass::Table,
        ScoreClass::Toaster,
    ];

    /// Canonical field name used on the wire and as column id.
    pub fn key(self) -> &'static str {
        match self {
            Self::Bicycle => "bicycle",
            Self::Cabinet => "cabinet",
            Self::Chair => "chair",
            Self::CoffeMaker => "coffeMaker",
            Self::Fan => "fan",
            Self::Kettle => "kettle",
            Self::Lamp => "lamp",
            Self::Mug => "mug",
            Self::Sofa => "sofa",
            Self::Stapler => "stapler",
            Self::Table => "table",
            Self::Toaster => "toaster",
        }
    }

    /// Spanish label shown in column headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bicycle => "Bicicleta",
            Self::Cabinet => "Gabinete",
            Self::Chair => "Silla",
            Self::CoffeMaker => "Cafetera",
            Self::Fan => "Ventilador",
            Self::Kettle => "Tetera",
            Self::Lamp => "Lámpara",
            Self::Mug => "Taza",
            Self::Sofa => "Sofá",
            Self::Stapler => "Grapadora",
            Self::Table => "Mesa",
            Self::Toaster => "Tostadora",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ScoreClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One confidence value per [`ScoreClass`]. Absent values are `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Scores {
    values: [f64; 12],
}

impl Scores {
    /// Score for a single class.
    pub fn get(&self, class: ScoreClass) -> f64 {
        self.values[class.index()]
    }

    /// Overwrite the score for a single class.
    pub fn set(&mut self, class: ScoreClass, value: f64) {
        self.values[class.index()] = value;
    }

    /// Builder-style variant of [`Scores::set`].
    pub fn with(mut self, class: ScoreClass, value: f64) -> Self {
        self.set(class, value);
        self
    }

    /// Iterate `(class, score)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreClass, f64)> + '_ {
        ScoreClass::ALL.iter().map(|class| (*class, self.get(*class)))
    }
}

/// A classified image as shown in the predictions table.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    /// Session-unique id, see [`prediction_id`].
    pub id: String,
    /// Data-URL preview of the uploaded image, or [`PLACEHOLDER_IMAGE`].
    pub imagen: String,
    /// Classifier confidence per class.
    pub scores: Scores,
}

impl Prediction {
    /// Assemble a prediction for the `index`-th entry of a session.
    pub fn new(index: usize, preview: Option<&str>, scores: Scores) -> Self {
        let imagen = match preview {
            Some(preview) if !preview.is_empty() => preview.to_string(),
            _ => PLACEHOLDER_IMAGE.to_string(),
        };
        Self {
            id: prediction_id(index),
            imagen,
            scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_zero_padded_to_three_digits() {
        assert_eq!(prediction_id(0), "PRED-001");
        assert_eq!(prediction_id(9), "PRED-010");
        assert_eq!(prediction_id(98), "PRED-099");
        assert_eq!(prediction_id(998), "PRED-999");
    }

    #[test]
    fn ids_grow_past_three_digits() {
        assert_eq!(prediction_id(999), "PRED-1000");
        assert_eq!(prediction_id(12_344), "PRED-12345");
    }

    #[test]
    fn ids_match_expected_shape_for_a_range() {
        for index in 0..2_000 {
            let id = prediction_id(index);
            let digits = id.strip_prefix("PRED-").unwrap();
            assert!(digits.len() >= 3, "{id}");
            assert!(digits.chars().all(|c| c.is_ascii_digit()), "{id}");
            assert_eq!(digits.parse::<usize>().unwrap(), index + 1);
        }
    }

    #[test]
    fn scores_default_to_zero() {
        let scores = Scores::default().with(ScoreClass::Chair, 0.5);
        for (class, value) in scores.iter() {
            if class == ScoreClass::Chair {
                assert_eq!(value, 0.5);
            } else {
                assert_eq!(value, 0.0);
            }
        }
    }

    #[test]
    fn missing_preview_uses_placeholder() {
        let prediction = Prediction::new(0, None, Scores::default());
        assert_eq!(prediction.imagen, PLACEHOLDER_IMAGE);
        let prediction = Prediction::new(1, Some(""), Scores::default());
        assert_eq!(prediction.imagen, PLACEHOLDER_IMAGE);
        assert_eq!(prediction.id, "PRED-002");
    }

    #[test]
    fn class_keys_follow_wire_names() {
        let keys: Vec<&str> = ScoreClass::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            [
                "bicycle",
                "cabinet",
                "chair",
                "coffeMaker",
                "fan",
                "kettle",
                "lamp",
                "mug",
                "sofa",
                "stapler",
                "table",
                "toaster"
            ]
        );
    }
}
