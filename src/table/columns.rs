//! Column catalog for the predictions table.

use std::fmt;

use crate::prediction::{Prediction, ScoreClass};

/// Identifies one table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnId {
    Id,
    Imagen,
    Score(ScoreClass),
}

impl ColumnId {
    /// Every column in display order.
    pub const ALL: [ColumnId; 14] = [
        ColumnId::Id,
        ColumnId::Imagen,
        ColumnId::Score(ScoreClass::Bicycle),
        ColumnId::Score(ScoreClass::Cabinet),
        ColumnId::Score(ScoreClass::Chair),
        ColumnId::Score(ScoreClass::CoffeMaker),
        ColumnId::Score(ScoreClass::Fan),
        ColumnId::Score(ScoreClass::Kettle),
        ColumnId::Score(ScoreClass::Lamp),
        ColumnId::Score(ScoreClass::Mug),
        ColumnId::Score(ScoreClass::Sofa),
        ColumnId::Score(ScoreClass::Stapler),
        ColumnId::Score(ScoreClass::Table),
        ColumnId::Score(ScoreClass::Toaster),
    ];

    /// Field name of the column.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Imagen => "imagen",
            Self::Score(class) => class.key(),
        }
    }

    /// Spanish header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Imagen => "Imagen",
            Self::Score(class) => class.label(),
        }
    }

    pub fn sortable(self) -> bool {
        !matches!(self, Self::Imagen)
    }

    pub fn hideable(self) -> bool {
        true
    }

    /// Raw cell value as a string, the form the filters match against.
    pub fn raw_text(self, prediction: &Prediction) -> String {
        match self {
            Self::Id => prediction.id.clone(),
            Self::Imagen => prediction.imagen.clone(),
            Self::Score(class) => prediction.scores.get(class).to_string(),
        }
    }

    /// Rendered cell.
    pub fn cell(self, prediction: &Prediction) -> Cell {
        match self {
            Self::Id => Cell::Text(prediction.id.clone()),
            Self::Imagen => Cell::Image(prediction.imagen.clone()),
            Self::Score(class) => Cell::Text(format_score(prediction.scores.get(class))),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Formatted content of a single table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    /// Image URL; empty means "use the placeholder".
    Image(String),
}

/// Scores are printed verbatim followed by a single `" %"`.
pub fn format_score(value: f64) -> String {
    format!("{value} %")
}
