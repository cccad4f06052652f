//! Helpers to turn table snapshots and session flags into display strings.

use crate::table::{SortDirection, TableSnapshot};

pub const PAGE_TITLE: &str = "Predicciones de Objetos";
pub const ADD_PREDICTION_LABEL: &str = "Agregar Predicción";
pub const SEARCH_HINT: &str = "Buscar predicciones...";
pub const EMPTY_TABLE_TEXT: &str = "No se encontraron resultados.";
pub const DIALOG_TITLE: &str = "IA Convolucional";
pub const DIALOG_DESCRIPTION: &str = "Favor de escoger la imagen que quiere analizar";
pub const DROP_ZONE_TEXT: &str = "Arrastra una imagen aquí o haz clic para seleccionar";
/// Accepted formats shown under the drop zone text.
pub const DROP_ZONE_HINT: &str = "PNG, JPG, WebP o GIF (máx. 5MB)";

/// "Mostrando X de Y resultados": rows on this page vs filtered rows.
pub fn showing_label(snapshot: &TableSnapshot) -> String {
    format!(
        "Mostrando {} de {} resultados",
        snapshot.rows.len(),
        snapshot.filtered_count
    )
}

/// "Y de Z predicciones totales": filtered rows vs all rows.
pub fn totals_label(snapshot: &TableSnapshot) -> String {
    format!(
        "{} de {} predicciones totales",
        snapshot.filtered_count, snapshot.total_count
    )
}

/// One-based page position.
pub fn page_label(snapshot: &TableSnapshot) -> String {
    format!(
        "Página {} de {}",
        snapshot.page_index + 1,
        snapshot.page_count
    )
}

/// Header arrow for a sort state.
pub fn sort_indicator(sort: Option<SortDirection>) -> &'static str {
    match sort {
        Some(SortDirection::Asc) => "⬆",
        Some(SortDirection::Desc) => "⬇",
        None => "↕",
    }
}

pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Cargando..." } else { "Analizar" }
}
