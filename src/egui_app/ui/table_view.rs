use super::EguiApp;
use super::style;
use crate::egui_app::view_model;
use crate::table::{Cell, ColumnHeader, ColumnId, PAGE_SIZES, TableSnapshot};
use eframe::egui::{self, Align, Layout, RichText, Sense, Ui, Vec2};

const THUMBNAIL_SIZE: Vec2 = Vec2::splat(40.0);
const FOOTER_HEIGHT: f32 = 72.0;
const EMPTY_ROW_HEIGHT: f32 = 96.0;

impl EguiApp {
    /// Filter bar, grid, pagination and footer.
    pub(super) fn render_table(&mut self, ui: &mut Ui) {
        self.render_filter_bar(ui);
        ui.add_space(8.0);

        let snapshot = self.controller.ui.table.clone();
        let body_height = (ui.available_height() - FOOTER_HEIGHT).max(120.0);
        egui::ScrollArea::both()
            .id_salt("predictions_table")
            .max_height(body_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                let grid = egui::Grid::new("predictions_grid")
                    .striped(true)
                    .spacing([18.0, 8.0])
                    .min_row_height(THUMBNAIL_SIZE.y)
                    .show(ui, |ui| {
                        for column in &snapshot.columns {
                            self.render_header_cell(ui, column);
                        }
                        ui.end_row();
                        for row in &snapshot.rows {
                            for cell in &row.cells {
                                match cell {
                                    Cell::Text(text) => {
                                        ui.label(text);
                                    }
                                    Cell::Image(url) => self.render_thumbnail(ui, &row.id, url),
                                }
                            }
                            ui.end_row();
                        }
                    });
                if snapshot.rows.is_empty() {
                    empty_row(ui, grid.response.rect.width());
                }
            });

        ui.separator();
        self.render_pagination(ui, &snapshot);
        ui.horizontal(|ui| {
            ui.label(RichText::new(view_model::showing_label(&snapshot)).weak());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(view_model::totals_label(&snapshot)).weak());
            });
        });
    }

    fn render_filter_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let mut search = self.controller.ui.search.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut search)
                    .hint_text(view_model::SEARCH_HINT)
                    .desired_width(280.0),
            );
            if response.changed() {
                self.controller.set_search(&search);
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.menu_button("Columnas", |ui| {
                    for column in ColumnId::ALL.into_iter().filter(|c| c.hideable()) {
                        let mut visible = self.controller.is_column_visible(column);
                        if ui.checkbox(&mut visible, column.label()).changed() {
                            self.controller.set_column_visible(column, visible);
                        }
                    }
                });
            });
        });
    }

    fn render_header_cell(&mut self, ui: &mut Ui, column: &ColumnHeader) {
        if !column.sortable {
            ui.strong(column.label);
            return;
        }
        let text = format!(
            "{} {}",
            column.label,
            view_model::sort_indicator(column.sort)
        );
        let response = ui.add(egui::Button::new(RichText::new(text).strong()).frame(false));
        if response.clicked() {
            self.controller.toggle_sort(column.id);
        }
    }

    fn render_thumbnail(&mut self, ui: &mut Ui, id: &str, url: &str) {
        match self.thumbnails.row_texture(ui.ctx(), id, url) {
            Some(texture) => {
                ui.add(
                    egui::Image::new((texture, THUMBNAIL_SIZE))
                        .corner_radius(egui::CornerRadius::same(4)),
                );
            }
            None => placeholder_swatch(ui),
        }
    }

    fn render_pagination(&mut self, ui: &mut Ui, snapshot: &TableSnapshot) {
        ui.horizontal(|ui| {
            ui.label("Filas por página");
            let mut page_size = snapshot.page_size;
            egui::ComboBox::from_id_salt("page_size_combo")
                .selected_text(page_size.to_string())
                .width(64.0)
                .show_ui(ui, |ui| {
                    for size in PAGE_SIZES {
                        ui.selectable_value(&mut page_size, size, size.to_string());
                    }
                });
            if page_size != snapshot.page_size {
                self.controller.set_page_size(page_size);
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add_enabled(snapshot.can_next, egui::Button::new("⏭"))
                    .on_hover_text("Última página")
                    .clicked()
                {
                    self.controller.last_page();
                }
                if ui
                    .add_enabled(snapshot.can_next, egui::Button::new("▶"))
                    .on_hover_text("Página siguiente")
                    .clicked()
                {
                    self.controller.next_page();
                }
                if ui
                    .add_enabled(snapshot.can_previous, egui::Button::new("◀"))
                    .on_hover_text("Página anterior")
                    .clicked()
                {
                    self.controller.previous_page();
                }
                if ui
                    .add_enabled(snapshot.can_previous, egui::Button::new("⏮"))
                    .on_hover_text("Primera página")
                    .clicked()
                {
                    self.controller.first_page();
                }
                ui.label(view_model::page_label(snapshot));
            });
        });
    }
}

/// Body row shown when nothing matches; as wide as the header row.
fn empty_row(ui: &mut Ui, header_width: f32) -> egui::Response {
    let width = if header_width > 0.0 {
        header_width
    } else {
        ui.available_width()
    };
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, EMPTY_ROW_HEIGHT), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, ui.visuals().faint_bg_color);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        view_model::EMPTY_TABLE_TEXT,
        egui::TextStyle::Body.resolve(ui.style()),
        ui.visuals().weak_text_color(),
    );
    response
}

fn placeholder_swatch(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(THUMBNAIL_SIZE, Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(1.0, style::palette().swatch),
        egui::StrokeKind::Inside,
    );
}
