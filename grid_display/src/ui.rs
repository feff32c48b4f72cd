// ui.rs - egui front end: paints the controller's cells and routes clicks to it

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use crate::controller::GridController;
use crate::error::GridError;
use crate::grid::CellIndex;
use crate::patterns::{self, Pattern};

const BOX_SIZE: f32 = 40.0;
const SPACING: f32 = 2.0;

pub struct GridApp {
    pub controller: GridController,
    pub alive_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub last_error: Option<String>,
}

impl GridApp {
    pub fn new(controller: GridController) -> Self {
        Self {
            controller,
            alive_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            last_error: None,
        }
    }

    fn report<T>(&mut self, result: Result<T, GridError>) {
        if let Err(e) = result {
            log::warn!("{}", e);
            self.last_error = Some(e.to_string());
        }
    }
}

/// Maps a pointer position to the cell under it. Gaps between boxes hit nothing.
pub fn cell_at(pos: Pos2, origin: Pos2, box_size: f32, spacing: f32, size: usize) -> Option<CellIndex> {
    let pitch = box_size + spacing;
    let dx = pos.x - origin.x;
    let dy = pos.y - origin.y;
    if dx < 0.0 || dy < 0.0 {
        return None;
    }

    let col = (dx / pitch) as usize;
    let row = (dy / pitch) as usize;
    if row >= size || col >= size {
        return None;
    }
    if dx - col as f32 * pitch > box_size || dy - row as f32 * pitch > box_size {
        return None;
    }

    Some(CellIndex::from_row_col(row, col, size))
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.controller.to_string());

            // Controls
            ui.horizontal(|ui| {
                if ui.button("↺ Reset").clicked() {
                    let result = self.controller.reset();
                    self.report(result);
                }

                if ui.button("⏹ Clear").clicked() {
                    let result = self.controller.clear();
                    self.report(result);
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name())
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name());
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    let pattern: Pattern = patterns::PATTERNS[self.selected_pattern];
                    let result = self.controller.apply_pattern(pattern);
                    self.report(result);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Alive:");
                ui.color_edit_button_srgba(&mut self.alive_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead.");

            ui.separator();

            // Draw the grid
            let size = self.controller.size();
            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((BOX_SIZE + SPACING) * size as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            for (i, cell) in self.controller.cells().iter().enumerate() {
                let index = CellIndex(i);
                let x = start_pos.x + index.col(size) as f32 * (BOX_SIZE + SPACING);
                let y = start_pos.y + index.row(size) as f32 * (BOX_SIZE + SPACING);
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(BOX_SIZE));

                let cell_color = if cell.state().is_alive() {
                    self.alive_color
                } else {
                    self.dead_color
                };

                painter.rect_filled(rect, 2.0, cell_color);
                painter.rect_stroke(rect, 2.0, Stroke::new(0.5, Color32::from_gray(60)));
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some(index) = cell_at(pos, start_pos, BOX_SIZE, SPACING, size) {
                        let result = self.controller.click(index);
                        self.report(result);
                    }
                }
            }

            ui.separator();

            // Statistics
            let alive = self.controller.alive_count();
            let total = self.controller.cell_count().max(1);
            ui.horizontal(|ui| {
                ui.label(format!("Alive cells: {}", alive));
                ui.label(format!("Dead cells: {}", self.controller.dead_count()));
                ui.label(format!("Population: {:.1}%", (alive as f32 / total as f32) * 100.0));
            });

            let indices: Vec<String> = self
                .controller
                .alive_indices()
                .iter()
                .map(|i| i.to_string())
                .collect();
            ui.label(format!("Alive indices: [{}]", indices.join(", ")));

            if let Some(err) = &self.last_error {
                ui.colored_label(Color32::RED, err.as_str());
            }
        });
    }
}
