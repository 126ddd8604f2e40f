use super::{app::cell_at, App, Config};
use crate::Variant;
use eframe::egui::{
    load::SizedTexture, pos2, vec2, Button, DragValue, Image, RichText, Sense, Slider, Stroke,
    TextEdit, Ui,
};
use std::path::PathBuf;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button<'static> {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.is_paused { "Play" } else { "Pause" };
            if ui.add(Self::new_button(text)).clicked() {
                self.toggle_pause(std::time::Instant::now());
            }

            if ui
                .add_enabled(self.is_paused, Self::new_button("Next step"))
                .clicked()
            {
                self.do_one_step = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Speed: "));
            ui.add(
                Slider::new(
                    &mut self.generations_per_second,
                    1.0..=Config::MAX_GENERATIONS_PER_SECOND,
                )
                .logarithmic(true)
                .suffix(" gen/s"),
            );
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Automaton: "));
            let mut variant = self.session.variant();
            ui.radio_value(&mut variant, Variant::Life, Self::new_text("Life"));
            ui.radio_value(&mut variant, Variant::Wireworld, Self::new_text("Wireworld"));
            self.switch_variant(variant);
        });
    }

    fn draw_edit_controls(&mut self, ui: &mut Ui) {
        let variant = self.session.variant();
        if variant.state_count() > 2 {
            ui.horizontal(|ui| {
                ui.label(Self::new_text("Draw: "));
                for code in 1..variant.state_count() {
                    ui.radio_value(
                        &mut self.brush,
                        code,
                        Self::new_text(Config::state_label(variant, code))
                            .color(Config::state_color(variant, code)),
                    );
                }
            });
        }

        if variant.supports_random_fill() {
            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Random fill")).clicked() {
                    self.fill_random();
                }
                ui.add(DragValue::new(&mut self.random_cells).range(1..=100_000));
                ui.label(Self::new_text(" cells"));
            });
        }

        if ui.add(Self::new_button("Clear")).clicked() {
            self.clear();
        }
    }

    fn draw_file_controls(&mut self, ui: &mut Ui) {
        ui.add_sized(
            Config::FILENAME_INPUT_FIELD_SIZE,
            TextEdit::singleline(&mut self.filename),
        );
        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Load")).clicked() {
                let path = PathBuf::from(&self.filename);
                self.load_file(&path);
            }
            if ui.add(Self::new_button("Save")).clicked() {
                self.save_file();
            }
        });
        if !self.status.is_empty() {
            ui.label(Self::new_text(&self.status));
        }
    }

    fn draw_counters(&mut self, ui: &mut Ui) {
        let variant = self.session.variant();
        ui.label(Self::new_text(&format!(
            "{}: {}",
            Config::population_label(variant),
            self.session.population()
        )));
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.session.generation()
        )));
        if !self.is_paused {
            ui.label(Self::new_text(&format!(
                "Measured: {:.1} gen/s",
                self.ticker.rate()
            )));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| self.draw_simulation_controls(ui));
            });
            ui.add_space(Config::WIDGET_GAP);
            ui.group(|ui| {
                ui.vertical(|ui| self.draw_edit_controls(ui));
            });
            ui.add_space(Config::WIDGET_GAP);
            ui.group(|ui| {
                ui.vertical(|ui| self.draw_file_controls(ui));
            });
            ui.add_space(Config::WIDGET_GAP);
            self.draw_counters(ui);
        });
    }

    fn draw_field(&mut self, ui: &mut Ui, size_px: f32) {
        let (rows, columns) = (self.session.rows(), self.session.columns());
        let cell_px = (size_px / rows.max(columns) as f32).floor().max(1.);
        let size = vec2(cell_px * columns as f32, cell_px * rows as f32);

        let source = SizedTexture::new(self.texture.id(), size);
        let response = ui.add(
            Image::from_texture(source)
                .fit_to_exact_size(size)
                .sense(Sense::click()),
        );
        let rect = response.rect;

        let painter = ui.painter_at(rect);
        let stroke = Stroke::new(Config::GRID_LINE_WIDTH, Config::GRID_LINE_COLOR);
        for column in 0..=columns {
            let x = rect.left() + column as f32 * cell_px;
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
        }
        for row in 0..=rows {
            let y = rect.top() + row as f32 * cell_px;
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some((row, column)) = cell_at(rect, pos, rows, columns) {
                    self.edit(row, column);
                }
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();
        let size_px = area
            .y
            .min(area.x - Config::CONTROL_PANEL_WIDTH - Config::FRAME_MARGIN)
            .max(1.);

        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            ui.vertical_centered(|ui| {
                self.draw_field(ui, size_px);
            });
        });
    }
}
