use super::{Config, Ticker};
use crate::{Paint, Session, Variant};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, Rect, TextureHandle,
    TextureOptions,
};
use log::{error, info};
use std::{
    path::Path,
    time::{Duration, Instant},
};

pub struct App {
    pub(super) session: Session,       // Engine of the selected automaton.
    pub(super) texture: TextureHandle, // One texel per interior cell.
    pub(super) image: ColorImage,      // CPU copy of the texture, patched from paints.
    pub(super) image_dirty: bool,      // The texture lags behind `image`.
    pub(super) is_paused: bool,        // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,      // Do one step and pause.
    pub(super) generations_per_second: f64,
    pub(super) random_cells: usize, // Cells added by "Random fill".
    pub(super) brush: u8,           // State code painted by a click.
    pub(super) filename: String,    // File used by "Load" and "Save".
    pub(super) status: String,      // Outcome of the last file operation.
    pub(super) ticker: Ticker,
}

impl App {
    pub fn new(ctx: &Context, session: Session) -> Self {
        let image = ColorImage::new(
            [session.columns(), session.rows()],
            Config::state_color(session.variant(), 0),
        );
        let mut app = Self {
            texture: ctx.load_texture("cellworld field", image.clone(), TextureOptions::NEAREST),
            image,
            image_dirty: true,
            session,
            is_paused: true,
            do_one_step: false,
            generations_per_second: Config::GENERATIONS_PER_SECOND,
            random_cells: Config::RANDOM_CELLS,
            brush: 1,
            filename: Config::FILENAME.to_string(),
            status: String::new(),
            ticker: Ticker::default(),
        };
        app.repaint_all();
        app
    }

    /// Pauses or resumes; resuming starts the rate measurement afresh.
    pub(super) fn toggle_pause(&mut self, now: Instant) {
        self.is_paused = !self.is_paused;
        if !self.is_paused {
            self.ticker.restart(now);
        }
    }

    /// Rebuilds the whole image, needed after load, clear and variant switch.
    pub(super) fn repaint_all(&mut self) {
        let variant = self.session.variant();
        for (pixel, code) in self.image.pixels.iter_mut().zip(self.session.codes()) {
            *pixel = Config::state_color(variant, code);
        }
        self.image_dirty = true;
    }

    pub(super) fn apply(&mut self, paints: &[Paint]) {
        let (variant, columns) = (self.session.variant(), self.session.columns());
        for paint in paints {
            let idx = (paint.row - 1) * columns + (paint.column - 1);
            self.image.pixels[idx] = Config::state_color(variant, paint.code);
        }
        self.image_dirty |= !paints.is_empty();
    }

    pub(super) fn step_once(&mut self) {
        let paints = self.session.step();
        self.apply(&paints);
    }

    pub(super) fn switch_variant(&mut self, variant: Variant) {
        if variant == self.session.variant() {
            return;
        }
        match Session::new(variant, self.session.rows(), self.session.columns()) {
            Ok(session) => {
                self.session = session;
                self.brush = 1;
                self.is_paused = true;
                self.repaint_all();
                info!("switched to {variant}");
            }
            Err(e) => error!("cannot switch to {variant}: {e}"),
        }
    }

    pub(super) fn clear(&mut self) {
        self.session.clear();
        self.repaint_all();
    }

    pub(super) fn fill_random(&mut self) {
        match self.session.fill_random(self.random_cells, None) {
            Ok(paints) => self.apply(&paints),
            Err(e) => self.status = e.to_string(),
        }
    }

    pub(super) fn edit(&mut self, row: usize, column: usize) {
        match self.session.toggle(row, column, self.brush) {
            Ok(paint) => self.apply(&[paint]),
            Err(e) => error!("edit at ({row}, {column}) rejected: {e}"),
        }
    }

    pub(super) fn load_text(&mut self, source: &str, text: &str) {
        let report = self.session.load(text);
        self.repaint_all();
        self.status = if report.is_exact() {
            format!("Loaded {source}")
        } else {
            format!(
                "Loaded {source}: {} cells padded, {} glyphs dropped",
                report.padded, report.dropped
            )
        };
        info!("{}", self.status);
    }

    pub(super) fn load_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(text) => self.load_text(&path.display().to_string(), &text),
            Err(e) => {
                self.status = format!("Cannot read {}: {e}", path.display());
                error!("{}", self.status);
            }
        }
    }

    pub(super) fn save_file(&mut self) {
        self.status = match std::fs::write(&self.filename, self.session.dump()) {
            Ok(()) => format!("Saved {}", self.filename),
            Err(e) => format!("Cannot write {}: {e}", self.filename),
        };
        info!("{}", self.status);
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (toggle, dropped) = ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            (
                input.key_pressed(Key::E) && !input.modifiers.ctrl,
                input.raw.dropped_files.clone(),
            )
        });
        if toggle {
            self.toggle_pause(Instant::now());
        }

        for file in dropped {
            if let Some(path) = &file.path {
                self.load_file(path);
            } else if let Some(bytes) = &file.bytes {
                self.load_text(&file.name, &String::from_utf8_lossy(bytes));
            }
        }
    }

    /// Runs due generations; returns how long to wait for the next one.
    fn update_engine(&mut self) -> Option<Duration> {
        if self.do_one_step {
            self.do_one_step = false;
            self.step_once();
        }
        if self.is_paused {
            return None;
        }

        let wait = self.ticker.poll(Instant::now(), self.generations_per_second);
        if wait.is_none() {
            self.step_once();
        }
        Some(wait.unwrap_or_else(|| Ticker::interval(self.generations_per_second)))
    }

    fn upload_texture(&mut self) {
        if self.image_dirty {
            self.texture.set(self.image.clone(), TextureOptions::NEAREST);
            self.image_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        let wait = self.update_engine();
        self.upload_texture();

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| self.draw(ui));

        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Maps a pointer position inside the drawn field to interior coordinates.
pub(super) fn cell_at(
    field: Rect,
    pos: eframe::egui::Pos2,
    rows: usize,
    columns: usize,
) -> Option<(usize, usize)> {
    if !field.contains(pos) {
        return None;
    }
    let rel = pos - field.left_top();
    let row = (rel.y / field.height() * rows as f32) as usize + 1;
    let column = (rel.x / field.width() * columns as f32) as usize + 1;
    // the bottom and right edges belong to the last cell
    Some((row.min(rows), column.min(columns)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2};

    #[test]
    fn test_cell_at() {
        let field = Rect::from_min_size(pos2(10., 20.), vec2(100., 50.));
        assert_eq!(cell_at(field, pos2(10., 20.), 5, 10), Some((1, 1)));
        assert_eq!(cell_at(field, pos2(29.9, 39.9), 5, 10), Some((2, 2)));
        assert_eq!(cell_at(field, pos2(110., 70.), 5, 10), Some((5, 10)));
        assert_eq!(cell_at(field, pos2(5., 30.), 5, 10), None);
    }

    #[test]
    fn test_resume_restarts_rate_measurement() {
        let session = Session::new(Variant::Life, 4, 4).unwrap();
        let mut app = App::new(&Context::default(), session);
        let start = Instant::now();

        app.toggle_pause(start);
        assert!(!app.is_paused);
        let later = start + Duration::from_secs(1);
        assert!(app.ticker.poll(later, 10.).is_none());
        let measured = app.ticker.rate();
        assert!(measured > 0.);

        app.toggle_pause(later);
        assert!(app.is_paused);
        // a long pause must not count as one slow generation
        let resumed = later + Duration::from_secs(60);
        app.toggle_pause(resumed);
        assert!(!app.is_paused);
        assert_eq!(app.ticker.rate(), 0.);
        assert!(app.ticker.poll(resumed, 10.).is_some());
    }
}
