#![warn(clippy::all)]

use std::{error::Error, fs};

use cellworld::{App, Config, Session, Variant};
use eframe::egui::{vec2, ViewportBuilder};
use log::info;

const USAGE: &str = "Usage: cellworld [life|wireworld] [pattern.txt]";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let variant = match args.next() {
        Some(flag) if flag == "-h" || flag == "--help" => {
            println!("{USAGE}");
            return Ok(());
        }
        Some(name) => name.parse::<Variant>()?,
        None => Variant::default(),
    };

    let mut session = Session::new(variant, Config::CELLS_PER_LINE, Config::CELLS_PER_LINE)?;
    if let Some(path) = args.next() {
        let report = session.load(&fs::read_to_string(&path)?);
        info!(
            "{path}: {} cells, {} padded, {} dropped",
            report.cells, report.padded, report.dropped
        );
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1100., 760.))
            .with_min_inner_size(vec2(640.0, 360.0))
            .with_drag_and_drop(true),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        &format!("cellworld: {variant}"),
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, session)))),
    )?;
    Ok(())
}
