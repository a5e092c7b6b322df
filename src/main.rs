use config::Config;
use device_file_picker::impl_rfd::FilePickerRfd;
use eframe::egui;
use gui::app::AnimalCheckerGui;
use image_classifier::impl_http::ImageClassifierHttp;
use library::logger::impl_tracing::LoggerTracing;
use library::logger::interface::Logger;
use library::logger::subscriber;
use std::sync::Arc;

mod animal_checker;
mod config;
mod device_file_picker;
mod gui;
mod image_classifier;
mod library;
mod model_catalog;
mod preview_store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    if let Err(err) = subscriber::init(&config) {
        eprintln!("Logging disabled: {err}");
    }

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerTracing::new());

    let image_classifier = Arc::new(ImageClassifierHttp::new(
        config.predict_url.clone(),
        logger.clone(),
    )?);

    let file_picker = Box::new(FilePickerRfd::new(logger.clone()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Animal Checker")
            .with_inner_size(config.window_size)
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };

    logger.info(&format!("Predictions go to {}", config.predict_url));

    eframe::run_native(
        "Animal Checker",
        options,
        Box::new(move |cc| {
            Box::new(AnimalCheckerGui::new(
                cc,
                logger,
                image_classifier,
                file_picker,
            ))
        }),
    )?;

    Ok(())
}
