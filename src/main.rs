use eframe::egui;
use flashdeck::gui::FlashdeckApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flashdeck",
        options,
        Box::new(|cc| Ok(Box::new(FlashdeckApp::new(cc)))),
    )
}
