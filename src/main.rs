use booking_site::{config, PageInteractionController};
use log::{error, info};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting page interactions");
    match PageInteractionController::attach() {
        Ok(controller) => controller.persist(),
        Err(err) => error!("page interactions failed to initialize: {}", err),
    }
}
