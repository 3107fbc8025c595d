use bizprofile::config::Config;

fn main() {
    let config = Config::try_load_from_document();
    let log_level = config
        .as_ref()
        .map_or(log::Level::Info, |config| config.log_level);
    bizprofile::init_logging(log_level);
    console_error_panic_hook::set_once();
    let config = config.unwrap_or_else(|err| {
        log::warn!("Invalid configuration, falling back to defaults: {err:#}");
        Config::default()
    });
    log::info!("Start web application");
    bizprofile::run(config);
}
