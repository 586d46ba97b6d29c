mod app;
mod effects;
mod logging;
mod rows;

use searcher_engine::SearchSettings;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let settings = match std::env::args().nth(1) {
        Some(endpoint) => SearchSettings {
            endpoint,
            ..SearchSettings::default()
        },
        None => SearchSettings::default(),
    };

    app::run(settings)
}
