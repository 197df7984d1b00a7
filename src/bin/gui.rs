use fractal_zoom::{ExplorerConfig, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };

    RunGuiCommand::new(config).execute()
}
