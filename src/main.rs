use electrostatics_viz::app;

fn main() {
    let config_path = std::env::args().nth(1);
    if let Err(e) = app::run(config_path.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
