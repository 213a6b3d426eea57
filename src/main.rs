use std::env;

mod app;
mod config;
mod library;
mod player;
mod runtime;
mod ui;

const USAGE: &str = "\
usage: peony [--print-config] [--help] [--version]

keys: j/k move, gg/G top/bottom, enter select, p play, u pause, s stop,
      space play/pause, q quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_fallback) = config::Settings::load_or_default();
    if let Some(reason) = &config_fallback {
        eprintln!("peony: {reason}, using defaults");
    }

    match env::args().nth(1).as_deref() {
        Some("--print-config") => {
            print!("{}", settings.to_toml()?);
            Ok(())
        }
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            Ok(())
        }
        Some("-V") | Some("--version") => {
            println!("peony {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(other) => {
            eprintln!("peony: unknown argument `{other}`\n{USAGE}");
            std::process::exit(2);
        }
        None => runtime::run(settings, config_fallback),
    }
}
