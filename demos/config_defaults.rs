use std::error::Error;

use env_logger::Env;
use ini_store::IniStore;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let path = std::env::temp_dir().join("ini-store-demo.ini");

    // First run: the file is missing, so every lookup inserts its default
    let mut config = IniStore::with_file(&path, true)?;
    let listen = config.get_str("General", "listen", "127.0.0.1").to_string();
    let port: u16 = config.get("General", "port", 25500)?;
    let api_mode: bool = config.get("General", "api_mode", false)?;
    let cache_ttl: u32 = config.get_or_default("Cache", "ttl", 300);

    info!("listen={} port={} api_mode={} cache_ttl={}", listen, port, api_mode, cache_ttl);

    config.set("General", "api_mode", &true);
    println!("Current content:\n{}", config);

    // Auto-sync writes the file here
    config.close()?;
    info!("Wrote {}", path.display());

    let reread = IniStore::with_file(&path, false)?;
    println!("Sections: {:?}", reread.section_names().collect::<Vec<_>>());

    Ok(())
}
