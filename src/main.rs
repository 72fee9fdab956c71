use chemdesc_rust::{server, CONFIG};

#[tokio::main]
async fn main() {
    // .env antes del logger para que RUST_LOG también pueda venir de ahí
    let _ = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = server::run(&CONFIG).await {
        log::error!("server stopped: {e}");
        eprintln!("[chemdesc-server] {e}");
        std::process::exit(1);
    }
}
