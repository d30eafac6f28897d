//! Demo entry point.

fn main() {
    env_logger::init();
    log::info!("Starting ellipse demo");

    match ellipsewidget_app::run(std::env::args().skip(1)) {
        Ok(bounds) => println!("{bounds}"),
        Err(err) => {
            log::error!("{err}");
            eprintln!("ellipse-demo: {err}");
            std::process::exit(1);
        }
    }
}
