use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    log::info!("starting spincube");
    let app = spincube::default();
    app.run();

    Ok(())
}
