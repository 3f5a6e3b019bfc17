use anyhow::Context;

mod demo;
mod dispatch;
mod render;

fn main() -> anyhow::Result<()> {
    retail_observability::init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out).context("inventory demo failed")?;

    Ok(())
}
