use std::path::PathBuf;

use clap::Parser;
use cubecloud::{app, Config, Container, Viewport};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(short, long, default_value = "1024x768")]
    /// Viewport dimension in format `width`x`height`
    dimensions: Viewport,

    #[arg(long, default_value = "webgl")]
    /// Id of the container the surface is mounted under
    mount: String,

    #[arg(long = "spp")]
    /// Samples per pixels
    sample_per_pixel: Option<u32>,

    #[arg(long, default_value = ".")]
    /// Directory the rendered surface is written to
    outdir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = Config::new(args.dimensions);
    if let Some(spp) = args.sample_per_pixel {
        config.render.samples_per_pixel = spp;
    }

    let mut host = Container::new(args.mount);
    app::run_with_config(&mut host, config)?;

    std::fs::create_dir_all(&args.outdir)?;
    for (i, surface) in host.children().iter().enumerate() {
        let name = if i == 0 {
            format!("{}.png", host.id())
        } else {
            format!("{}-{i}.png", host.id())
        };
        surface.borrow().save(args.outdir.join(name))?;
    }

    Ok(())
}
