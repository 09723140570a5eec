mod error;
mod input;
mod machine;
mod optimize;
mod plot;

use anyhow::{Context, Result};
use machine::Lights;
use optimize::Solve;
use plot::Plot;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "pressplan", about = "Factory machine puzzle tools")]
enum Opt {
    Solve(Solve),
    Lights(Lights),
    Plot(Plot),
}

fn main() -> Result<()> {
    env_logger::init();

    match Opt::from_args() {
        Opt::Solve(solve) => {
            let input = solve.input.clone();
            optimize::solve(
                solve.input,
                solve.output,
                solve.expect,
                solve.lights,
                solve.gzip,
                solve.core_count,
            )
            .with_context(|| format!("solving {}", input.display()))?;
        }
        Opt::Lights(lights) => {
            let input = lights.input.clone();
            machine::lights(lights.input, lights.gzip)
                .with_context(|| format!("configuring lights from {}", input.display()))?;
        }
        Opt::Plot(plot) => {
            let input = plot.input.clone();
            let lines = plot.vlines.into_iter().chain(plot.hlines).collect();
            plot::plot(
                plot.input,
                plot.output,
                lines,
                plot.width,
                plot.height,
                plot.gzip,
            )
            .with_context(|| format!("plotting {}", input.display()))?;
        }
    }
    Ok(())
}
