use super::points::{parse_hline, parse_points, parse_vline, ReferenceLine};
use super::svg::render_svg;
use crate::error::{Error, Result};
use crate::input::read_input;
use log::info;
use std::{fs, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "plot", about = "Plot x,y coordinates with reference lines as SVG")]
pub struct Plot {
    #[structopt(short = "i", parse(from_os_str))]
    pub input: PathBuf,
    #[structopt(short = "o", parse(from_os_str), default_value = "plot.svg")]
    pub output: PathBuf,
    /// Vertical line at x, as `POS` or `POS:COLOR`
    #[structopt(long = "vline", number_of_values = 1, parse(try_from_str = parse_vline))]
    pub vlines: Vec<ReferenceLine>,
    /// Horizontal line at y, as `POS` or `POS:COLOR`
    #[structopt(long = "hline", number_of_values = 1, parse(try_from_str = parse_hline))]
    pub hlines: Vec<ReferenceLine>,
    #[structopt(long = "width", default_value = "1000")]
    pub width: u32,
    #[structopt(long = "height", default_value = "1000")]
    pub height: u32,
    #[structopt(short = "g", long = "gzip")]
    pub gzip: bool,
}

pub fn plot(
    input: PathBuf,
    output: PathBuf,
    lines: Vec<ReferenceLine>,
    width: u32,
    height: u32,
    gzip: bool,
) -> Result<()> {
    let points = parse_points(&read_input(&input, gzip)?)?;
    if points.is_empty() {
        return Err(Error::Empty);
    }

    fs::write(&output, render_svg(&points, &lines, width, height))?;
    info!(
        "plotted {} points and {} reference lines to {}",
        points.len(),
        lines.len(),
        output.display()
    );
    Ok(())
}
