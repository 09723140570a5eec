use super::machine::{parse_machines, Button, Indicators};
use crate::error::{Error, Result};
use crate::input::read_input;
use hashbrown::HashSet;
use log::{debug, info};
use std::collections::VecDeque;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lights", about = "Fewest presses to configure the indicator lights")]
pub struct Lights {
    #[structopt(short = "i", parse(from_os_str))]
    pub input: PathBuf,
    #[structopt(short = "g", long = "gzip")]
    pub gzip: bool,
}

pub fn lights(input: PathBuf, gzip: bool) -> Result<u64> {
    let machines = parse_machines(&read_input(&input, gzip)?)?;
    info!("configuring lights on {} machines", machines.len());

    let total = total_presses(machines.iter().map(|m| (&m.lights, &m.buttons[..])))?;
    println!("Fewest presses for lights = {}", total);
    Ok(total)
}

pub(crate) fn total_presses<'a>(
    machines: impl Iterator<Item = (&'a Indicators, &'a [Button])>,
) -> Result<u64> {
    machines
        .enumerate()
        .map(|(i, (goal, buttons))| {
            let presses = fewest_presses(goal, buttons).map_err(|e| Error::Machine {
                machine: i + 1,
                source: Box::new(e),
            })?;
            debug!("machine {}: {} needs {} presses", i + 1, goal, presses);
            Ok(presses)
        })
        .sum()
}

/// Breadth-first search from all lights off to `goal`.
pub fn fewest_presses(goal: &Indicators, buttons: &[Button]) -> Result<u64> {
    let start = Indicators::off(goal.len);
    if start == *goal {
        return Ok(0);
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start.state);
    queue.push_back((start, 0));

    while let Some((state, count)) = queue.pop_front() {
        for button in buttons {
            let next = state.press(button);
            if next == *goal {
                return Ok(count + 1);
            }
            if visited.insert(next.state) {
                queue.push_back((next, count + 1));
            }
        }
    }

    Err(Error::Unreachable(goal.to_string()))
}
