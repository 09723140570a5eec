use super::problem::{button_matrix, minimize_presses};
use super::solution::Solution;
use crate::error::{Error, Result};
use crate::input::read_input;
use crate::machine::lights::fewest_presses;
use crate::machine::{parse_machines, Machine};
use log::{debug, info};
use rayon::prelude::*;
use std::{fs, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "solve", about = "Minimize button presses to reach every joltage requirement")]
pub struct Solve {
    #[structopt(short = "i", parse(from_os_str))]
    pub input: PathBuf,
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: Option<PathBuf>,
    #[structopt(short = "e", long = "expect")]
    pub expect: Option<u64>,
    #[structopt(short = "l", long = "lights")]
    pub lights: bool,
    #[structopt(short = "g", long = "gzip")]
    pub gzip: bool,
    #[structopt(short = "C", long = "cores")]
    pub core_count: Option<usize>,
}

pub fn solve(
    input: PathBuf,
    output: Option<PathBuf>,
    expect: Option<u64>,
    lights: bool,
    gzip: bool,
    core_count: Option<usize>,
) -> Result<u64> {
    let machines = parse_machines(&read_input(&input, gzip)?)?;

    let cpu_count = core_count.unwrap_or_else(|| num_cpus::get() / 2).max(1);
    info!("solving {} machines on {} threads", machines.len(), cpu_count);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cpu_count)
        .build()?;

    let solutions = pool.install(|| {
        machines
            .par_iter()
            .enumerate()
            .map(|(i, machine)| {
                solve_machine(i + 1, machine, lights).map_err(|e| Error::Machine {
                    machine: i + 1,
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let checksum = solutions.iter().map(|sol| sol.total).sum::<u64>();
    println!("Sum of bests = {}", checksum);

    if lights {
        let total = solutions.iter().filter_map(|sol| sol.lights).sum::<u64>();
        println!("Fewest presses for lights = {}", total);
    }

    if let Some(output) = output {
        serde_json::to_writer_pretty(fs::File::create(&output)?, &solutions)?;
        info!("wrote {} solutions to {}", solutions.len(), output.display());
    }

    match expect {
        Some(expected) if expected != checksum => Err(Error::ChecksumMismatch {
            expected,
            actual: checksum,
        }),
        _ => Ok(checksum),
    }
}

fn solve_machine(idx: usize, machine: &Machine, lights: bool) -> Result<Solution> {
    let a = button_matrix(&machine.buttons, machine.joltages.len())?;
    let presses = minimize_presses(&a, &machine.joltages)?;

    let lights = match lights {
        true => Some(fewest_presses(&machine.lights, &machine.buttons)?),
        false => None,
    };

    let sol = Solution::new(idx, presses, lights);
    debug!("machine {}: {:?} ({} presses)", idx, sol.presses, sol.total);
    Ok(sol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn machine_errors_are_numbered() {
        let machine: Machine = "[.] (0) {1}".parse().unwrap();
        let sol = solve_machine(4, &machine, true).unwrap();
        assert_eq!(sol, Solution::new(4, vec![1], Some(0)));

        let path = std::env::temp_dir().join(format!("pressplan-solve-{}.txt", std::process::id()));
        fs::write(&path, "[#] (0) {1}\n[##] (0) {1,1}\n").unwrap();
        let err = solve(path.clone(), None, None, false, false, Some(1)).unwrap_err();
        fs::remove_file(path).unwrap();

        match err {
            Error::Machine { machine, source } => {
                assert_eq!(machine, 2);
                assert!(matches!(*source, Error::NotOptimal(_) | Error::Solver(_)));
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
