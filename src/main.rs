use std::env;
use std::error::Error;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgGroup, ArgMatches};
use log::debug;

use puzzle_solver::board_formatter::DrawBoard;
use puzzle_solver::config::{Family, Method};
use puzzle_solver::parser::{ParseState, PuzzleEntry};
use puzzle_solver::puzzles::lockout::Lockout;
use puzzle_solver::puzzles::sliding::Sliding;
use puzzle_solver::puzzles::tilt::Tilt;
use puzzle_solver::solution_formatter::SolutionFormatter;
use puzzle_solver::solver::{Outcome, SearchLimits, SolverOk};
use puzzle_solver::{LoadPuzzles, Solve};

#[derive(Debug)]
struct Options {
    method: Method,
    boards: bool,
    verbose: bool,
    puzzle_id: Option<u32>,
    limits: SearchLimits,
    #[cfg(feature = "graph")]
    graph: Option<String>,
}

fn main() {
    env_logger::init();

    let mut app = App::new("puzzle-solver")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sliding and tilting puzzles by depth first search")
        .arg(
            Arg::with_name("lockout")
                .short("l")
                .long("lockout")
                .help("robots sliding until they hit another robot (default)"),
        )
        .arg(
            Arg::with_name("sliding")
                .short("s")
                .long("sliding")
                .help("rectangular pieces moving one cell at a time"),
        )
        .arg(
            Arg::with_name("tilt")
                .short("t")
                .long("tilt")
                .help("tilting the board, light pieces fall into the hole"),
        )
        .arg(
            Arg::with_name("family-name")
                .short("f")
                .long("family")
                .value_name("NAME")
                .help("puzzle family by name: lockout, sliding or tilt"),
        )
        .group(ArgGroup::with_name("family").args(&["lockout", "sliding", "tilt", "family-name"]))
        .arg(
            Arg::with_name("optimize")
                .short("o")
                .long("optimize")
                .help("remove unnecessary actions from the solution"),
        )
        .arg(
            Arg::with_name("boards")
                .short("b")
                .long("boards")
                .help("print the board after every action"),
        )
        .arg(
            Arg::with_name("puzzle")
                .short("p")
                .long("puzzle")
                .value_name("ID")
                .help("solve only the puzzle with this id"),
        )
        .arg(
            Arg::with_name("max-states")
                .short("m")
                .long("max-states")
                .value_name("N")
                .help("give up after visiting N unique states"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("T")
                .long("timeout")
                .value_name("SECS")
                .help("give up after SECS seconds"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print search progress and stats"),
        )
        .arg(
            Arg::with_name("file")
                .required(true)
                .help("puzzle set, one puzzle per line"),
        );
    if cfg!(feature = "graph") {
        app = app.arg(
            Arg::with_name("graph")
                .long("graph")
                .value_name("FILE")
                .requires("puzzle")
                .conflicts_with("optimize")
                .help("write the explored states as a DOT graph"),
        );
    }
    let matches = app.get_matches();

    let path = matches.value_of("file").unwrap();
    let family = parse_family(&matches, path).unwrap_or_else(|err| {
        println!("{}", err);
        process::exit(1);
    });
    let options = parse_options(&matches).unwrap_or_else(|err| {
        println!("{}", err);
        process::exit(1);
    });
    debug!("Family {}, {:?}", family, options);

    println!("Solving {}...", path);
    let res = match family {
        Family::Lockout => solve_file(&Lockout::default(), path, &options),
        Family::Sliding => solve_file(&Sliding::new(), path, &options),
        Family::Tilt => solve_file(&Tilt::default(), path, &options),
    };
    if let Err(err) = res {
        println!("{}", err);
        process::exit(1);
    }
}

fn parse_family(matches: &ArgMatches<'_>, path: &str) -> Result<Family, String> {
    if matches.is_present("lockout") {
        Ok(Family::Lockout)
    } else if matches.is_present("sliding") {
        Ok(Family::Sliding)
    } else if matches.is_present("tilt") {
        Ok(Family::Tilt)
    } else if let Some(name) = matches.value_of("family-name") {
        name.parse::<Family>().map_err(|err| err.to_string())
    } else {
        Ok(Family::from_file_name(path).unwrap_or(Family::Lockout))
    }
}

fn parse_options(matches: &ArgMatches<'_>) -> Result<Options, String> {
    let method = if matches.is_present("optimize") {
        Method::Optimized
    } else {
        Method::Any
    };

    let puzzle_id = match matches.value_of("puzzle") {
        Some(id) => Some(id.parse::<u32>().map_err(|_| format!("Invalid puzzle id: {}", id))?),
        None => None,
    };

    let mut limits = SearchLimits::default();
    if let Some(max) = matches.value_of("max-states") {
        match max.parse::<usize>() {
            Ok(max) if max > 0 => limits.max_visited = Some(max),
            _ => return Err(format!("Invalid number of states: {}", max)),
        }
    }
    if let Some(secs) = matches.value_of("timeout") {
        let secs = secs.parse::<u64>().map_err(|_| format!("Invalid timeout: {}", secs))?;
        limits.timeout = Some(Duration::from_secs(secs));
    }

    Ok(Options {
        method,
        boards: matches.is_present("boards"),
        verbose: matches.is_present("verbose"),
        puzzle_id,
        limits,
        #[cfg(feature = "graph")]
        graph: matches.value_of("graph").map(str::to_owned),
    })
}

fn solve_file<P: ParseState + DrawBoard>(puzzle: &P, path: &str, options: &Options) -> Result<(), Box<dyn Error>> {
    let entries = path.load_puzzles(puzzle).map_err(|err| {
        let current_dir = env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| "the current directory".to_owned());
        format!("Can't load {} in {}: {}", path, current_dir, err)
    })?;

    let entries: Vec<_> = match options.puzzle_id {
        Some(id) => {
            let entry = entries
                .into_iter()
                .find(|entry| entry.id == id)
                .ok_or_else(|| format!("Puzzle #{} is not in {}", id, path))?;
            vec![entry]
        }
        None => entries,
    };

    for entry in &entries {
        println!("Puzzle #{}", entry.id);
        print!("{}", puzzle.format_board(&entry.state));

        let solver_ok = solve_entry(puzzle, entry, options)?;
        if options.verbose {
            println!("{}", solver_ok.stats);
        }

        match solver_ok.outcome {
            Outcome::Found(ref actions) => {
                println!("Solution:");
                print!(
                    "{}",
                    SolutionFormatter::new(puzzle, &entry.state, actions, options.boards)
                );
                println!("Actions: {}", actions.len());
                if let Some(len) = solver_ok.unoptimized_len {
                    if len > actions.len() {
                        println!("Optimized from {} actions", len);
                    }
                }
            }
            Outcome::Exhausted => println!("No solution"),
            Outcome::Cancelled(reason) => println!("Search cancelled: {}", reason),
        }
        println!();
    }
    Ok(())
}

#[cfg(not(feature = "graph"))]
fn solve_entry<P: ParseState + DrawBoard>(
    puzzle: &P,
    entry: &PuzzleEntry<P::State>,
    options: &Options,
) -> Result<SolverOk<P::Action>, Box<dyn Error>> {
    Ok(entry.solve(puzzle, options.method, &options.limits, options.verbose)?)
}

#[cfg(feature = "graph")]
fn solve_entry<P: ParseState + DrawBoard>(
    puzzle: &P,
    entry: &PuzzleEntry<P::State>,
    options: &Options,
) -> Result<SolverOk<P::Action>, Box<dyn Error>> {
    use puzzle_solver::solver;

    match options.graph {
        Some(ref graph_path) => {
            let (solver_ok, graph) = solver::search_graph(puzzle, &entry.state, &options.limits, options.verbose)?;
            graph.write_dot(graph_path)?;
            println!("Wrote {} states to {}", graph.node_cnt(), graph_path);
            Ok(solver_ok)
        }
        None => Ok(entry.solve(puzzle, options.method, &options.limits, options.verbose)?),
    }
}
