#[cfg(feature = "graph")]
mod graph;

pub mod optimizer;
pub mod stats;
mod visited;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use std::vec;

use log::{debug, info};

use crate::config::Method;
use crate::parser::PuzzleEntry;
use crate::puzzle::{InvalidAction, Puzzle};
use crate::Solve;

use self::stats::Stats;
use self::visited::VisitedSet;

#[cfg(feature = "graph")]
pub use self::graph::Graph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverErr {
    /// The puzzle offered an action and then refused to apply it.
    InvalidAction(InvalidAction),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::InvalidAction(ref err) => write!(f, "Puzzle rules are inconsistent: {}", err),
        }
    }
}

impl Error for SolverErr {}

impl From<InvalidAction> for SolverErr {
    fn from(err: InvalidAction) -> Self {
        SolverErr::InvalidAction(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    MaxVisited(usize),
    Timeout(Duration),
    Flag,
}

impl Display for CancelReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            CancelReason::MaxVisited(max) => write!(f, "visited {} unique states", max),
            CancelReason::Timeout(timeout) => write!(f, "timed out after {} ms", timeout.as_millis()),
            CancelReason::Flag => write!(f, "cancelled by request"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<A> {
    Found(Vec<A>),
    /// Every reachable state was visited.
    Exhausted,
    Cancelled(CancelReason),
}

impl<A> Outcome<A> {
    pub fn actions(&self) -> Option<&[A]> {
        match *self {
            Outcome::Found(ref actions) => Some(&actions[..]),
            _ => None,
        }
    }
}

/// Checked before every action the search tries. Unlimited by default.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    pub max_visited: Option<usize>,
    pub timeout: Option<Duration>,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    fn check(&self, started: Instant, visited: usize) -> Option<CancelReason> {
        if let Some(max) = self.max_visited {
            if visited >= max {
                return Some(CancelReason::MaxVisited(max));
            }
        }
        if let Some(timeout) = self.timeout {
            if started.elapsed() >= timeout {
                return Some(CancelReason::Timeout(timeout));
            }
        }
        if let Some(ref cancel) = self.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Some(CancelReason::Flag);
            }
        }
        None
    }
}

pub struct SolverOk<A> {
    pub outcome: Outcome<A>,
    pub stats: Stats,
    pub method: Method,
    /// Length before optimizing, only with `Method::Optimized`.
    pub unoptimized_len: Option<usize>,
}

impl<A> SolverOk<A> {
    fn new(outcome: Outcome<A>, stats: Stats) -> Self {
        Self {
            outcome,
            stats,
            method: Method::Any,
            unoptimized_len: None,
        }
    }
}

impl<A: Display> Debug for SolverOk<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Found(ref actions) => writeln!(f, "{}: {}", self.method, actions.len())?,
            Outcome::Exhausted => writeln!(f, "No solution")?,
            Outcome::Cancelled(reason) => writeln!(f, "Search cancelled: {}", reason)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl<P: Puzzle> Solve<P> for PuzzleEntry<P::State> {
    fn solve(
        &self,
        puzzle: &P,
        method: Method,
        limits: &SearchLimits,
        print_status: bool,
    ) -> Result<SolverOk<P::Action>, SolverErr> {
        debug!("Solving puzzle {}", self.id);
        solve(puzzle, &self.state, method, limits, print_status)
    }
}

/// Searches for any solution and shortens it if `method` asks for it.
pub fn solve<P: Puzzle>(
    puzzle: &P,
    start: &P::State,
    method: Method,
    limits: &SearchLimits,
    print_status: bool,
) -> Result<SolverOk<P::Action>, SolverErr> {
    let mut solver_ok = search(puzzle, start, limits, print_status)?;
    solver_ok.method = method;

    if method == Method::Optimized {
        if let Outcome::Found(ref mut actions) = solver_ok.outcome {
            let optimized = optimizer::optimize(puzzle, start, actions);
            info!("Optimized {} actions to {}", actions.len(), optimized.len());
            solver_ok.unoptimized_len = Some(actions.len());
            *actions = optimized;
        }
    }
    Ok(solver_ok)
}

/// Depth first search, returns the first solution in the order of `legal_actions`.
///
/// Each state (up to its canonical key) is expanded at most once.
pub fn search<P: Puzzle>(
    puzzle: &P,
    start: &P::State,
    limits: &SearchLimits,
    print_status: bool,
) -> Result<SolverOk<P::Action>, SolverErr> {
    run(puzzle, start, limits, print_status, &mut ())
}

/// Like `search` but also records every state it creates.
#[cfg(feature = "graph")]
pub fn search_graph<P: crate::board_formatter::DrawBoard>(
    puzzle: &P,
    start: &P::State,
    limits: &SearchLimits,
    print_status: bool,
) -> Result<(SolverOk<P::Action>, Graph), SolverErr> {
    let mut graph = Graph::new();
    let solver_ok = run(puzzle, start, limits, print_status, &mut graph)?;
    Ok((solver_ok, graph))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Unique,
    Duplicate,
    Goal,
}

/// Gets notified about every state the search creates.
pub(crate) trait Trace<P: Puzzle> {
    /// Returns an id other nodes can use as `parent`.
    fn add(&mut self, puzzle: &P, state: &P::State, parent: Option<usize>, kind: NodeKind) -> usize;
}

impl<P: Puzzle> Trace<P> for () {
    fn add(&mut self, _puzzle: &P, _state: &P::State, _parent: Option<usize>, _kind: NodeKind) -> usize {
        0
    }
}

struct Frame<S, A> {
    state: S,
    actions: vec::IntoIter<A>,
    node: usize,
}

fn run<P: Puzzle, T: Trace<P>>(
    puzzle: &P,
    start: &P::State,
    limits: &SearchLimits,
    print_status: bool,
    tracer: &mut T,
) -> Result<SolverOk<P::Action>, SolverErr> {
    debug!("Search called");

    let started = Instant::now();
    let mut stats = Stats::new();
    let mut visited = VisitedSet::new();

    visited.mark_and_check(puzzle, start);
    visit_depth(&mut stats, 0, print_status);
    if puzzle.is_goal(start) {
        tracer.add(puzzle, start, None, NodeKind::Goal);
        debug!("Already solved");
        return Ok(SolverOk::new(Outcome::Found(Vec::new()), stats));
    }

    let root = tracer.add(puzzle, start, None, NodeKind::Unique);
    let actions = puzzle.legal_actions(start);
    stats.add_expanded(actions.len());
    let mut stack = vec![Frame {
        state: start.clone(),
        actions: actions.into_iter(),
        node: root,
    }];
    // actions leading to the top frame
    let mut path = Vec::new();

    while let Some(frame) = stack.last_mut() {
        if let Some(reason) = limits.check(started, visited.len()) {
            info!("Search cancelled: {}", reason);
            return Ok(SolverOk::new(Outcome::Cancelled(reason), stats));
        }

        let action = match frame.actions.next() {
            Some(action) => action,
            None => {
                stack.pop();
                path.pop();
                continue;
            }
        };

        let new_state = puzzle.apply(&frame.state, action)?;
        let parent = frame.node;
        let depth = path.len() + 1;
        stats.add_created(depth);

        if visited.mark_and_check(puzzle, &new_state) {
            stats.add_reached_duplicate(depth);
            tracer.add(puzzle, &new_state, Some(parent), NodeKind::Duplicate);
            continue;
        }
        visit_depth(&mut stats, depth, print_status);
        path.push(action);

        if puzzle.is_goal(&new_state) {
            tracer.add(puzzle, &new_state, Some(parent), NodeKind::Goal);
            debug!("Solved at depth {}", depth);
            return Ok(SolverOk::new(Outcome::Found(path), stats));
        }

        let node = tracer.add(puzzle, &new_state, Some(parent), NodeKind::Unique);
        let actions = puzzle.legal_actions(&new_state);
        stats.add_expanded(actions.len());
        stack.push(Frame {
            state: new_state,
            actions: actions.into_iter(),
            node,
        });
    }

    debug!("Exhausted after {} unique states", visited.len());
    Ok(SolverOk::new(Outcome::Exhausted, stats))
}

fn visit_depth(stats: &mut Stats, depth: usize, print_status: bool) {
    if stats.add_unique_visited(depth) && print_status {
        println!("Visited new depth: {}", depth);
        println!("{}", stats.totals_line());
        println!();
    }
}
