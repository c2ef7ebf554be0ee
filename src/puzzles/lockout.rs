//! Robots slide in a straight line until they bump into another robot.
//! A robot with nothing in its way can't move at all (it would fall off the board).
//! The red robot has to end up in the center.

use std::fmt::{self, Debug, Display, Formatter};

use crate::board_formatter::DrawBoard;
use crate::data::{Dir, Pos, DIRECTIONS};
use crate::parser::{self, ParseState, ParserErr};
use crate::puzzle::{InvalidAction, Puzzle};

pub const ROBOT_CNT: usize = 6;
pub const DEFAULT_SIZE: u8 = 5;

const ROBOT_IDS: [char; ROBOT_CNT] = ['R', 'O', 'Y', 'G', 'B', 'P'];
const ROBOT_NAMES: [&str; ROBOT_CNT] = ["red", "orange", "yellow", "green", "blue", "purple"];
const ABSENT: u8 = 255;
/// The robot which has to reach the center.
const RED: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lockout {
    size: u8,
}

impl Default for Lockout {
    fn default() -> Self {
        Lockout::new(DEFAULT_SIZE)
    }
}

impl Lockout {
    /// # Panics
    /// Panics if the board is empty or too large to encode positions in a byte.
    pub fn new(size: u8) -> Self {
        assert!(size > 0 && u16::from(size) * u16::from(size) < u16::from(ABSENT));
        Lockout { size }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// The nearest robot in `dir` which is not directly adjacent.
    fn blocker(&self, state: &LockoutState, robot: usize, dir: Dir) -> Option<Pos> {
        let pos = state.robots[robot]?;
        let mut nearest: Option<(u8, Pos)> = None;
        for (i, other) in state.robots.iter().enumerate() {
            if i == robot {
                continue;
            }
            let other = match *other {
                Some(other) => other,
                None => continue,
            };
            if let Some(dist) = pos.dist_along(dir, other) {
                if nearest.map_or(true, |(best, _)| dist < best) {
                    nearest = Some((dist, other));
                }
            }
        }
        match nearest {
            // adjacent - moving would not change anything
            Some((1, _)) | None => None,
            Some((_, blocker)) => Some(blocker),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LockoutState {
    robots: [Option<Pos>; ROBOT_CNT],
}

impl LockoutState {
    /// Robots in the fixed order red, orange, yellow, green, blue, purple.
    pub fn new(robots: [Option<Pos>; ROBOT_CNT]) -> Self {
        LockoutState { robots }
    }

    pub fn robot(&self, index: usize) -> Option<Pos> {
        self.robots[index]
    }
}

impl Debug for LockoutState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, robot) in self.robots.iter().enumerate() {
            if let Some(pos) = robot {
                write!(f, "{}{}", ROBOT_IDS[i], pos)?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RobotMove {
    pub robot: usize,
    pub dir: Dir,
}

impl RobotMove {
    pub fn new(robot: usize, dir: Dir) -> Self {
        RobotMove { robot, dir }
    }
}

impl Display for RobotMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", ROBOT_NAMES[self.robot], self.dir)
    }
}

impl Debug for RobotMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", ROBOT_IDS[self.robot], self.dir)
    }
}

impl Puzzle for Lockout {
    type State = LockoutState;
    type Action = RobotMove;
    type Key = [u8; ROBOT_CNT];

    fn legal_actions(&self, state: &LockoutState) -> Vec<RobotMove> {
        let mut actions = Vec::new();
        for robot in 0..ROBOT_CNT {
            for &dir in &DIRECTIONS {
                if self.blocker(state, robot, dir).is_some() {
                    actions.push(RobotMove::new(robot, dir));
                }
            }
        }
        actions
    }

    fn apply(&self, state: &LockoutState, action: RobotMove) -> Result<LockoutState, InvalidAction> {
        if action.robot >= ROBOT_CNT || state.robots[action.robot].is_none() {
            return Err(InvalidAction::new(action, "no such robot"));
        }
        let blocker = self
            .blocker(state, action.robot, action.dir)
            .ok_or_else(|| InvalidAction::new(action, "nothing to stop the robot"))?;
        let (dr, dc) = action.dir.deltas();
        // the blocker is at least 2 cells away so this stays on the board
        let dest = Pos::new(
            (i16::from(blocker.r) - i16::from(dr)) as u8,
            (i16::from(blocker.c) - i16::from(dc)) as u8,
        );

        let mut new_state = state.clone();
        new_state.robots[action.robot] = Some(dest);
        Ok(new_state)
    }

    fn is_goal(&self, state: &LockoutState) -> bool {
        state.robots[RED] == Some(self.center())
    }

    fn canonical_key(&self, state: &LockoutState) -> [u8; ROBOT_CNT] {
        let mut key = [ABSENT; ROBOT_CNT];
        for (k, robot) in key.iter_mut().zip(state.robots.iter()) {
            if let Some(pos) = robot {
                *k = pos.r * self.size + pos.c;
            }
        }
        key
    }
}

impl DrawBoard for Lockout {
    fn board_size(&self) -> (u8, u8) {
        (self.size, self.size)
    }

    fn glyph(&self, state: &LockoutState, pos: Pos) -> char {
        match state.robots.iter().position(|&robot| robot == Some(pos)) {
            Some(i) => ROBOT_IDS[i],
            None if pos == self.center() => '#',
            None => ' ',
        }
    }
}

impl ParseState for Lockout {
    fn parse_state(&self, line: usize, fields: &[&str]) -> Result<LockoutState, ParserErr> {
        let numbers = parser::numbers(line, fields, ROBOT_CNT * 2)?;
        let mut robots = [None; ROBOT_CNT];
        for (i, pair) in numbers.chunks(2).enumerate() {
            robots[i] = parser::position(line, pair[0], pair[1], self.size, self.size)?;
        }
        if robots[RED].is_none() {
            return Err(ParserErr::Missing {
                line,
                entity: ROBOT_NAMES[RED],
            });
        }
        for (i, robot) in robots.iter().enumerate() {
            if let Some(pos) = robot {
                if robots[..i].contains(robot) {
                    return Err(ParserErr::Overlap { line, pos: *pos });
                }
            }
        }
        Ok(LockoutState::new(robots))
    }
}
