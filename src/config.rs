use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Lockout,
    Sliding,
    Tilt,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Lockout, Family::Sliding, Family::Tilt];

    /// Guesses the family from a puzzle file name like `puzzles/tilt.csv`.
    pub fn from_file_name(path: &str) -> Option<Family> {
        let name = path.rsplit(|c| c == '/' || c == '\\').next()?.to_lowercase();
        Family::ALL
            .iter()
            .cloned()
            .find(|family| name.contains(&family.to_string()))
    }
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Family::Lockout => write!(f, "lockout"),
            Family::Sliding => write!(f, "sliding"),
            Family::Tilt => write!(f, "tilt"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// The first solution the search finds.
    Any,
    /// The first solution with redundant actions removed.
    Optimized,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Any => write!(f, "any"),
            Method::Optimized => write!(f, "optimized"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName(String);

impl Display for UnknownName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown name \"{}\"", self.0)
    }
}

impl Error for UnknownName {}

impl FromStr for Family {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lockout" => Ok(Family::Lockout),
            "sliding" => Ok(Family::Sliding),
            "tilt" => Ok(Family::Tilt),
            _ => Err(UnknownName(s.to_owned())),
        }
    }
}
