use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

/// The rules of one puzzle family.
///
/// The solver knows nothing about boards or pieces, it only calls these functions.
/// States are values - `apply` never changes the state it gets, it returns a new one.
pub trait Puzzle {
    type State: Clone + Debug;
    type Action: Copy + Eq + Debug + Display;
    type Key: Clone + Eq + Hash;

    /// Every action that changes the state, in a fixed order.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn apply(&self, state: &Self::State, action: Self::Action) -> Result<Self::State, InvalidAction>;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// States which can't be told apart on the board must have the same key.
    fn canonical_key(&self, state: &Self::State) -> Self::Key;
}

/// `apply` was called with an action that is not legal in the given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAction {
    action: String,
    reason: &'static str,
}

impl InvalidAction {
    pub fn new<A: Display>(action: A, reason: &'static str) -> Self {
        InvalidAction {
            action: action.to_string(),
            reason,
        }
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl Display for InvalidAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid action {}: {}", self.action, self.reason)
    }
}

impl Error for InvalidAction {}
