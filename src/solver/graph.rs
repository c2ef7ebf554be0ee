use std::borrow::Cow;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};

use crate::board_formatter::DrawBoard;

use super::{NodeKind, Trace};

type Nd = usize;
type Ed = (usize, usize);

/// Every state one search created, duplicates included.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<(String, NodeKind)>,
    edges: Vec<Ed>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Graph::default()
    }

    pub fn node_cnt(&self) -> usize {
        self.nodes.len()
    }

    pub fn write_dot<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        let mut file = File::create(path)?;
        dot::render(self, &mut file)?;
        Ok(())
    }
}

impl<P: DrawBoard> Trace<P> for Graph {
    fn add(&mut self, puzzle: &P, state: &P::State, parent: Option<usize>, kind: NodeKind) -> usize {
        let index = self.nodes.len();
        self.nodes.push((puzzle.format_board(state).to_string(), kind));
        if let Some(parent) = parent {
            self.edges.push((parent, index));
        }
        index
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        // left-justified lines keep the board aligned
        let board = self.nodes[*n].0.replace('\n', "\\l");
        LabelText::EscStr(format!("{}\\l", board.trim_end_matches("\\l")).into())
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.nodes[*n].1 == NodeKind::Duplicate {
            Style::Dashed
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        Some(LabelText::LabelStr(
            match self.nodes[*n].1 {
                NodeKind::Unique => "lightblue",
                NodeKind::Duplicate => "gray",
                NodeKind::Goal => "red",
            }
            .into(),
        ))
    }
}
