use tabled::{Table, Tabled};

use crate::sequence::Sequence;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Advance once.
    Once,
    /// Advance up to this many times.
    Steps(usize),
    /// Visit everything from the starting arrangement to the last one.
    All,
}

#[derive(Debug, PartialEq, Eq, Clone, Tabled)]
pub struct Step {
    pub step: usize,
    pub arrangement: String,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Report {
    pub start: String,
    pub steps: Vec<Step>,
    // Stopped because there was no next permutation. A step limit landing exactly on the last
    // permutation leaves this false.
    pub exhausted: bool,
}

pub fn advance(sequence: &mut Sequence, mode: Mode) -> Report {
    let start = sequence.to_string();
    let mut steps = Vec::new();
    let exhausted = match mode {
        Mode::Once => advance_steps(sequence, 1, &mut steps),
        Mode::Steps(limit) => advance_steps(sequence, limit, &mut steps),
        Mode::All => {
            let mut step = 0;
            sequence.visit_lexicographic(|arrangement| {
                steps.push(Step { step, arrangement });
                step += 1;
            });
            true
        }
    };
    Report {
        start,
        steps,
        exhausted,
    }
}

fn advance_steps(sequence: &mut Sequence, limit: usize, steps: &mut Vec<Step>) -> bool {
    for step in 1..=limit {
        if !sequence.permute() {
            return true;
        }
        steps.push(Step {
            step,
            arrangement: sequence.to_string(),
        });
    }
    false
}

impl Report {
    pub fn render(&self, table: bool) -> String {
        if self.steps.is_empty() {
            if self.exhausted {
                return format!("{} (last)", self.start);
            }
            // Nothing was tried.
            return self.start.clone();
        }
        if table {
            return Table::new(&self.steps).to_string();
        }
        self.steps
            .iter()
            .map(|step| step.arrangement.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
