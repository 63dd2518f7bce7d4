#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

/// How a single session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Sum { operands: Operands, sum: f64 },
    InvalidInput,
    Failed { message: String },
}

impl Outcome {
    pub fn sum(&self) -> Option<f64> {
        match self {
            Outcome::Sum { sum, .. } => Some(*sum),
            _ => None,
        }
    }
}
