use stencil_core::stmt::Value;

/// Receives parameter values in the order their markers appear.
pub trait Params {
    fn push(&mut self, value: &Value) -> Ordinal;
}

/// One-based position of a bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordinal(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: &Value) -> Ordinal {
        self.push(value.clone());
        Ordinal(self.len())
    }
}
