
mod propagation;

pub use propagation::PropagationMode;
