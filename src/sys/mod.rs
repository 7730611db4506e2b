pub mod runtime;
pub mod sensor;
