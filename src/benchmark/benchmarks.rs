pub mod inverse;
