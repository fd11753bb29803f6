pub mod greeter;

pub use greeter::Greeter;
