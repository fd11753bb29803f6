/// The fixed message every greeting call returns.
const GREETING: &str = "DevOps Project for AchiStar Technologies";

/// Stateless producer of the project greeting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the greeting. Pure and infallible, so no `Result` here.
    pub fn say_hello(&self) -> &'static str {
        GREETING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn say_hello_returns_expected_message() {
        let greeter = Greeter::new();
        assert_eq!(
            greeter.say_hello(),
            "DevOps Project for AchiStar Technologies"
        );
    }

    #[test]
    fn say_hello_is_idempotent() {
        let greeter = Greeter::new();
        assert_eq!(greeter.say_hello(), greeter.say_hello());
        assert_eq!(Greeter::default().say_hello(), greeter.say_hello());
    }
}
