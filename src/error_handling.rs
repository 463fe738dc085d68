use std::fmt::{Debug, Display};

pub trait ErrorType: Display + Debug + PartialEq {}

// Where in a derivation something went wrong: the symbol being expanded and
// how many symbols deep it sits (the start symbol is depth 1)
#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub symbol: String,
    pub depth: usize
}

impl Location {
    pub fn new(symbol: &str, depth: usize) -> Self {
        Location {
            symbol: symbol.to_string(),
            depth
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.depth == 0 {
            write!(f, "{}", self.symbol)
        } else {
            write!(f, "{} @ depth {}", self.symbol, self.depth)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

impl<T: ErrorType> std::error::Error for Error<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Boom;

    impl Display for Boom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "boom")
        }
    }

    impl ErrorType for Boom {}

    #[test]
    fn location_display() {
        assert_eq!(Location::new("Program", 0).to_string(), "Program");
        assert_eq!(Location::new("Expression", 12).to_string(), "Expression @ depth 12");
    }

    #[test]
    fn error_display_is_colored() {
        let error = Error {
            location: Location::new("Block", 3),
            error: Boom
        };
        assert_eq!(error.to_string(), "\x1b[31;49;1m[Block @ depth 3]\x1b[39;49;1m  boom\x1b[0m");
    }
}
