pub enum Error {
    InvalidUnicode(usize), // index into the raw argument vector
    ConstructionError(String, String), // key, reason
}

impl Error {
    fn describe(&self) -> &'static str {
        match self {
            Error::InvalidUnicode(_) => {
                "argument is not valid unicode"
            }
            Error::ConstructionError(_, _) => {
                "failed to construct target from string"
            }
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidUnicode(idx) => {
                write!(f, "{}: argv[{}]", self.describe(), idx)
            }
            Error::ConstructionError(key, err) => {
                write!(f, "{} for {}: {}", self.describe(), key, err)
            }
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
