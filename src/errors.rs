use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IO(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("{0} is not a recognized broadcasting meter band [120, 90, 75, 60, 49, 41, 31, 25, 22, 19, 16, 15, 13, 11]")]
    UnknownBand(u32),
    #[error("date parsing error: {0}")]
    DateRange(String),
    #[error("fetch error: {0}")]
    Fetch(String),
    #[error("schedule unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self { AppError::IO(format!("{}", e)) }
}
