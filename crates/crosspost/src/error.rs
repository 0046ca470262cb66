#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    #[error("Fetching {url} returned HTTP {status}")]
    FetchStatus { url: String, status: u16 },
}
