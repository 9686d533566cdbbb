#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to determine cache directory, pass --data-dir or set CFDASH_DATA_DIR")]
    NoDataDir,

    #[error("Failed to load contest {id}: {source}")]
    Lookup {
        id: u64,
        #[source]
        source: cfdash_core::ContestError,
    },
}
