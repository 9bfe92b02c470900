use thiserror::Error;

#[derive(Debug, Error)]
pub enum PocsagError {
    #[error("address {0} exceeds 21 bits")]
    AddressOutOfRange(u32),

    #[error("baud rate {0} does not divide the 38400 Hz symbol rate")]
    UnsupportedBaudRate(u32),

    #[error("sample rate must be non-zero")]
    UnsupportedSampleRate,
}

pub type Result<T> = std::result::Result<T, PocsagError>;
