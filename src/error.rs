use thiserror::Error;

/// Everything that can go wrong while working the dial.
///
/// None of these leave the phone in an inconsistent state, so callers are
/// free to report them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Invalid phone number '{0}'. Only digits 0-9 are allowed.")]
    InvalidNumber(String),

    #[error("Invalid digit '{0}'. Only digits 0-9 are allowed.")]
    InvalidDigit(char),

    #[error("Cannot dial while already connected. Hang up first.")]
    AlreadyConnected,

    #[error("Cannot initiate a call. No digits dialed.")]
    NothingDialed,
}
