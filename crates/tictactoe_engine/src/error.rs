//! Errors raised while decoding boards or validating moves.

/// Reason a submitted board was rejected.
///
/// Every variant is a deterministic validation failure. Nothing is
/// mutated when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Board text is not exactly 9 characters from `X`, `O`, `-`.
    #[display("Invalid board format")]
    Format,

    /// The stored game has already finished.
    #[display("The game is already over")]
    GameOver,

    /// Submitted board is identical to the stored one.
    #[display("You did not move")]
    NoMove,

    /// Submitted board changes a cell that was already marked.
    #[display("Unable to replace values")]
    Overwrite,

    /// X and O counts differ by more than one.
    #[display("Move only once!")]
    MultiMove,

    /// Mark counts say it is the opponent's turn.
    #[display("It is not your move!")]
    TurnOrder,

    /// Opening board does not hold exactly one mark.
    #[display("Please make exactly one move")]
    InvalidMove,
}
