use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    /// No intern count in the searched range produced a feasible roster.
    #[error("no feasible roster found for {lower}..={upper} interns")]
    SearchExhausted { lower: usize, upper: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
