// Influence analysis — classification, per-user accumulation, and scoring.
//
// Data flows one way: posts are classified, each classification mutates the
// accumulator of the user it credits, and the accumulators answer the
// scoring queries.

pub mod classify;
pub mod kudos;
pub mod lookup;
pub mod pipeline;
