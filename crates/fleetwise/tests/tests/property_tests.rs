#[path = "property/synth_determinism.rs"]
mod synth_determinism;

#[path = "property/wear_boundary.rs"]
mod wear_boundary;

#[path = "property/priority_monotonicity.rs"]
mod priority_monotonicity;

#[path = "property/override_precedence.rs"]
mod override_precedence;

#[path = "property/chain_acyclicity.rs"]
mod chain_acyclicity;
