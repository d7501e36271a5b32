/// Listing: what happens when no command is given.
use crate::registry::Registry;
use crate::types::Outcome;

/// Build the listing of every registered command, in registry order.
#[must_use]
pub fn run(registry: &Registry) -> Outcome {
    Outcome::Listing {
        commands: registry.names().map(str::to_owned).collect(),
    }
}
