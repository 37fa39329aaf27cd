//! When steps for connector filtering BDD scenarios.

use super::world::ConnectorWorld;
use connector_registry::connector::services::ConnectorRegistry;
use rstest_bdd_macros::when;

#[when("the registry is initialized")]
fn initialize_registry(world: &mut ConnectorWorld) {
    world.registry = Some(ConnectorRegistry::initialize(
        &world.blacklist,
        &world.whitelist,
    ));
}
