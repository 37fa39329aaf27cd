//! Given steps for connector filtering BDD scenarios.

use super::world::{ConnectorWorld, split_dialects};
use rstest_bdd_macros::given;

#[given(r#"the blacklist "{dialects}""#)]
fn the_blacklist(world: &mut ConnectorWorld, dialects: String) {
    world.blacklist.extend(split_dialects(&dialects));
}

#[given(r#"the whitelist "{dialects}""#)]
fn the_whitelist(world: &mut ConnectorWorld, dialects: String) {
    world.whitelist.extend(split_dialects(&dialects));
}
