//! Then steps for connector filtering BDD scenarios.

use super::world::{ConnectorWorld, split_dialects};
use connector_registry::connector::services::ConnectorRegistryError;
use rstest_bdd_macros::then;

#[then(r#"the served catalog excludes "{dialect}""#)]
fn catalog_excludes(world: &ConnectorWorld, dialect: String) -> Result<(), eyre::Report> {
    if world.registry()?.contains(&dialect) {
        return Err(eyre::eyre!("expected '{dialect}' to be excluded"));
    }
    Ok(())
}

#[then(r#"the served catalog includes "{dialect}""#)]
fn catalog_includes(world: &ConnectorWorld, dialect: String) -> Result<(), eyre::Report> {
    if !world.registry()?.contains(&dialect) {
        return Err(eyre::eyre!("expected '{dialect}' to be served"));
    }
    Ok(())
}

#[then(r#"looking up "{dialect}" reports not found"#)]
fn lookup_not_found(world: &ConnectorWorld, dialect: String) -> Result<(), eyre::Report> {
    match world.registry()?.find_by_dialect(&dialect) {
        Err(ConnectorRegistryError::NotFound(missing)) if missing == dialect => Ok(()),
        other => Err(eyre::eyre!("expected not found for '{dialect}', got {other:?}")),
    }
}

#[then(r#"looking up "{dialect}" returns the connector named "{nice_name}""#)]
fn lookup_returns_named(
    world: &ConnectorWorld,
    dialect: String,
    nice_name: String,
) -> Result<(), eyre::Report> {
    let connector = world
        .registry()?
        .find_by_dialect(&dialect)
        .map_err(|err| eyre::eyre!("lookup of '{dialect}' failed: {err}"))?;
    if connector.nice_name() != nice_name {
        return Err(eyre::eyre!(
            "expected nice name '{nice_name}', found '{}'",
            connector.nice_name()
        ));
    }
    Ok(())
}

#[then(r#"the served dialects are "{dialects}""#)]
fn served_dialects_are(world: &ConnectorWorld, dialects: String) -> Result<(), eyre::Report> {
    let served: Vec<String> = world
        .registry()?
        .list_connectors()
        .iter()
        .map(|c| c.dialect().to_string())
        .collect();
    let expected = split_dialects(&dialects);
    if served != expected {
        return Err(eyre::eyre!("expected {expected:?}, served {served:?}"));
    }
    Ok(())
}

#[then("the served catalog is empty")]
fn catalog_is_empty(world: &ConnectorWorld) -> Result<(), eyre::Report> {
    let registry = world.registry()?;
    if !registry.is_empty() {
        return Err(eyre::eyre!("expected no connectors, found {}", registry.len()));
    }
    Ok(())
}

#[then("{count:usize} categories are listed")]
fn categories_listed(world: &ConnectorWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world.registry()?.list_categories().len();
    if listed != count {
        return Err(eyre::eyre!("expected {count} categories, found {listed}"));
    }
    Ok(())
}
