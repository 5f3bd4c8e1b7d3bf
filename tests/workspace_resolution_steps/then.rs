//! Then steps for workspace resolution BDD scenarios.

use super::world::{ResolutionWorld, joined};
use n8n_tenancy::workspace::{domain::WorkspaceName, services::ResolveError};
use rstest_bdd_macros::then;
use std::sync::Arc;

#[then(r#"the available workspaces are "{names}""#)]
fn available_workspaces(world: &mut ResolutionWorld, names: String) -> Result<(), eyre::Report> {
    let current = world.resolver().registry();
    if let Some(discovered) = &world.discovered
        && !Arc::ptr_eq(discovered, &current)
    {
        return Err(eyre::eyre!("registry was rediscovered between steps"));
    }
    let available = current.names();
    let actual = joined(available.iter().map(WorkspaceName::as_str));
    if actual != names {
        return Err(eyre::eyre!("expected workspaces '{names}', found '{actual}'"));
    }
    Ok(())
}

#[then("no workspaces are available")]
fn no_workspaces(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    let resolver = world.resolver();
    if !resolver.available_names().is_empty() || resolver.default_name().is_some() {
        return Err(eyre::eyre!("expected an empty registry without default"));
    }
    Ok(())
}

#[then(r#"the default workspace is "{name}""#)]
fn default_workspace(world: &mut ResolutionWorld, name: String) -> Result<(), eyre::Report> {
    let default = world.resolver().default_name();
    if default.as_ref().map(WorkspaceName::as_str) != Some(name.as_str()) {
        return Err(eyre::eyre!("expected default '{name}', found {default:?}"));
    }
    Ok(())
}

#[then("multi-tenant mode is active")]
fn multi_tenant_active(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    let resolver = world.resolver();
    if !resolver.is_multi_tenant() || !resolver.selector().is_enumerated() {
        return Err(eyre::eyre!("expected multi-tenant mode with a selector"));
    }
    Ok(())
}

#[then("multi-tenant mode is inactive")]
fn multi_tenant_inactive(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    let resolver = world.resolver();
    if resolver.is_multi_tenant() || resolver.selector().to_json_schema().is_some() {
        return Err(eyre::eyre!("expected single-tenant mode without a selector"));
    }
    Ok(())
}

#[then(r#"resolving without a name yields tenant "{tenant}""#)]
fn resolving_default_yields_tenant(
    world: &mut ResolutionWorld,
    tenant: String,
) -> Result<(), eyre::Report> {
    let context = world
        .resolver()
        .resolve(None)
        .map_err(|err| eyre::eyre!("resolution failed: {err}"))?;
    if context.tenant_id().as_str() != tenant {
        return Err(eyre::eyre!(
            "expected tenant '{tenant}', found '{}'",
            context.tenant_id()
        ));
    }
    Ok(())
}

#[then(r#"resolving "{requested}" yields workspace "{name}""#)]
fn resolving_yields_workspace(
    world: &mut ResolutionWorld,
    requested: String,
    name: String,
) -> Result<(), eyre::Report> {
    let context = world
        .resolver()
        .resolve(Some(&requested))
        .map_err(|err| eyre::eyre!("resolution failed: {err}"))?;
    if context.workspace().as_str() != name || context.client().workspace != name {
        return Err(eyre::eyre!(
            "expected workspace '{name}', found '{}'",
            context.workspace()
        ));
    }
    Ok(())
}

#[then("resolving without a name reports that no workspace is configured")]
fn resolving_reports_unconfigured(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    match world.resolver().resolve(None) {
        Err(ResolveError::NoWorkspaceConfigured { .. }) => Ok(()),
        Err(other) => Err(eyre::eyre!("expected NoWorkspaceConfigured, got {other:?}")),
        Ok(context) => Err(eyre::eyre!(
            "expected failure, resolved '{}'",
            context.workspace()
        )),
    }
}

#[then(r#"resolution fails listing "{names}""#)]
fn resolution_fails_listing(world: &ResolutionWorld, names: String) -> Result<(), eyre::Report> {
    let result = world
        .resolutions
        .last()
        .ok_or_else(|| eyre::eyre!("missing resolution result in scenario world"))?;
    match result {
        Err(ResolveError::WorkspaceNotFound { available, .. }) => {
            let actual = joined(available.iter().map(WorkspaceName::as_str));
            if actual != names {
                return Err(eyre::eyre!("expected listing '{names}', found '{actual}'"));
            }
            Ok(())
        }
        other => Err(eyre::eyre!("expected WorkspaceNotFound, got {other:?}")),
    }
}

#[then("{count:usize} client has been built")]
fn clients_built(world: &ResolutionWorld, count: usize) -> Result<(), eyre::Report> {
    let contexts = world
        .resolutions
        .iter()
        .map(|result| {
            result
                .as_ref()
                .map_err(|err| eyre::eyre!("resolution failed: {err}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let shared = contexts
        .windows(2)
        .all(|pair| matches!(pair, [a, b] if Arc::ptr_eq(a.client(), b.client())));
    if world.factory.built() != count || !shared {
        return Err(eyre::eyre!(
            "expected {count} shared client, factory built {}",
            world.factory.built()
        ));
    }
    Ok(())
}
