//! When steps for workspace resolution BDD scenarios.

use super::world::ResolutionWorld;
use rstest_bdd_macros::when;

#[when("workspaces are discovered")]
fn workspaces_discovered(world: &mut ResolutionWorld) {
    world.discovered = Some(world.resolver().registry());
}

#[when(r#"workspace "{name}" is requested"#)]
fn workspace_resolved(world: &mut ResolutionWorld, name: String) {
    let resolution = world.resolver().resolve(Some(&name));
    world.resolutions = vec![resolution];
}

#[when(r#"workspace "{name}" is resolved {times:usize} times"#)]
fn workspace_resolved_repeatedly(world: &mut ResolutionWorld, name: String, times: usize) {
    let resolutions = (0..times)
        .map(|_| world.resolver().resolve(Some(&name)))
        .collect();
    world.resolutions = resolutions;
}
