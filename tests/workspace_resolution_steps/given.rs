//! Given steps for workspace resolution BDD scenarios.

use super::world::ResolutionWorld;
use rstest_bdd_macros::given;

#[given(r#"the environment variable "{key}" is "{value}""#)]
fn environment_variable(world: &mut ResolutionWorld, key: String, value: String) {
    world.env.push((key, value));
}
