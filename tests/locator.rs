use std::mem;

use cucumber::{given, then, when, World};
use step_locator::{
    rank, Collection, Location, Options, PatternStep, StepLocator, StepType,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, World)]
struct LocatorWorld {
    catalog: Collection,
    options: Options,
    /// `(line, weight)` of ranked candidates.
    candidates: Vec<(u32, f32)>,
    resolved: Option<Location>,
}

impl LocatorWorld {
    fn locator(&self) -> StepLocator<&Collection> {
        StepLocator::new(&self.catalog).with_options(self.options)
    }

    fn add(&mut self, ty: &str, pattern: String, line: u32, priority: i32) {
        let ty = match ty {
            "Given" => StepType::Given,
            "When" => StepType::When,
            _ => StepType::Then,
        };
        let step = PatternStep::new(ty, pattern, Location::new("LoginSteps.java", line, 5))
            .expect("valid pattern")
            .with_priority(priority);
        self.catalog = mem::take(&mut self.catalog).step(step);
    }
}

#[given(regex = r#"^a (Given|When|Then) step "(.*)" at line (\d+)$"#)]
fn step_at(world: &mut LocatorWorld, ty: String, pattern: String, line: u32) {
    world.add(&ty, pattern, line, 0);
}

#[given(
    regex = r#"^a (Given|When|Then) step "(.*)" at line (\d+) with priority (-?\d+)$"#
)]
fn prioritized_step_at(
    world: &mut LocatorWorld,
    ty: String,
    pattern: String,
    line: u32,
    priority: i32,
) {
    world.add(&ty, pattern, line, priority);
}

#[given("the step type is not enforced")]
fn any_step_type(world: &mut LocatorWorld) {
    world.options = Options::any_step_type();
}

#[when(regex = r#"^I complete "(.*)"$"#)]
fn complete(world: &mut LocatorWorld, line: String) {
    let found = world
        .locator()
        .find_candidates_starting_with(&line)
        .map(|found| {
            rank(found)
                .into_iter()
                .map(|c| (c.step.location().line, c.weight))
                .collect::<Vec<_>>()
        })
        .expect("in-memory catalog never fails");
    world.candidates = found;
}

#[when(regex = r#"^I resolve "(.*)"$"#)]
fn resolve(world: &mut LocatorWorld, line: String) {
    let resolved = world
        .locator()
        .resolve_handle(&line)
        .expect("in-memory catalog never fails")
        .cloned();
    world.resolved = resolved;
}

#[then(regex = r"^there (?:is|are) (\d+) candidates?$")]
fn candidates_count(world: &mut LocatorWorld, count: usize) {
    assert_eq!(world.candidates.len(), count, "{:?}", world.candidates);
}

#[then(regex = r"^the best candidate is at line (\d+)$")]
fn best_candidate(world: &mut LocatorWorld, line: u32) {
    assert_eq!(world.candidates.first().map(|c| c.0), Some(line));
}

#[then(regex = r"^every candidate weighs (\d+\.\d+)$")]
fn every_candidate_weighs(world: &mut LocatorWorld, weight: f32) {
    assert!(
        world.candidates.iter().all(|c| (c.1 - weight).abs() < f32::EPSILON),
        "{:?}",
        world.candidates,
    );
}

#[then(regex = r"^it resolves to line (\d+)$")]
fn resolves_to(world: &mut LocatorWorld, line: u32) {
    assert_eq!(world.resolved.as_ref().map(|l| l.line), Some(line));
}

#[then("it resolves to nothing")]
fn resolves_to_nothing(world: &mut LocatorWorld) {
    assert_eq!(world.resolved, None);
}

#[tokio::main]
async fn main() {
    _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    LocatorWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/features")
        .await;
}
