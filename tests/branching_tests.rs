/// Value-branching integration tests — full journeys through the
/// location graph, driven through the director's public API.
use story_director::core::branching::ValueBranchingEngine;
use story_director::core::director::StoryDirector;
use story_director::schema::branch::{Location, StoryChoice};
use story_director::schema::values::Dimension;

#[test]
fn compassionate_journey_reaches_the_compassion_ending() {
    let mut engine = ValueBranchingEngine::new();

    engine.make_choice(StoryChoice::HonestPath); // -> VillageCenter
    engine.make_choice(StoryChoice::CompassionatePath); // -> ForestPath
    engine.make_choice(StoryChoice::PerseverantPath); // -> HermitsCave
    engine.make_choice(StoryChoice::CompassionatePath); // -> CrystalChamber
    engine.make_choice(StoryChoice::HarmoniousPath); // -> FinalTrial
    assert_eq!(engine.current_location(), Location::FinalTrial);

    let points = engine.points();
    assert_eq!(points.get(Dimension::Honesty), 10);
    assert_eq!(points.get(Dimension::Integrity), 5);
    assert_eq!(points.get(Dimension::Compassion), 35);
    assert_eq!(points.get(Dimension::Empathy), 25);
    assert_eq!(points.get(Dimension::Perseverance), 20);
    assert_eq!(points.get(Dimension::Harmony), 25);
    assert_eq!(points.get(Dimension::Logic), 25);
    assert_eq!(points.get(Dimension::Planning), 25);
    assert_eq!(points.get(Dimension::PhysicalActivity), 40);
    assert_eq!(points.get(Dimension::HardWork), 0);

    // HardWork at zero wrecks the balance ratio, so harmony is out;
    // Compassion 35 is the only threshold met.
    assert!(!engine.is_balanced());
    engine.make_choice(StoryChoice::HarmoniousPath);
    assert_eq!(engine.current_location(), Location::EndingCompassion);
}

#[test]
fn humble_journey_falls_through_to_the_balance_ending() {
    let mut engine = ValueBranchingEngine::new();

    engine.make_choice(StoryChoice::HumblePath); // -> VillageCenter
    engine.make_choice(StoryChoice::HumblePath); // -> AncientLibrary
    engine.make_choice(StoryChoice::HumblePath); // -> CrystalChamber
    engine.make_choice(StoryChoice::HarmoniousPath); // -> FinalTrial

    // Humility 45 and Respect 30 dominate, but no ending keys on them.
    assert_eq!(engine.points().get(Dimension::Humility), 45);
    assert_eq!(engine.points().get(Dimension::Respect), 30);

    engine.make_choice(StoryChoice::HonestPath);
    assert_eq!(engine.current_location(), Location::EndingBalance);
}

#[test]
fn director_level_journey_mixes_choices_and_award_triggers() {
    let mut director = StoryDirector::builder().build();
    director.start_story();
    assert_eq!(director.location(), Some(Location::VillageEntrance));

    director.make_choice(StoryChoice::HonestPath); // -> VillageCenter
    director.make_choice(StoryChoice::FairPath); // -> AncientLibrary
    director.make_choice(StoryChoice::LogicalPath); // -> CrystalChamber
    director.trigger("award_altruism", None);
    director.make_choice(StoryChoice::HarmoniousPath); // -> FinalTrial
    assert_eq!(director.location(), Some(Location::FinalTrial));

    let values = director.values().unwrap();
    assert_eq!(values.get(Dimension::Logic), 50);
    assert_eq!(values.get(Dimension::Planning), 30);
    assert_eq!(values.get(Dimension::Empathy), 5);

    // Logic 50 with PhysicalActivity 10 is far from balanced, so the
    // wisdom threshold decides the trial.
    director.make_choice(StoryChoice::HarmoniousPath);
    assert_eq!(director.location(), Some(Location::EndingWisdom));
}

#[test]
fn restarting_the_story_returns_to_the_entrance() {
    let mut director = StoryDirector::builder().build();
    director.make_choice(StoryChoice::HonestPath);
    assert_eq!(director.location(), Some(Location::VillageCenter));

    director.start_story();
    assert_eq!(director.location(), Some(Location::VillageEntrance));
}

#[test]
fn choices_without_a_branching_engine_are_absorbed() {
    let mut director = StoryDirector::builder().without_branching().build();
    director.make_choice(StoryChoice::HonestPath);
    director.trigger("award_honesty", None);
    assert_eq!(director.values(), None);
    assert_eq!(director.location(), None);
}
