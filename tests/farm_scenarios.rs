use std::rc::Rc;

use animal_farm::action::{Action, Bark, ChaseSheep, Crow, Fly};
use animal_farm::duty::{Duty, Guard, HerdSheep, LayEggs};
use animal_farm::{Animal, Capability, Farm, FarmError, Kind};

#[test]
fn rooster_stops_laying_when_hungry() {
    let mut roger = Animal::bird("Roger", Some(Rc::new(Crow)), Some(Rc::new(LayEggs)));

    assert!(roger.perform_duty().unwrap().contains("laid an egg"));

    roger.make_hungry();
    let refused = roger.perform_duty().unwrap();
    assert!(refused.contains("hungry"));
    assert!(!refused.contains("egg"));

    roger.eat();
    assert!(roger.perform_duty().unwrap().contains("laid an egg"));
}

#[test]
fn guard_dog_learns_to_chase_sheep() {
    let mut rex = Animal::dog("Rex", Some(Rc::new(Bark)), Some(Rc::new(Guard)));
    assert!(rex.perform_action().unwrap().contains("barks"));

    rex.set_action(Rc::new(ChaseSheep));
    let action = rex.perform_action().unwrap();
    assert!(action.contains("chasing sheep"));
    assert!(!action.contains("barks"));
    assert!(rex.perform_duty().unwrap().contains("guarding"));
}

#[test]
fn bird_switches_from_flying_to_crowing() {
    let mut bird = Animal::bird("Tweety", Some(Rc::new(Fly)), Some(Rc::new(LayEggs)));
    assert!(bird.perform_action().unwrap().contains("flying"));
    bird.set_action(Rc::new(Crow));
    assert!(bird.perform_action().unwrap().contains("crows"));
    assert_eq!(bird.legs(), 2);
}

#[test]
fn clearing_both_flags_restores_duty() {
    let mut shep = Animal::dog("Shep", Some(Rc::new(ChaseSheep)), Some(Rc::new(HerdSheep)));
    shep.make_hungry();
    shep.make_sleepy();
    assert!(shep.perform_duty().unwrap().contains("too hungry"));

    shep.eat();
    shep.sleep();
    assert_eq!(shep.perform_duty().unwrap(), "Shep is herding sheep together!");
}

#[test]
fn unassigned_capability_names_the_animal() {
    let lazy = Animal::bird("Lazy", Some(Rc::new(Fly)), None);
    match lazy.perform_duty() {
        Err(FarmError::UnassignedCapability { animal, capability }) => {
            assert_eq!(animal, "Lazy");
            assert_eq!(capability, Capability::Duty);
        }
        other => panic!("expected unassigned duty, got {:?}", other),
    }

    let mute = Animal::dog("Mute", None, Some(Rc::new(Guard)));
    let err = mute.perform_action().unwrap_err();
    assert_eq!(err.to_string(), "Mute has no action assigned!");
}

#[test]
fn new_kind_action_and_duty_need_no_library_changes() {
    const HORSE: Kind = Kind::new("Horse", 4);

    struct Gallop;
    impl Action for Gallop {
        fn perform(&self, actor: &str) -> String {
            format!("{} gallops across the pasture!", actor)
        }
        fn name(&self) -> &str {
            "Gallop"
        }
    }

    struct PlowField;
    impl Duty for PlowField {
        fn execute(&self, actor: &str) -> String {
            format!("{} is plowing the field!", actor)
        }
        fn name(&self) -> &str {
            "Plow Field"
        }
    }

    let mut boxer = Animal::new(HORSE, "Boxer", Some(Rc::new(Gallop)), Some(Rc::new(PlowField)));
    assert_eq!(boxer.legs(), 4);
    assert!(boxer.perform_action().unwrap().contains("gallops"));
    assert!(boxer.perform_duty().unwrap().contains("plowing"));

    boxer.make_sleepy();
    assert!(boxer.perform_duty().unwrap().contains("too sleepy"));

    let status = boxer.status().to_string();
    assert!(status.contains("Type: Horse"));
    assert!(status.contains("Duty: Plow Field"));
    assert!(status.contains("Sleepy"));
}

#[test]
fn roster_snapshot_serializes() {
    let mut farm = Farm::sunny_meadows();
    farm.get_mut("Rex").unwrap().make_hungry();

    let json = serde_json::to_value(farm.statuses()).unwrap();
    let animals = json.as_array().unwrap();
    assert_eq!(animals.len(), 4);
    assert_eq!(animals[0]["kind"], "Bird");
    assert_eq!(animals[0]["legs"], 2);
    assert_eq!(animals[2]["name"], "Rex");
    assert_eq!(animals[2]["conditions"][0], "hungry");
    assert_eq!(animals[3]["action"], "Chase Sheep");
}
