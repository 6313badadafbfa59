use std::rc::Rc;

use tracing::info;

use crate::action::{Bark, ChaseSheep, Crow, Fly};
use crate::animal::Animal;
use crate::duty::{Guard, HerdSheep, LayEggs};
use crate::types::Status;

/// A named group of animals
#[derive(Debug)]
pub struct Farm {
    pub name: String,
    pub animals: Vec<Animal>,
}

impl Farm {
    pub fn new(name: impl Into<String>, animals: Vec<Animal>) -> Self {
        Farm {
            name: name.into(),
            animals,
        }
    }

    /// The stock roster: two birds and two dogs, all ready to work.
    pub fn sunny_meadows() -> Self {
        Farm::new(
            "Sunny Meadows Farm",
            vec![
                Animal::bird("Roger the Rooster", Some(Rc::new(Crow)), Some(Rc::new(LayEggs))),
                Animal::bird("Henrietta the Hen", Some(Rc::new(Fly)), Some(Rc::new(LayEggs))),
                Animal::dog("Rex", Some(Rc::new(Bark)), Some(Rc::new(Guard))),
                Animal::dog("Shep", Some(Rc::new(ChaseSheep)), Some(Rc::new(HerdSheep))),
            ],
        )
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Animal> {
        self.animals.iter().find(|a| a.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Animal> {
        self.animals.iter_mut().find(|a| a.name() == name)
    }

    pub fn statuses(&self) -> Vec<Status> {
        self.animals.iter().map(Animal::status).collect()
    }

    pub fn make_all_hungry(&mut self) {
        info!(farm = %self.name, "everyone is getting hungry");
        for animal in &mut self.animals {
            animal.make_hungry();
        }
    }

    /// Feed every animal, returning what each one said.
    pub fn feed_all(&mut self) -> Vec<String> {
        info!(farm = %self.name, "feeding time");
        self.animals.iter_mut().map(Animal::eat).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sunny_meadows_roster() {
        let farm = Farm::sunny_meadows();
        assert_eq!(farm.len(), 4);
        assert_eq!(farm.get("Roger the Rooster").unwrap().legs(), 2);
        assert_eq!(farm.get("Shep").unwrap().legs(), 4);
        assert!(farm.get("Whiskers").is_none());
        assert!(farm.statuses().iter().all(Status::is_ready));
    }

    #[test]
    fn test_hunger_round_trip() {
        let mut farm = Farm::sunny_meadows();
        farm.make_all_hungry();
        for animal in farm.iter() {
            assert!(animal.perform_duty().unwrap().contains("too hungry"));
        }

        let said = farm.feed_all();
        assert_eq!(said.len(), 4);
        assert!(said[2].starts_with("Rex is eating"));
        assert!(farm.iter().all(|a| !a.is_hungry()));
    }

    #[test]
    fn test_get_mut_changes_one_animal() {
        let mut farm = Farm::sunny_meadows();
        farm.get_mut("Rex").unwrap().make_sleepy();
        assert!(farm.get("Rex").unwrap().is_sleepy());
        assert!(!farm.get("Shep").unwrap().is_sleepy());
    }
}
