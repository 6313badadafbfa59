//! Duties: work an animal must perform.
//!
//! Same shape as [`crate::action::Action`]. Whether a duty actually runs is
//! decided by the animal, see [`crate::animal::Animal::perform_duty`].

use std::rc::Rc;

pub trait Duty {
    /// Describe `actor` carrying out this duty.
    fn execute(&self, actor: &str) -> String;

    /// Short label used in status output.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Guard;

impl Duty for Guard {
    fn execute(&self, actor: &str) -> String {
        format!("{} is guarding the farm vigilantly!", actor)
    }

    fn name(&self) -> &str {
        "Guard"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LayEggs;

impl Duty for LayEggs {
    fn execute(&self, actor: &str) -> String {
        format!("{} has laid an egg!", actor)
    }

    fn name(&self) -> &str {
        "Lay Eggs"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HerdSheep;

impl Duty for HerdSheep {
    fn execute(&self, actor: &str) -> String {
        format!("{} is herding sheep together!", actor)
    }

    fn name(&self) -> &str {
        "Herd Sheep"
    }
}

/// Every stock duty, in display order.
pub fn catalog() -> Vec<Rc<dyn Duty>> {
    vec![Rc::new(Guard), Rc::new(LayEggs), Rc::new(HerdSheep)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_duties_describe_actor() {
        assert_eq!(Guard.execute("Rex"), "Rex is guarding the farm vigilantly!");
        assert_eq!(LayEggs.execute("Henrietta"), "Henrietta has laid an egg!");
        assert_eq!(HerdSheep.execute("Shep"), "Shep is herding sheep together!");
    }

    #[test]
    fn test_catalog_names() {
        let names: Vec<String> = catalog().iter().map(|d| d.name().to_string()).collect();
        assert_eq!(names, vec!["Guard", "Lay Eggs", "Herd Sheep"]);
    }
}
