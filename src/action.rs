//! Actions: what an animal does for fun or display.
//!
//! An action is stateless. New actions are added by implementing [`Action`]
//! on a new type; animals accept any implementation.

use std::rc::Rc;

pub trait Action {
    /// Describe `actor` performing this action.
    fn perform(&self, actor: &str) -> String;

    /// Short label used in status output.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Fly;

impl Action for Fly {
    fn perform(&self, actor: &str) -> String {
        format!("{} is flying high in the sky! 🦅", actor)
    }

    fn name(&self) -> &str {
        "Fly"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Crow;

impl Action for Crow {
    fn perform(&self, actor: &str) -> String {
        format!("{} crows: Cock-a-doodle-doo!", actor)
    }

    fn name(&self) -> &str {
        "Crow"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Bark;

impl Action for Bark {
    fn perform(&self, actor: &str) -> String {
        format!("{} barks loudly: Woof woof!", actor)
    }

    fn name(&self) -> &str {
        "Bark"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChaseSheep;

impl Action for ChaseSheep {
    fn perform(&self, actor: &str) -> String {
        format!("{} is chasing sheep across the field!", actor)
    }

    fn name(&self) -> &str {
        "Chase Sheep"
    }
}

/// Every stock action, in display order.
pub fn catalog() -> Vec<Rc<dyn Action>> {
    vec![Rc::new(Fly), Rc::new(Crow), Rc::new(Bark), Rc::new(ChaseSheep)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_actions_describe_actor() {
        assert!(Fly.perform("Eddie").contains("flying"));
        assert!(Crow.perform("Roger").contains("Cock-a-doodle-doo"));
        assert!(Bark.perform("Rex").contains("Woof"));
        assert!(ChaseSheep.perform("Shep").contains("chasing sheep"));

        for action in catalog() {
            assert!(action.perform("Someone").starts_with("Someone"));
        }
    }

    #[test]
    fn test_catalog_names_are_distinct() {
        let names: Vec<String> = catalog().iter().map(|a| a.name().to_string()).collect();
        assert_eq!(names, vec!["Fly", "Crow", "Bark", "Chase Sheep"]);
    }

    #[test]
    fn test_custom_action_plugs_in() {
        struct Sing;
        impl Action for Sing {
            fn perform(&self, actor: &str) -> String {
                format!("{} sings a beautiful song!", actor)
            }
            fn name(&self) -> &str {
                "Sing"
            }
        }

        let action: Rc<dyn Action> = Rc::new(Sing);
        assert_eq!(action.name(), "Sing");
        assert!(action.perform("Tweety").contains("sings"));
    }
}
