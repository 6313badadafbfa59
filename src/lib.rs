//! A farm of animals whose actions and duties can be swapped at runtime.
//!
//! ```
//! use std::rc::Rc;
//! use animal_farm::action::Crow;
//! use animal_farm::animal::Animal;
//! use animal_farm::duty::LayEggs;
//!
//! let mut roger = Animal::bird("Roger", Some(Rc::new(Crow)), Some(Rc::new(LayEggs)));
//! roger.make_hungry();
//! assert!(roger.perform_duty().unwrap().contains("too hungry"));
//! roger.eat();
//! assert_eq!(roger.perform_duty().unwrap(), "Roger has laid an egg!");
//! ```

pub mod action;
pub mod animal;
pub mod demo;
pub mod duty;
pub mod error;
pub mod farm;
pub mod output;
pub mod types;

pub use animal::{Animal, Kind};
pub use error::{Capability, FarmError};
pub use farm::Farm;
pub use types::{Condition, Status};
