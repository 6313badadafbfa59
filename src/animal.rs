//! Farm animals.
//!
//! An [`Animal`] carries an identity fixed at construction (name and [`Kind`]),
//! at most one action and at most one duty, and two state flags. Hunger or
//! sleepiness keeps it from doing its duty until the flag is cleared.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::action::Action;
use crate::duty::Duty;
use crate::error::{Capability, FarmError, Result};
use crate::types::{Condition, Status};

/// Kind of animal: a display label and the leg count every member shares.
///
/// New kinds are declared as constants by whoever needs them:
///
/// ```
/// use animal_farm::animal::Kind;
/// const CAT: Kind = Kind::new("Cat", 4);
/// assert_eq!(CAT.legs(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Kind {
    label: &'static str,
    legs: u32,
}

impl Kind {
    pub const BIRD: Kind = Kind::new("Bird", 2);
    pub const DOG: Kind = Kind::new("Dog", 4);

    pub const fn new(label: &'static str, legs: u32) -> Self {
        Kind { label, legs }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn legs(&self) -> u32 {
        self.legs
    }
}

pub struct Animal {
    name: String,
    kind: Kind,
    action: Option<Rc<dyn Action>>,
    duty: Option<Rc<dyn Duty>>,
    hungry: bool,
    sleepy: bool,
}

impl Animal {
    pub fn new(
        kind: Kind,
        name: impl Into<String>,
        action: Option<Rc<dyn Action>>,
        duty: Option<Rc<dyn Duty>>,
    ) -> Self {
        Animal {
            name: name.into(),
            kind,
            action,
            duty,
            hungry: false,
            sleepy: false,
        }
    }

    /// A two-legged bird.
    pub fn bird(
        name: impl Into<String>,
        action: Option<Rc<dyn Action>>,
        duty: Option<Rc<dyn Duty>>,
    ) -> Self {
        Self::new(Kind::BIRD, name, action, duty)
    }

    /// A four-legged dog.
    pub fn dog(
        name: impl Into<String>,
        action: Option<Rc<dyn Action>>,
        duty: Option<Rc<dyn Duty>>,
    ) -> Self {
        Self::new(Kind::DOG, name, action, duty)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn legs(&self) -> u32 {
        self.kind.legs
    }

    pub fn is_hungry(&self) -> bool {
        self.hungry
    }

    pub fn is_sleepy(&self) -> bool {
        self.sleepy
    }

    pub fn action(&self) -> Option<&Rc<dyn Action>> {
        self.action.as_ref()
    }

    pub fn duty(&self) -> Option<&Rc<dyn Duty>> {
        self.duty.as_ref()
    }

    pub fn eat(&mut self) -> String {
        self.hungry = false;
        debug!(animal = %self.name, "ate");
        format!("{} is eating... nom nom nom! 🍽️", self.name)
    }

    pub fn sleep(&mut self) -> String {
        self.sleepy = false;
        debug!(animal = %self.name, "slept");
        format!("{} is sleeping...", self.name)
    }

    pub fn make_hungry(&mut self) {
        self.hungry = true;
        debug!(animal = %self.name, "now hungry");
    }

    pub fn make_sleepy(&mut self) {
        self.sleepy = true;
        debug!(animal = %self.name, "now sleepy");
    }

    /// Swap the current action for `action`, whatever was there before.
    pub fn set_action(&mut self, action: Rc<dyn Action>) {
        debug!(
            animal = %self.name,
            from = self.action.as_ref().map(|a| a.name()).unwrap_or("None"),
            to = action.name(),
            "action changed"
        );
        self.action = Some(action);
    }

    /// Swap the current duty for `duty`, whatever was there before.
    pub fn set_duty(&mut self, duty: Rc<dyn Duty>) {
        debug!(
            animal = %self.name,
            from = self.duty.as_ref().map(|d| d.name()).unwrap_or("None"),
            to = duty.name(),
            "duty changed"
        );
        self.duty = Some(duty);
    }

    pub fn perform_action(&self) -> Result<String> {
        let action = self
            .action
            .as_ref()
            .ok_or_else(|| self.unassigned(Capability::Action))?;
        Ok(action.perform(&self.name))
    }

    /// Carry out the current duty.
    ///
    /// A hungry or sleepy animal refuses, and the refusal is returned as a
    /// normal result. Hunger is checked first.
    pub fn perform_duty(&self) -> Result<String> {
        let duty = self
            .duty
            .as_ref()
            .ok_or_else(|| self.unassigned(Capability::Duty))?;

        if self.hungry {
            debug!(animal = %self.name, duty = duty.name(), "duty refused: hungry");
            return Ok(format!(
                "{} is too hungry to perform duty! Feed them first.",
                self.name
            ));
        }

        if self.sleepy {
            debug!(animal = %self.name, duty = duty.name(), "duty refused: sleepy");
            return Ok(format!(
                "{} is too sleepy to perform duty! Let them sleep first.",
                self.name
            ));
        }

        Ok(duty.execute(&self.name))
    }

    pub fn status(&self) -> Status {
        let mut conditions = Vec::new();
        if self.hungry {
            conditions.push(Condition::Hungry);
        }
        if self.sleepy {
            conditions.push(Condition::Sleepy);
        }

        Status {
            kind: self.kind.label.to_string(),
            name: self.name.clone(),
            legs: self.kind.legs,
            action: self.action.as_ref().map(|a| a.name().to_string()),
            duty: self.duty.as_ref().map(|d| d.name().to_string()),
            conditions,
        }
    }

    fn unassigned(&self, capability: Capability) -> FarmError {
        warn!(animal = %self.name, %capability, "nothing assigned");
        FarmError::UnassignedCapability {
            animal: self.name.clone(),
            capability,
        }
    }
}

impl fmt::Debug for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animal")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("action", &self.action.as_ref().map(|a| a.name()))
            .field("duty", &self.duty.as_ref().map(|d| d.name()))
            .field("hungry", &self.hungry)
            .field("sleepy", &self.sleepy)
            .finish()
    }
}
