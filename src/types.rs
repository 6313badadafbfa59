use std::fmt;

use serde::{Deserialize, Serialize};

const RULE_WIDTH: usize = 50;

/// A state flag that is currently set on an animal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Hungry,
    Sleepy,
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Condition::Hungry => "Hungry",
            Condition::Sleepy => "Sleepy",
        }
    }

    pub fn as_symbol(&self) -> &str {
        match self {
            Condition::Hungry => "🍖",
            Condition::Sleepy => "😴",
        }
    }
}

/// Point-in-time snapshot of an animal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub kind: String,
    pub name: String,
    pub legs: u32,
    pub action: Option<String>,
    pub duty: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl Status {
    /// True when no condition blocks the animal's duty.
    pub fn is_ready(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn action_label(&self) -> &str {
        self.action.as_deref().unwrap_or("None")
    }

    pub fn duty_label(&self) -> &str {
        self.duty.as_deref().unwrap_or("None")
    }

    /// Active conditions joined by ", ", or the ready marker.
    pub fn state_label(&self) -> String {
        if self.is_ready() {
            return "✅ Ready".to_string();
        }
        self.conditions
            .iter()
            .map(|c| format!("{} {}", c.as_symbol(), c.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = rule();
        writeln!(f, "{}", rule)?;
        writeln!(f, "🐾 {}", self.name)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Type: {}", self.kind)?;
        writeln!(f, "Legs: {}", self.legs)?;
        writeln!(f, "Action: {}", self.action_label())?;
        writeln!(f, "Duty: {}", self.duty_label())?;
        writeln!(f, "State: {}", self.state_label())?;
        write!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Status {
        Status {
            kind: "Dog".to_string(),
            name: "Rex".to_string(),
            legs: 4,
            action: Some("Bark".to_string()),
            duty: None,
            conditions: Vec::new(),
        }
    }

    #[test]
    fn test_ready_status_text() {
        let text = sample().to_string();
        assert!(text.contains("🐾 Rex"));
        assert!(text.contains("Type: Dog"));
        assert!(text.contains("Legs: 4"));
        assert!(text.contains("Action: Bark"));
        assert!(text.contains("Duty: None"));
        assert!(text.contains("State: ✅ Ready"));
    }

    #[test]
    fn test_state_label_lists_every_condition() {
        let mut status = sample();
        status.conditions = vec![Condition::Hungry, Condition::Sleepy];
        assert!(!status.is_ready());
        assert_eq!(status.state_label(), "🍖 Hungry, 😴 Sleepy");
    }

    #[test]
    fn test_json_shape() {
        let mut status = sample();
        status.conditions.push(Condition::Sleepy);
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["legs"], 4);
        assert!(value["duty"].is_null());
        assert_eq!(value["conditions"][0], "sleepy");
    }
}
