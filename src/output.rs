use anyhow::Result;
use colored::*;

use crate::types::{rule, Condition, Status};

// Output status snapshots as JSON
pub fn output_json(statuses: &[Status]) -> Result<()> {
    let json = ::serde_json::to_string_pretty(statuses)?;
    println!("{}", json);
    Ok(())
}

// Output status snapshots as text with colorful formatting
pub fn output_text(statuses: &[Status]) -> Result<()> {
    for status in statuses {
        println!("{}", render_status(status));
        println!();
    }
    Ok(())
}

// Colored rendering of the status block; same lines as Status's Display
pub fn render_status(status: &Status) -> String {
    let rule = rule().dimmed();

    let action = match &status.action {
        Some(name) => name.yellow().bold(),
        None => "None".dimmed(),
    };
    let duty = match &status.duty {
        Some(name) => name.magenta().bold(),
        None => "None".dimmed(),
    };

    let state = if status.is_ready() {
        status.state_label().green().bold()
    } else if status.conditions.contains(&Condition::Hungry) {
        status.state_label().red().bold()
    } else {
        status.state_label().yellow().bold()
    };

    format!(
        "{rule}\n🐾 {}\n{rule}\nType: {}\nLegs: {}\nAction: {}\nDuty: {}\nState: {}\n{rule}",
        status.name.blue().bold(),
        status.kind.cyan(),
        status.legs,
        action,
        duty,
        state,
        rule = rule,
    )
}
