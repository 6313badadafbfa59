//! The narrated walkthrough printed by the `animal-farm` binary.
//!
//! Each section writes its transcript to any [`Write`] sink so it can be
//! shown on a terminal or captured.

use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use tracing::info;

use crate::action::{Action, Bark, ChaseSheep, Crow, Fly};
use crate::animal::{Animal, Kind};
use crate::duty::{Duty, Guard, HerdSheep, LayEggs};
use crate::farm::Farm;
use crate::output::render_status;

const WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Basic,
    State,
    Runtime,
    Extensibility,
    Scenario,
    All,
}

impl Section {
    pub const ORDER: [Section; 5] = [
        Section::Basic,
        Section::State,
        Section::Runtime,
        Section::Extensibility,
        Section::Scenario,
    ];

    pub fn title(&self) -> &str {
        match self {
            Section::Basic => "🌾 BASIC USAGE DEMONSTRATION 🌾",
            Section::State => "😴 STATE MANAGEMENT: HUNGRY & SLEEPY 😴",
            Section::Runtime => "⚡ RUNTIME FLEXIBILITY ⚡",
            Section::Extensibility => "🔧 EXTENSIBILITY 🔧",
            Section::Scenario => "🚜 REALISTIC FARM SCENARIO 🚜",
            Section::All => "✨ ANIMAL FARM DEMO ✨",
        }
    }

    /// Sections this selection expands to, in running order.
    pub fn expand(self) -> Vec<Section> {
        match self {
            Section::All => Section::ORDER.to_vec(),
            one => vec![one],
        }
    }
}

/// Run the selected sections, pausing on `input` between them when asked.
pub fn run(
    selection: Section,
    out: &mut dyn Write,
    mut input: Option<&mut dyn BufRead>,
) -> Result<()> {
    let sections = selection.expand();

    banner(out)?;
    for (i, section) in sections.iter().enumerate() {
        info!(section = ?section, "running section");
        run_section(*section, out)?;

        let Some(next) = sections.get(i + 1) else { continue };
        let Some(reader) = input.as_deref_mut() else { continue };
        if !pause(out, reader, next)? {
            input = None;
        }
    }
    closing(out)?;
    Ok(())
}

pub fn run_section(section: Section, out: &mut dyn Write) -> Result<()> {
    match section {
        Section::Basic => basic_usage(out),
        Section::State => state_management(out),
        Section::Runtime => runtime_changes(out),
        Section::Extensibility => extensibility(out),
        Section::Scenario => farm_scenario(out),
        Section::All => {
            for one in Section::ORDER {
                run_section(one, out)?;
            }
            Ok(())
        }
    }
}

// Wait for Enter; false once the input is exhausted
fn pause(out: &mut dyn Write, input: &mut dyn BufRead, next: &Section) -> Result<bool> {
    write!(out, "\nPress Enter to continue to {}...", next.title())?;
    out.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    Ok(read > 0)
}

fn section_header(out: &mut dyn Write, title: &str) -> Result<()> {
    let rule = "=".repeat(WIDTH);
    writeln!(out, "\n{}", rule.dimmed())?;
    writeln!(out, "  {}", title.bold())?;
    writeln!(out, "{}\n", rule.dimmed())?;
    Ok(())
}

fn divider(out: &mut dyn Write, ch: char) -> Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(WIDTH).dimmed())?;
    Ok(())
}

fn banner(out: &mut dyn Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "╔{}╗", "═".repeat(WIDTH - 2))?;
    writeln!(out, "║{:^width$}║", "🌾 ANIMAL FARM DEMO 🌾", width = WIDTH - 4)?;
    writeln!(out, "╚{}╝", "═".repeat(WIDTH - 2))?;
    Ok(())
}

fn closing(out: &mut dyn Write) -> Result<()> {
    section_header(out, "✨ DEMO COMPLETE ✨")?;
    writeln!(out, "  ✅ Behaviors swapped at runtime on live animals")?;
    writeln!(out, "  ✅ New kinds, actions and duties added without touching the farm")?;
    writeln!(out)?;
    Ok(())
}

// Status block, action and duty for one animal
fn show_off(out: &mut dyn Write, animal: &Animal) -> Result<()> {
    writeln!(out, "{}", render_status(&animal.status()))?;
    writeln!(out, "{}", animal.perform_action()?)?;
    writeln!(out, "{}", animal.perform_duty()?)?;
    Ok(())
}

fn basic_usage(out: &mut dyn Write) -> Result<()> {
    section_header(out, Section::Basic.title())?;

    let eagle = Animal::bird("Eddie the Eagle", Some(Rc::new(Fly)), Some(Rc::new(LayEggs)));
    show_off(out, &eagle)?;

    writeln!(out)?;
    divider(out, '-')?;
    writeln!(out)?;

    let guard_dog = Animal::dog("Max", Some(Rc::new(Bark)), Some(Rc::new(Guard)));
    show_off(out, &guard_dog)?;
    Ok(())
}

fn state_management(out: &mut dyn Write) -> Result<()> {
    section_header(out, Section::State.title())?;

    let mut rooster = Animal::bird("Roger the Rooster", Some(Rc::new(Crow)), Some(Rc::new(LayEggs)));

    writeln!(out, "Roger tries to work...")?;
    writeln!(out, "{}", rooster.perform_duty()?)?;

    writeln!(out, "\n🍖 Roger gets hungry...")?;
    rooster.make_hungry();
    writeln!(out, "{}", render_status(&rooster.status()))?;
    writeln!(out, "\nRoger tries to work while hungry:")?;
    writeln!(out, "{}", rooster.perform_duty()?)?;

    writeln!(out, "\n{}", rooster.eat())?;
    writeln!(out, "\nNow Roger can work:")?;
    writeln!(out, "{}", rooster.perform_duty()?)?;

    writeln!(out, "\n😴 Roger gets sleepy...")?;
    rooster.make_sleepy();
    writeln!(out, "\nRoger tries to work while sleepy:")?;
    writeln!(out, "{}", rooster.perform_duty()?)?;

    writeln!(out, "\n{}", rooster.sleep())?;
    writeln!(out, "\nRefreshed and ready!")?;
    writeln!(out, "{}", rooster.perform_duty()?)?;
    Ok(())
}

fn runtime_changes(out: &mut dyn Write) -> Result<()> {
    section_header(out, Section::Runtime.title())?;

    writeln!(out, "Creating a versatile farm dog named Duke...")?;
    let mut duke = Animal::dog("Duke", Some(Rc::new(Bark)), Some(Rc::new(Guard)));

    writeln!(out, "\n📋 Duke's initial configuration:")?;
    writeln!(out, "{}", render_status(&duke.status()))?;
    writeln!(out, "\n🔊 Duke performs his action (Bark):")?;
    writeln!(out, "{}", duke.perform_action()?)?;
    writeln!(out, "\n🛡️ Duke performs his duty (Guard):")?;
    writeln!(out, "{}", duke.perform_duty()?)?;

    writeln!(out)?;
    divider(out, '~')?;
    writeln!(out, "⚡ CHANGING ACTION AT RUNTIME...")?;
    divider(out, '~')?;

    duke.set_action(Rc::new(ChaseSheep));
    writeln!(out, "\n📋 Duke's updated configuration:")?;
    writeln!(out, "{}", render_status(&duke.status()))?;
    writeln!(out, "\n🐑 Duke now performs his new action (Chase Sheep):")?;
    writeln!(out, "{}", duke.perform_action()?)?;

    writeln!(out)?;
    divider(out, '~')?;
    writeln!(out, "⚡ CHANGING DUTY AT RUNTIME...")?;
    divider(out, '~')?;

    duke.set_duty(Rc::new(HerdSheep));
    writeln!(out, "\n📋 Duke's final configuration:")?;
    writeln!(out, "{}", render_status(&duke.status()))?;
    writeln!(out, "\n🐑 Duke now performs his new duty (Herd Sheep):")?;
    writeln!(out, "{}", duke.perform_duty()?)?;

    writeln!(out, "\n✅ Duke's behavior changed on the same animal, no new instance needed.")?;
    Ok(())
}

// The cat kind and its behaviors exist only in this demo
const CAT: Kind = Kind::new("Cat", 4);

struct Meow;

impl Action for Meow {
    fn perform(&self, actor: &str) -> String {
        format!("{} meows: Meow meow! 🐱", actor)
    }

    fn name(&self) -> &str {
        "Meow"
    }
}

struct Purr;

impl Action for Purr {
    fn perform(&self, actor: &str) -> String {
        format!("{} purrs contentedly! 😺", actor)
    }

    fn name(&self) -> &str {
        "Purr"
    }
}

struct CatchMice;

impl Duty for CatchMice {
    fn execute(&self, actor: &str) -> String {
        format!("{} is catching mice in the barn! 🐭", actor)
    }

    fn name(&self) -> &str {
        "Catch Mice"
    }
}

fn extensibility(out: &mut dyn Write) -> Result<()> {
    section_header(out, Section::Extensibility.title())?;

    writeln!(out, "Adding a completely new animal kind: CAT! 🐱")?;
    writeln!(out, "\nStep 1: new actions for cats")?;
    writeln!(out, "✅ {} action", Meow.name())?;
    writeln!(out, "✅ {} action", Purr.name())?;
    writeln!(out, "\nStep 2: a new duty for cats")?;
    writeln!(out, "✅ {} duty", CatchMice.name())?;
    writeln!(out, "\nStep 3: a new kind with {} legs", CAT.legs())?;
    writeln!(out, "✅ {} kind", CAT.label())?;

    writeln!(out, "\nStep 4: create and use a cat")?;
    let mut whiskers = Animal::new(CAT, "Whiskers", Some(Rc::new(Meow)), Some(Rc::new(CatchMice)));

    writeln!(out)?;
    divider(out, '-')?;
    show_off(out, &whiskers)?;

    writeln!(out)?;
    divider(out, '-')?;
    writeln!(out, "Changing Whiskers' action to purring...")?;
    whiskers.set_action(Rc::new(Purr));
    writeln!(out, "{}", whiskers.perform_action()?)?;

    writeln!(out, "\n✅ A new kind with new actions and duties, and nothing existing was modified.")?;
    Ok(())
}

fn farm_scenario(out: &mut dyn Write) -> Result<()> {
    section_header(out, Section::Scenario.title())?;

    let mut farm = Farm::sunny_meadows();
    writeln!(out, "Welcome to {}!\n", farm.name)?;
    writeln!(out, "The morning begins...\n")?;

    for animal in farm.iter() {
        divider(out, '-')?;
        writeln!(out, "\n{}'s morning routine:", animal.name())?;
        writeln!(out, "{}", animal.perform_action()?)?;
        writeln!(out, "{}", animal.perform_duty()?)?;
        writeln!(out)?;
    }

    divider(out, '-')?;
    writeln!(out, "\n🌅 Mid-morning: the animals are getting hungry...")?;
    farm.make_all_hungry();
    for animal in farm.iter() {
        writeln!(out, "\n{}: {}", animal.name(), animal.perform_duty()?)?;
    }

    writeln!(out, "\n🍽️  Feeding time!")?;
    for said in farm.feed_all() {
        writeln!(out, "{}", said)?;
    }

    writeln!(out, "\n📋 Back to work, everyone!\n")?;
    for animal in farm.iter() {
        writeln!(out, "{}: {}", animal.name(), animal.perform_duty()?)?;
    }
    Ok(())
}
