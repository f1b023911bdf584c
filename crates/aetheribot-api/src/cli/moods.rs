//! Mood catalog command.

use anyhow::Result;
use console::style;

use aetheribot_types::mood::{Mood, MoodEntry};

/// Print the persona moods and their instructions, or only `only`.
pub fn list_moods(only: Option<Mood>, json: bool) -> Result<()> {
    let moods: Vec<Mood> = match only {
        Some(mood) => vec![mood],
        None => Mood::ALL.to_vec(),
    };

    if json {
        let entries: Vec<MoodEntry> = moods.into_iter().map(MoodEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!();
    for mood in moods {
        let marker = if mood == Mood::default() {
            style(" (default)").dim().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", style(mood.label()).bold(), marker);
        println!("    {}", style(mood.system_prompt()).dim());
        println!();
    }

    Ok(())
}
