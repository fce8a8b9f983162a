use clap::Subcommand;
use mamada_core::Profile;

use super::open_tracker;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the saved profile
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save mother and baby names
    Set {
        /// Mother's name
        #[arg(long)]
        mother: String,
        /// Baby's name
        #[arg(long)]
        baby: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = open_tracker()?;

    match action {
        ProfileAction::Show { json } => {
            let profile = tracker.profile();
            if json {
                println!("{}", serde_json::to_string_pretty(profile)?);
            } else if profile.is_complete() {
                println!("Mother: {}", profile.mother_name);
                println!("Baby:   {}", profile.baby_name);
            } else {
                println!("No profile yet. Run `mamada-cli profile set --mother <NAME> --baby <NAME>`.");
            }
        }
        ProfileAction::Set { mother, baby } => {
            let saved = tracker.save_profile(&Profile::new(mother, baby))?;
            println!("Profile saved: {} / {}", saved.mother_name, saved.baby_name);
        }
    }
    Ok(())
}
