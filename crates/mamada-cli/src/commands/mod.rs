pub mod config;
pub mod profile;
pub mod report;
pub mod sessions;
pub mod status;
pub mod track;

use std::rc::Rc;

use mamada_core::{Database, Tracker};

/// Open the tracker over the on-disk store.
pub fn open_tracker() -> Result<Tracker<Rc<Database>>, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    Ok(Tracker::open(Rc::new(db)))
}
