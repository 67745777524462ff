use crate::core::prompt::ask_yes_no;
use crate::domain::model::{CharClass, CharPool};
use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Asks about every character class, then builds the pool from the ones
/// selected. Prints a notice and returns `None` if nothing was selected.
pub fn build_pool<C: Console + ?Sized>(console: &mut C) -> Result<Option<CharPool>> {
    let mut selected = Vec::with_capacity(CharClass::ALL.len());
    for class in CharClass::ALL {
        if ask_yes_no(console, &format!("Include {}", class.label()))? {
            selected.push(class);
        }
    }

    tracing::debug!("Selected character classes: {:?}", selected);

    match CharPool::from_classes(&selected) {
        Some(pool) => Ok(Some(pool)),
        None => {
            tracing::info!("No character classes selected");
            console.print_line("")?;
            console.print_line("No character sets selected. Cannot generate password.")?;
            Ok(None)
        }
    }
}
