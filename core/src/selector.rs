//! One-shot picker over saved lists.

use crate::host::Host;
use crate::store::ListStore;
use crate::store::error::StoreError;
use crate::types::ListName;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Loaded(ListName),
    Cancelled,
    NothingSaved,
}

/// Lets the host pick a saved list and loads it.
pub fn select_and_load(
    store: &mut ListStore,
    host: &mut impl Host,
) -> Result<Selection, StoreError> {
    let names = store.list_saved_names()?;
    if names.is_empty() {
        return Ok(Selection::NothingSaved);
    }

    let items: Vec<String> = names.iter().map(|name| name.to_string()).collect();
    let Some(choice) = host.pick("Load list", &items) else {
        debug!("list selection cancelled");
        return Ok(Selection::Cancelled);
    };
    let Some(name) = names.get(choice) else {
        debug!(choice, "picker returned out-of-range choice");
        return Ok(Selection::Cancelled);
    };

    let loaded = store.load(name)?;
    Ok(Selection::Loaded(loaded))
}
