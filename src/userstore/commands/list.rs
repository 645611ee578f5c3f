use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Hand back the store bytes untouched: no parsing, no validation, no reformatting.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let bytes = store.read_raw()?;
    Ok(CmdResult::default().with_listing(bytes))
}
