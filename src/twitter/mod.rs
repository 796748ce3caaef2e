// Twitter archive ingestion — typed post records and the archive loader.
//
// Raw archive JSON is loosely structured (fields present or not depending on
// the kind of tweet). It is validated exactly once here, in `raw`, and the
// rest of the crate only ever sees the typed `PostRecord`.

pub mod archive;
pub mod raw;
pub mod record;
