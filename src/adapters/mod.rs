// Adapters layer: concrete access to the outside world (local files).

pub mod input;
