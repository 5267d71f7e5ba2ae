/// CSV export of the plant catalog.
pub mod export;
