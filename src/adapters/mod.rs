// Adapters layer: concrete record sources.

pub mod csv_source;
