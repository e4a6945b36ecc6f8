pub mod metadata_source;
