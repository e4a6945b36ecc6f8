pub mod seek_source;
