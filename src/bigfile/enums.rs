pub mod inflate_mode;
