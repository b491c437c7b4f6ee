pub mod ansi;
