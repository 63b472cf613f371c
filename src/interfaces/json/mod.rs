pub mod status_reader;
