pub mod read_json;
