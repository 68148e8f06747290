pub mod matrix_json;
