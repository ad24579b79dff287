pub mod root_find;
