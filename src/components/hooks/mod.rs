pub mod use_is_mobile;
