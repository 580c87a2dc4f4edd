pub mod page_config;
