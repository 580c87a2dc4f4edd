pub mod back_to_top;
