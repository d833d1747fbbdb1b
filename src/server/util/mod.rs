pub mod pesel;
