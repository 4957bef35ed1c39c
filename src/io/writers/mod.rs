pub mod ico;
