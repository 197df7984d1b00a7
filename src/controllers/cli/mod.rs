pub mod cli_controller;
