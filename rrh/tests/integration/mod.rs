mod command_tests;
mod config_tests;
mod plan_tests;
