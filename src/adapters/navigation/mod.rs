pub mod terminal_navigator;
